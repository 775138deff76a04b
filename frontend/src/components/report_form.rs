use gloo_file::{File as GlooFile, ObjectUrl};
use shared::presenter::Presenter;
use shared::{AnalysisResult, CATEGORIES, RequestToken};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use super::overlay::render_overlay;
use super::utils::debounce;
use crate::api;

const FILE_INPUT_ID: &str = "report-image-input";

pub enum Msg {
    FileSelected(GlooFile),
    ClearImage,
    CategoryChanged(String),
    DescriptionChanged(String),
    Reset,
    Submit(SubmitEvent),
    ResponseArrived(RequestToken, AnalysisResult),
    Aborted(RequestToken),
    CloseOverlay,
}

/// Capture form owning the in-progress draft (selected file, category,
/// description), the preview object URL, and the result overlay's state
/// machine. The preview URL is revoked whenever the selection changes or
/// the component is torn down, via `ObjectUrl`'s drop.
pub struct ReportForm {
    image: Option<GlooFile>,
    preview: Option<ObjectUrl>,
    category: String,
    description: String,
    presenter: Presenter,
}

impl Component for ReportForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            image: None,
            preview: None,
            category: String::new(),
            description: String::new(),
            presenter: Presenter::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => {
                // Replacing the preview drops the previous object URL.
                self.preview = Some(ObjectUrl::from(file.clone()));
                self.image = Some(file);
                true
            }
            Msg::ClearImage => {
                self.image = None;
                self.preview = None;
                clear_file_input();
                true
            }
            Msg::CategoryChanged(category) => {
                self.category = category;
                true
            }
            Msg::DescriptionChanged(description) => {
                self.description = description;
                true
            }
            Msg::Reset => {
                self.image = None;
                self.preview = None;
                self.category = String::new();
                self.description = String::new();
                clear_file_input();
                true
            }
            Msg::Submit(event) => self.handle_submit(ctx, event),
            Msg::ResponseArrived(token, result) => self.presenter.response_arrived(token, result),
            Msg::Aborted(token) => self.presenter.aborted(token),
            Msg::CloseOverlay => {
                self.presenter.closed();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(Msg::Submit);
        let on_close = link.callback(|_| Msg::CloseOverlay);

        html! {
            <div class="report-form">
                <form {onsubmit}>
                    { self.render_image_section(ctx) }
                    { self.render_category_select(ctx) }
                    { self.render_description(ctx) }
                    <div class="form-actions">
                        <button
                            type="button"
                            class="reset-btn"
                            onclick={debounce(300, {
                                let link = link.clone();
                                move || link.send_message(Msg::Reset)
                            })}
                        >
                            {"Reset"}
                        </button>
                        <button type="submit" class="submit-btn">{"Submit"}</button>
                    </div>
                </form>
                { render_overlay(self.presenter.state(), on_close) }
            </div>
        }
    }
}

impl ReportForm {
    /// Opens the overlay in its loading state before any async work starts,
    /// then runs the encode -> locate -> POST pipeline. A second submit
    /// while one is in flight simply starts a newer attempt; the token
    /// keeps the older response from overwriting it. Pre-request failures
    /// (no geolocation capability, fix denied, unreadable file) are logged
    /// and close the overlay without a message.
    fn handle_submit(&mut self, ctx: &Context<Self>, event: SubmitEvent) -> bool {
        event.prevent_default();

        let token = self.presenter.submit_invoked();
        let category = self.category.clone();
        let description = self.description.clone();
        let image = self.image.clone();
        let link = ctx.link().clone();

        spawn_local(async move {
            match api::submit_report(category, description, image).await {
                Ok(result) => link.send_message(Msg::ResponseArrived(token, result)),
                Err(err) => {
                    log::error!("submission aborted: {err}");
                    link.send_message(Msg::Aborted(token));
                }
            }
        });

        true
    }

    fn render_image_section(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let handle_change = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input
                .files()
                .and_then(|files| files.item(0))
                .map(|file| Msg::FileSelected(GlooFile::from(file)))
        });

        html! {
            <div class="form-field">
                <label class="field-label">{"Image"}</label>
                <div class="image-drop-area">
                    {
                        if let Some(url) = &self.preview {
                            html! {
                                <>
                                    <img class="image-preview" src={url.to_string()} alt="Preview" />
                                    <button
                                        type="button"
                                        class="change-image-btn"
                                        onclick={link.callback(|_| Msg::ClearImage)}
                                    >
                                        {"Change Image"}
                                    </button>
                                </>
                            }
                        } else {
                            html! {
                                <label class="upload-prompt">
                                    <i class="fa-solid fa-camera"></i>
                                    <span>{"Upload an Image"}</span>
                                    <input
                                        type="file"
                                        id={FILE_INPUT_ID}
                                        accept="image/png, image/jpeg, image/gif"
                                        class="sr-only"
                                        onchange={handle_change}
                                    />
                                </label>
                            }
                        }
                    }
                    // Advisory only; nothing rejects other types or sizes.
                    <p class="file-types">{"PNG, JPG, GIF up to 10MB"}</p>
                </div>
            </div>
        }
    }

    fn render_category_select(&self, ctx: &Context<Self>) -> Html {
        let handle_change = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::CategoryChanged(select.value())
        });

        html! {
            <div class="form-field">
                <label class="field-label" for="category">{"Category"}</label>
                <select id="category" name="category" onchange={handle_change}>
                    <option value="" disabled=true selected={self.category.is_empty()}>
                        {"Select a category"}
                    </option>
                    { for CATEGORIES.iter().map(|category| html! {
                        <option value={*category} selected={self.category == *category}>
                            { *category }
                        </option>
                    })}
                </select>
            </div>
        }
    }

    fn render_description(&self, ctx: &Context<Self>) -> Html {
        let handle_input = ctx.link().callback(|e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::DescriptionChanged(textarea.value())
        });

        html! {
            <div class="form-field">
                <label class="field-label" for="description">{"Description"}</label>
                <textarea
                    id="description"
                    name="description"
                    rows="3"
                    value={self.description.clone()}
                    oninput={handle_input}
                />
            </div>
        }
    }
}

fn clear_file_input() {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(FILE_INPUT_ID))
    {
        if let Ok(input) = element.dyn_into::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
