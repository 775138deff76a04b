use shared::presenter::{OverlayState, recommendations};
use yew::prelude::*;

/// Renders the modal reflecting the submission lifecycle. `Loading` shows
/// only a spinner; `Result` shows the recommendation list pulled from the
/// response's nested fragment, which may legitimately be empty.
pub fn render_overlay(state: &OverlayState, on_close: Callback<MouseEvent>) -> Html {
    let body = match state {
        OverlayState::Closed => return html! {},
        OverlayState::Loading => html! {
            <div class="overlay-loading">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <span class="visually-hidden">{"Loading analysis..."}</span>
            </div>
        },
        // Success and the generic failure payload share this state; they
        // differ only in content.
        OverlayState::Result(result) => match &result.message {
            Some(message) => html! {
                <div class="overlay-title">{ message }</div>
            },
            None => {
                let items = recommendations(result);
                html! {
                    <>
                        <div class="overlay-title">{"Emergency Request Sent!"}</div>
                        <div class="overlay-body">
                            <h2>{"Recommendations"}</h2>
                            <ul class="recommendation-list">
                                { for items.iter().map(|item| html! { <li>{ item }</li> }) }
                            </ul>
                        </div>
                    </>
                }
            }
        },
    };

    html! {
        <div class="overlay-backdrop">
            <div class="overlay-panel">
                <div class="overlay-content">
                    { body }
                </div>
                <div class="overlay-actions">
                    <button type="button" class="close-btn" onclick={on_close}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
