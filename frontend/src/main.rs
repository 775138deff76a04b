mod api;
mod components;
mod geo;

use yew::prelude::*;

use components::footer::render_footer;
use components::incident_feed::IncidentFeed;
use components::navbar::render_navbar;
use components::report_form::ReportForm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Report,
    Feed,
}

enum Msg {
    Navigate(Page),
}

struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { page: Page::Report }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                let changed = self.page != page;
                self.page = page;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);

        html! {
            <div class="container">
                { render_navbar(self.page, on_navigate) }
                <main class="main-content">
                    {
                        // The feed remounts on navigation, which is what
                        // triggers its one fetch per mount.
                        match self.page {
                            Page::Report => html! { <ReportForm /> },
                            Page::Feed => html! { <IncidentFeed /> },
                        }
                    }
                </main>
                { render_footer() }
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
