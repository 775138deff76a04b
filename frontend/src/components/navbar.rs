use yew::prelude::*;

use crate::Page;

/// Top navigation bar: brand, view switch, and the emergency call shortcut.
pub fn render_navbar(active: Page, on_navigate: Callback<Page>) -> Html {
    let nav_button = |page: Page, label: &str| {
        let on_navigate = on_navigate.clone();
        html! {
            <button
                type="button"
                class={classes!("nav-link", (active == page).then_some("active"))}
                onclick={Callback::from(move |_| on_navigate.emit(page))}
            >
                { label }
            </button>
        }
    };

    html! {
        <header class="navbar">
            <nav aria-label="Global">
                <span class="brand">{"Snap Report"}</span>
                <div class="nav-links">
                    { nav_button(Page::Report, "Report") }
                    { nav_button(Page::Feed, "Incidents") }
                </div>
                <a class="call-911" href="tel:911">{"Call 911"}</a>
            </nav>
        </header>
    }
}
