use yew::prelude::*;

pub fn render_footer() -> Html {
    html! {
        <footer class="app-footer">
            <p>{"Snap Report | Citizen incident reporting"}</p>
        </footer>
    }
}
