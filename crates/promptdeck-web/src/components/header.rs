use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h2>"Text Completion"</h2>
            <p class="subtitle">"Hover over a button to preview its prompt."</p>
        </header>
    }
}
