use leptos::prelude::*;
use promptdeck_core::FormState;

#[component]
pub fn ResponsePanel(form: RwSignal<FormState>) -> impl IntoView {
    move || {
        let response = form.with(|f| f.response.clone());
        (!response.is_empty()).then(|| view! {
            <div class="response-panel">
                <h4>"Response:"</h4>
                <pre class="response">{response}</pre>
            </div>
        })
    }
}
