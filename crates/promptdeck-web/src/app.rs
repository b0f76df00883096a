use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::prelude::*;
use promptdeck_core::{FormState, Session};

use crate::api;
use crate::components::header::Header;
use crate::components::preset_bar::PresetBar;
use crate::components::prompt_form::PromptForm;
use crate::components::response_panel::ResponsePanel;

#[component]
pub fn App() -> impl IntoView {
    let form = RwSignal::new(FormState::new());
    let session = Session::open();

    on_cleanup({
        let session = session.clone();
        move || session.close()
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(request) = form.try_update(|f| f.begin_submit().ok()).flatten() else {
            return;
        };

        let session = session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::generate(&request).await;
            if let Err(e) = &result {
                warn!("Completion request failed: {}", e);
            }
            // Unmounted forms keep their last state; the result is dropped.
            session.if_open(|| form.try_update(|f| f.finish_submit(result)));
        });
    };

    view! {
        <div class="app">
            <Header />
            <PresetBar form=form />
            <PromptForm form=form on_submit=Callback::new(submit) />
            <ResponsePanel form=form />
        </div>
    }
}
