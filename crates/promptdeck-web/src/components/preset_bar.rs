use leptos::prelude::*;
use promptdeck_core::{presets, FormState};

#[component]
pub fn PresetBar(form: RwSignal<FormState>) -> impl IntoView {
    view! {
        <div class="preset-bar">
            {presets().iter().map(|preset| {
                let preset = *preset;
                let is_active = move || form.with(|f| f.is_active(&preset));
                let is_previewing = move || form.with(|f| f.is_previewing(&preset));
                view! {
                    <div
                        class="preset"
                        on:mouseenter=move |_| form.update(|f| f.hover_preset(Some(preset.prompt)))
                        on:mouseleave=move |_| form.update(|f| f.hover_preset(None))
                    >
                        <button
                            type="button"
                            class=move || if is_active() { "preset-btn active" } else { "preset-btn" }
                            on:click=move |_| form.update(|f| f.select_preset(&preset))
                        >
                            {preset.label}
                        </button>
                        {move || is_previewing().then(|| view! {
                            <div class="preset-preview">{preset.prompt}</div>
                        })}
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
