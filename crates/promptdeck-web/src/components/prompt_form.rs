use std::fmt::Display;
use std::str::FromStr;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use promptdeck_core::FormState;
use web_sys::HtmlInputElement;

/// Value to store for a numeric box, or the text to put back into the box
/// when what it holds does not parse.
fn numeric_input<T: FromStr + Display>(raw: &str, current: T) -> Result<T, String> {
    raw.trim().parse().map_err(|_| current.to_string())
}

/// Parses the input event, restoring the stored value on failure so the box
/// always shows what will be sent.
fn read_number<T: FromStr + Display>(ev: &web_sys::Event, current: T) -> Option<T> {
    match numeric_input(&event_target_value(ev), current) {
        Ok(n) => Some(n),
        Err(shown) => {
            event_target::<HtmlInputElement>(ev).set_value(&shown);
            None
        }
    }
}

/// Prompt textarea, the three sampling inputs and the submit button.
///
/// The `min`/`max`/`step` attributes are hints for the browser only; whatever
/// parses is stored as typed, anything else snaps back to the stored value.
#[component]
pub fn PromptForm(form: RwSignal<FormState>, on_submit: Callback<SubmitEvent>) -> impl IntoView {
    let loading = move || form.with(|f| f.loading);

    view! {
        <form class="prompt-form" on:submit=move |ev| on_submit.run(ev)>
            <textarea
                rows="5"
                placeholder="Type your prompt here or choose a preset above..."
                prop:value=move || form.with(|f| f.prompt.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    form.update(|f| f.set_prompt(text));
                }
            />

            <div class="params">
                <label>
                    "Temperature:"
                    <input
                        type="number"
                        step="0.1"
                        min="0"
                        max="1"
                        prop:value=move || form.with(|f| f.temperature.to_string())
                        on:input=move |ev| {
                            let current = form.with_untracked(|f| f.temperature);
                            if let Some(n) = read_number(&ev, current) {
                                form.update(|f| f.set_temperature(n));
                            }
                        }
                    />
                </label>
                <label>
                    "Max Tokens:"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.max_tokens.to_string())
                        on:input=move |ev| {
                            let current = form.with_untracked(|f| f.max_tokens);
                            if let Some(n) = read_number(&ev, current) {
                                form.update(|f| f.set_max_tokens(n));
                            }
                        }
                    />
                </label>
                <label>
                    "Top P:"
                    <input
                        type="number"
                        step="0.1"
                        min="0"
                        max="1"
                        prop:value=move || form.with(|f| f.top_p.to_string())
                        on:input=move |ev| {
                            let current = form.with_untracked(|f| f.top_p);
                            if let Some(n) = read_number(&ev, current) {
                                form.update(|f| f.set_top_p(n));
                            }
                        }
                    />
                </label>
            </div>

            <button
                type="submit"
                class="generate-btn"
                disabled=move || !form.with(FormState::can_submit)
            >
                {move || if loading() {
                    view! { <span class="loading"><span class="spinner"></span>" Generating..."</span> }.into_any()
                } else {
                    view! { <span>"Generate"</span> }.into_any()
                }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_input_accepts_out_of_range() {
        assert_eq!(numeric_input("1.5", 0.7), Ok(1.5));
        assert_eq!(numeric_input("-3", 200i64), Ok(-3));
        assert_eq!(numeric_input(" 0 ", 200i64), Ok(0));
    }

    #[test]
    fn test_numeric_input_restores_current() {
        assert_eq!(numeric_input("", 200i64), Err("200".to_string()));
        assert_eq!(numeric_input("12.5", 200i64), Err("200".to_string()));
        assert_eq!(numeric_input("abc", 0.7), Err("0.7".to_string()));
    }
}
