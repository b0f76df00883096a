use anyhow::Result;
use promptdeck_core::{preset, FormState};

/// Field values given on the `generate` command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub prompt: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<i64>,
    pub top_p: Option<f64>,
}

/// Applies the preset first, then each explicit override. A form that could
/// not be submitted is an error.
pub fn prepare_form(preset_name: Option<&str>, overrides: Overrides) -> Result<FormState> {
    let mut form = FormState::new();

    if let Some(name) = preset_name {
        form.select_preset(preset::resolve(name)?);
    }
    if let Some(prompt) = overrides.prompt {
        form.set_prompt(prompt);
    }
    if let Some(t) = overrides.temperature {
        form.set_temperature(t);
    }
    if let Some(n) = overrides.max_tokens {
        form.set_max_tokens(n);
    }
    if let Some(p) = overrides.top_p {
        form.set_top_p(p);
    }

    if let Err(reason) = form.check_submit() {
        anyhow::bail!("Nothing to submit: {}", reason);
    }
    Ok(form)
}
