use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CompletionError, CompletionRequest, CompletionResponse, Preset};

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: i64 = 200;
pub const DEFAULT_TOP_P: f64 = 1.0;

/// Why a submit was refused. A refused submit changes nothing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("a request is already in flight")]
    Loading,

    #[error("choose a preset or type a prompt first")]
    EmptyPrompt,
}

/// Everything the prompt form shows, for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub label: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: i64,
    pub top_p: f64,

    pub response: String,
    pub loading: bool,

    #[serde(skip)]
    pub hovered_preset: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            label: String::new(),
            prompt: String::new(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
            response: String::new(),
            loading: false,
            hovered_preset: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites all five preset fields at once.
    pub fn select_preset(&mut self, preset: &Preset) {
        tracing::debug!("Selecting preset: {}", preset.label);
        self.label = preset.label.to_string();
        self.prompt = preset.prompt.to_string();
        self.temperature = preset.temperature;
        self.max_tokens = preset.max_tokens;
        self.top_p = preset.top_p;
    }

    pub fn is_active(&self, preset: &Preset) -> bool {
        self.label == preset.label
    }

    /// `Some(prompt)` on mouse enter, `None` on mouse leave.
    pub fn hover_preset(&mut self, text: Option<&str>) {
        self.hovered_preset = text.map(str::to_string);
    }

    pub fn is_previewing(&self, preset: &Preset) -> bool {
        self.hovered_preset.as_deref() == Some(preset.prompt)
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    // Numeric setters do not clamp; the service decides what is valid.

    pub fn set_temperature(&mut self, value: f64) {
        self.temperature = value;
    }

    pub fn set_max_tokens(&mut self, value: i64) {
        self.max_tokens = value;
    }

    pub fn set_top_p(&mut self, value: f64) {
        self.top_p = value;
    }

    pub fn check_submit(&self) -> Result<(), SubmitBlocked> {
        if self.loading {
            return Err(SubmitBlocked::Loading);
        }
        if self.label.is_empty() && self.prompt.trim().is_empty() {
            return Err(SubmitBlocked::EmptyPrompt);
        }
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    pub fn request(&self) -> CompletionRequest {
        CompletionRequest {
            label: self.label.clone(),
            prompt: self.prompt.clone(),
            temperature: self.temperature,
            max_new_tokens: self.max_tokens,
            top_p: self.top_p,
        }
    }

    /// Gates the submit and enters the loading state. The previous response
    /// stays visible until the new one arrives.
    pub fn begin_submit(&mut self) -> Result<CompletionRequest, SubmitBlocked> {
        self.check_submit()?;
        self.loading = true;
        Ok(self.request())
    }

    pub fn finish_submit(&mut self, result: std::result::Result<CompletionResponse, CompletionError>) {
        self.response = match result {
            Ok(resp) => resp.completion,
            Err(e) => e.display_text(),
        };
        self.loading = false;
    }
}
