pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod preset;
pub mod session;

pub use api::{CompletionRequest, CompletionResponse, GENERATE_PATH};
pub use config::ClientConfig;
pub use error::{CompletionError, PromptDeckError, Result};
pub use form::{FormState, SubmitBlocked};
pub use preset::{presets, Preset};
pub use session::Session;
