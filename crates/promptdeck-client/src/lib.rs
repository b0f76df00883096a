pub mod backend;
pub mod controller;
pub mod http;

pub use backend::CompletionBackend;
pub use controller::{PromptController, SessionHandle, SubmitOutcome};
pub use http::CompletionClient;
