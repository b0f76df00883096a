use serde::{Deserialize, Serialize};

/// Path of the completion endpoint, relative to its host.
pub const GENERATE_PATH: &str = "/api/generate";

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub label: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_new_tokens: i64,
    pub top_p: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub completion: String,
}
