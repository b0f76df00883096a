use async_trait::async_trait;
use promptdeck_core::{CompletionError, CompletionRequest, CompletionResponse};

/// Anything that can turn a completion request into generated text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}
