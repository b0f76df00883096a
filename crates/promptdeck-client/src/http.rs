use std::time::Duration;

use async_trait::async_trait;
use promptdeck_core::{
    ClientConfig, CompletionError, CompletionRequest, CompletionResponse, PromptDeckError, Result,
};

use crate::backend::CompletionBackend;

const BODY_EXCERPT_CHARS: usize = 500;

/// Posts form requests to the completion endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    url: String,
    client: reqwest::Client,
}

impl CompletionClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| PromptDeckError::Config(e.to_string()))?;

        Ok(Self {
            url: config.url(),
            client,
        })
    }

    pub async fn generate(
        &self,
        request: &CompletionRequest,
    ) -> std::result::Result<CompletionResponse, CompletionError> {
        tracing::debug!(url = %self.url, label = %request.label, "Posting completion request");

        let resp = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            tracing::warn!("Completion endpoint returned {}", status);
            return Err(CompletionError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            let excerpt: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
            CompletionError::Decode(format!(
                "Failed to parse response: {} - Body: {}",
                e, excerpt
            ))
        })
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> std::result::Result<CompletionResponse, CompletionError> {
        self.generate(request).await
    }
}
