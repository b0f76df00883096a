use serde::{Deserialize, Serialize};

use crate::{api::GENERATE_PATH, PromptDeckError, Result};

pub const ENDPOINT_ENV: &str = "PROMPTDECK_ENDPOINT";
pub const TIMEOUT_ENV: &str = "PROMPTDECK_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host of the completion service.
    pub endpoint: String,
    pub path: String,
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            path: GENERATE_PATH.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `PROMPTDECK_ENDPOINT` and `PROMPTDECK_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                PromptDeckError::Config(format!("{}={:?}: {}", TIMEOUT_ENV, raw, e))
            })?;
            config.timeout_secs = Some(secs);
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), self.path)
    }
}
