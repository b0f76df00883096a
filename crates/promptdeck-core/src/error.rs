use thiserror::Error;

/// Failure of a single completion round trip.
///
/// Every variant collapses to the same user-visible text, `Error: <message>`,
/// so the message is all a front-end ever shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("{0}")]
    Transport(String),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("{0}")]
    Decode(String),
}

impl CompletionError {
    pub fn display_text(&self) -> String {
        format!("Error: {}", self)
    }
}

#[derive(Error, Debug)]
pub enum PromptDeckError {
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PromptDeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_prefixes_message() {
        let err = CompletionError::Transport("Network Error".to_string());
        assert_eq!(err.display_text(), "Error: Network Error");
    }

    #[test]
    fn test_status_message() {
        let err = CompletionError::Status(502);
        assert_eq!(
            err.display_text(),
            "Error: Request failed with status code 502"
        );
    }
}
