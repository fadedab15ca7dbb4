//! Error Types

use thiserror::Error;

use crate::notice::ErrorNotice;

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Chat error types
///
/// Cloneable so a hook can hand the current error to every render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Backend answered with a non-success status; `message` is the body
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    Transport(String),

    /// Response body was not valid UTF-8 text
    #[error("Stream decode error: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChatError {
    /// Message text as surfaced to the UI
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Banner copy for this error
    pub fn notice(&self) -> ErrorNotice {
        ErrorNotice::classify(&self.message())
    }

    /// Build an API error from a failed response
    ///
    /// JSON bodies of the form `{"error": "..."}`, `{"error": {"message": "..."}}`
    /// or `{"message": "..."}` are unwrapped; anything else is kept verbatim.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value["error"]
                    .as_str()
                    .or_else(|| value["error"]["message"].as_str())
                    .or_else(|| value["message"].as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| body.trim().to_string());

        ChatError::Api { status, message }
    }
}
