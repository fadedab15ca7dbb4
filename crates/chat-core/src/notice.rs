//! Error banner taxonomy
//!
//! Errors reach the UI as plain message strings, so they are told apart by
//! substring only.

/// Shown when a generic error carries no message
pub const FALLBACK_DETAIL: &str = "An unexpected error occurred while processing your request.";

const RATE_LIMIT_TITLE: &str = "Rate Limit Reached";
const RATE_LIMIT_DETAIL: &str = "You've reached your API usage limit for this period.";
const GENERIC_TITLE: &str = "Something went wrong";
const EMPTY_MESSAGE_DETAIL: &str = "Please make sure your message is not empty and try again.";
const EMPTY_MESSAGE_HINT: &str = "Tip: Make sure to type a message before sending";

/// What the error banner should say
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorNotice {
    /// Quota or rate limit hit
    RateLimited,
    /// Backend rejected a message without content (`parts field` errors)
    EmptyMessage,
    /// Anything else; holds the detail line to show
    Generic(String),
}

impl ErrorNotice {
    /// Classify an error message
    pub fn classify(message: &str) -> Self {
        if message.contains("quota") || message.contains("Quota exceeded") {
            ErrorNotice::RateLimited
        } else if message.contains("parts field") {
            ErrorNotice::EmptyMessage
        } else if message.is_empty() {
            ErrorNotice::Generic(FALLBACK_DETAIL.into())
        } else {
            ErrorNotice::Generic(message.into())
        }
    }

    /// Banner heading
    pub fn title(&self) -> &'static str {
        match self {
            ErrorNotice::RateLimited => RATE_LIMIT_TITLE,
            ErrorNotice::EmptyMessage | ErrorNotice::Generic(_) => GENERIC_TITLE,
        }
    }

    /// Banner body
    pub fn detail(&self) -> &str {
        match self {
            ErrorNotice::RateLimited => RATE_LIMIT_DETAIL,
            ErrorNotice::EmptyMessage => EMPTY_MESSAGE_DETAIL,
            ErrorNotice::Generic(detail) => detail,
        }
    }

    /// Optional extra tip rendered below the body
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ErrorNotice::EmptyMessage => Some(EMPTY_MESSAGE_HINT),
            _ => None,
        }
    }

    /// Whether this notice uses the rate-limit styling
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, ErrorNotice::RateLimited)
    }
}
