//! Chat Status

use serde::{Deserialize, Serialize};

/// Request lifecycle as exposed by a chat hook
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    /// Nothing in flight; ready for input
    #[default]
    Idle,
    /// Request sent, no response bytes yet
    Submitted,
    /// Assistant turn is arriving
    Streaming,
    /// Last request failed
    Error,
}

impl ChatStatus {
    /// Whether a request is in flight and can be stopped
    pub fn is_busy(self) -> bool {
        matches!(self, ChatStatus::Submitted | ChatStatus::Streaming)
    }
}

impl std::fmt::Display for ChatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatStatus::Idle => write!(f, "idle"),
            ChatStatus::Submitted => write!(f, "submitted"),
            ChatStatus::Streaming => write!(f, "streaming"),
            ChatStatus::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_states() {
        assert!(ChatStatus::Submitted.is_busy());
        assert!(ChatStatus::Streaming.is_busy());
        assert!(!ChatStatus::Idle.is_busy());
        assert!(!ChatStatus::Error.is_busy());
    }
}
