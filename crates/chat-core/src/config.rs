//! Chat Configuration

use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result};

/// Prompts offered before the first turn
pub const DEFAULT_SUGGESTIONS: [&str; 8] = [
    "What are the latest trends in AI?",
    "How does machine learning work?",
    "Explain quantum computing",
    "Best practices for React development",
    "Tell me about TypeScript benefits",
    "How to optimize database queries?",
    "What is the difference between SQL and NoSQL?",
    "Explain cloud computing basics",
];

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Chat surface configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Endpoint receiving chat requests
    pub api_url: String,

    /// Suggestion chips, in display order
    pub suggestions: Vec<String>,

    /// Wrap the chips instead of a single scrolling row
    pub wrap_suggestions: bool,

    /// Minimum log level
    pub log_level: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_url: "/api/chat".into(),
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| (*s).to_string()).collect(),
            wrap_suggestions: false,
            log_level: "info".into(),
        }
    }
}

impl ChatConfig {
    /// Build from `CHAT_*` variables supplied by `lookup`
    ///
    /// Unset variables keep their defaults.
    ///
    /// - `CHAT_API_URL`
    /// - `CHAT_SUGGESTIONS` (`|`-separated)
    /// - `CHAT_SUGGESTIONS_WRAP` (`true`/`false`)
    /// - `CHAT_LOG_LEVEL`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("CHAT_API_URL") {
            let url = url.trim();
            if url.is_empty() {
                return Err(ChatError::Config("CHAT_API_URL is empty".into()));
            }
            config.api_url = url.to_string();
        }

        if let Some(raw) = lookup("CHAT_SUGGESTIONS") {
            let suggestions: Vec<String> = raw
                .split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if suggestions.is_empty() {
                return Err(ChatError::Config("CHAT_SUGGESTIONS has no entries".into()));
            }
            config.suggestions = suggestions;
        }

        if let Some(raw) = lookup("CHAT_SUGGESTIONS_WRAP") {
            config.wrap_suggestions = raw.trim().parse().map_err(|_| {
                ChatError::Config(format!("CHAT_SUGGESTIONS_WRAP must be true or false, got {raw:?}"))
            })?;
        }

        if let Some(raw) = lookup("CHAT_LOG_LEVEL") {
            let level = raw.trim().to_ascii_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ChatError::Config(format!("unknown CHAT_LOG_LEVEL {raw:?}")));
            }
            config.log_level = level;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ChatConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ChatConfig::default());
        assert_eq!(config.api_url, "/api/chat");
        assert_eq!(config.suggestions.len(), 8);
        assert_eq!(config.suggestions[2], "Explain quantum computing");
        assert!(!config.wrap_suggestions);
    }

    #[test]
    fn test_overrides() {
        let config = ChatConfig::from_lookup(lookup(&[
            ("CHAT_API_URL", " https://example.com/chat "),
            ("CHAT_SUGGESTIONS", "First | Second||"),
            ("CHAT_SUGGESTIONS_WRAP", "true"),
            ("CHAT_LOG_LEVEL", "DEBUG"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://example.com/chat");
        assert_eq!(config.suggestions, ["First", "Second"]);
        assert!(config.wrap_suggestions);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_values() {
        for vars in [
            [("CHAT_API_URL", "  ")],
            [("CHAT_SUGGESTIONS", " | ")],
            [("CHAT_SUGGESTIONS_WRAP", "yes")],
            [("CHAT_LOG_LEVEL", "verbose")],
        ] {
            let err = ChatConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert!(matches!(err, ChatError::Config(_)), "{vars:?}");
        }
    }
}
