//! Build-time configuration.
//!
//! The browser has no process environment, so `CHAT_*` variables are baked in
//! when the bundle is compiled (e.g. `CHAT_API_URL=/v1/chat trunk build`).

use chat_core::{ChatConfig, Result};

/// Look up a `CHAT_*` variable captured at compile time.
pub fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "CHAT_API_URL" => option_env!("CHAT_API_URL"),
        "CHAT_SUGGESTIONS" => option_env!("CHAT_SUGGESTIONS"),
        "CHAT_SUGGESTIONS_WRAP" => option_env!("CHAT_SUGGESTIONS_WRAP"),
        "CHAT_LOG_LEVEL" => option_env!("CHAT_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Load the configuration baked into this build.
pub fn load() -> Result<ChatConfig> {
    ChatConfig::from_lookup(build_env)
}
