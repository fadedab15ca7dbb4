//! Conversation Messages
//!
//! The turn format shared by the chat hook, the wire body and the UI.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique message identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a whole conversation, sent with every request
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(String);

impl ChatId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ChatId {
    fn default() -> Self {
        Self::new()
    }
}

/// Role of a message sender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User input
    User,
    /// Assistant (LLM) response
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A typed fragment of a turn's content
///
/// Only text is rendered. Every other tag the backend may emit (reasoning,
/// tool calls, files, ...) lands in [`Part::Unsupported`] instead of failing
/// the whole message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Part {
    /// Plain or markdown text
    Text { text: String },

    /// Any part type this interface does not render
    #[serde(other)]
    Unsupported,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    /// Text payload, if this is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::Unsupported => None,
        }
    }
}

/// A single turn in a conversation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Stable identity, unique within a conversation
    pub id: MessageId,

    /// Message role
    pub role: Role,

    /// Ordered content fragments
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Message {
    /// Create a new message with a fresh id
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            parts,
        }
    }

    /// Create a user message holding a single text part
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Part::text(text)])
    }

    /// Iterate over the text parts only
    pub fn text_parts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(Part::as_text)
    }

    /// All text parts joined together
    pub fn text(&self) -> String {
        self.text_parts().collect()
    }

    /// Total bytes of text held by this message
    ///
    /// Changes whenever a streamed delta lands, so it doubles as a cheap
    /// render fingerprint for the in-flight turn.
    pub fn text_len(&self) -> usize {
        self.text_parts().map(str::len).sum()
    }

    /// Append streamed text to the trailing text part, opening one if needed
    pub fn push_text(&mut self, delta: &str) {
        if let Some(Part::Text { text }) = self.parts.last_mut() {
            text.push_str(delta);
        } else {
            self.parts.push(Part::text(delta));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text(), "Hello");
        assert_ne!(msg.id, Message::user("Hello").id);
    }

    #[test]
    fn test_wire_format() {
        let msg = Message {
            id: MessageId::from_string("m1"),
            role: Role::Assistant,
            parts: vec![Part::text("Hi")],
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "m1",
                "role": "assistant",
                "parts": [{ "type": "text", "text": "Hi" }],
            })
        );
    }

    #[test]
    fn test_unknown_parts_are_kept_but_ignored() {
        let msg: Message = serde_json::from_str(
            r#"{
                "id": "m2",
                "role": "assistant",
                "parts": [
                    { "type": "step-start" },
                    { "type": "reasoning", "text": "thinking" },
                    { "type": "text", "text": "Answer" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(msg.parts.len(), 3);
        assert_eq!(msg.parts[0], Part::Unsupported);
        assert_eq!(msg.parts[1], Part::Unsupported);
        assert_eq!(msg.text(), "Answer");
    }

    #[test]
    fn test_push_text() {
        let mut msg = Message::new(Role::Assistant, Vec::new());
        msg.push_text("Hel");
        msg.push_text("lo");
        assert_eq!(msg.parts.len(), 1);
        assert_eq!(msg.text(), "Hello");
        assert_eq!(msg.text_len(), 5);

        msg.parts.push(Part::Unsupported);
        msg.push_text("!");
        assert_eq!(msg.parts.len(), 3);
        assert_eq!(msg.text(), "Hello!");
    }
}
