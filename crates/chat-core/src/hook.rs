//! Chat Hook
//!
//! The collaborator that owns the request lifecycle. The UI only reads its
//! reactive state and calls `send_message`/`stop`; transport, streaming and
//! cancellation live behind this trait.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::message::Message;
use crate::status::ChatStatus;

/// A user turn waiting to be sent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub text: String,
}

impl UserInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Reactive chat state plus the two operations the UI may invoke
///
/// Implementations backed by a reactive runtime should make the getters
/// tracked reads, so that views and effects re-run when they change.
pub trait ChatHook: Send + Sync {
    /// Conversation history in arrival order
    fn messages(&self) -> Vec<Message>;

    /// Current request status
    fn status(&self) -> ChatStatus;

    /// Error reported by the last request, if any
    fn error(&self) -> Option<ChatError>;

    /// Append a user turn and request an assistant reply
    ///
    /// Fire-and-forget: completion is observed through `status`/`messages`.
    fn send_message(&self, input: UserInput);

    /// Cancel the in-flight request, if any
    fn stop(&self);
}
