//! Chat State
//!
//! The state a chat hook exposes, together with the transitions its
//! transport drives. History is append-only; only the in-flight assistant
//! turn is ever modified.

use crate::error::ChatError;
use crate::hook::UserInput;
use crate::message::{ChatId, Message, MessageId, Role};
use crate::request::{ChatRequest, Trigger};
use crate::status::ChatStatus;

/// Ticket identifying one request
///
/// Every transition coming back from the transport carries the ticket it was
/// issued with; once a newer turn starts or the request is stopped, updates
/// holding an old ticket are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn(u64);

/// Conversation state owned by a chat hook
#[derive(Clone, Debug, Default)]
pub struct ChatStore {
    id: ChatId,
    messages: Vec<Message>,
    status: ChatStatus,
    error: Option<ChatError>,
    streaming: Option<MessageId>,
    turn: u64,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &ChatId {
        &self.id
    }

    /// History in arrival order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn status(&self) -> ChatStatus {
        self.status
    }

    pub fn error(&self) -> Option<&ChatError> {
        self.error.as_ref()
    }

    /// Append a user turn and open a new request
    ///
    /// Any request still in flight is superseded. Returns the ticket for the
    /// new request and the body to send.
    pub fn begin_turn(&mut self, input: UserInput) -> (Turn, ChatRequest) {
        self.turn += 1;
        self.streaming = None;
        self.error = None;
        self.status = ChatStatus::Submitted;
        self.messages.push(Message::user(input.text));

        tracing::debug!(
            chat = %self.id.as_str(),
            turn = self.turn,
            messages = self.messages.len(),
            "turn submitted"
        );

        let request = ChatRequest {
            id: self.id.clone(),
            messages: self.messages.clone(),
            trigger: Trigger::SubmitMessage,
        };
        (Turn(self.turn), request)
    }

    fn is_current(&self, turn: Turn) -> bool {
        turn.0 == self.turn && self.status.is_busy()
    }

    /// Append streamed assistant text
    ///
    /// The first delta of a turn opens the assistant message. Returns `false`
    /// if the update belongs to a stale request.
    pub fn apply_delta(&mut self, turn: Turn, delta: &str) -> bool {
        if !self.is_current(turn) {
            return false;
        }
        if delta.is_empty() {
            return true;
        }

        let open = self
            .streaming
            .as_ref()
            .and_then(|id| self.messages.iter().rposition(|m| &m.id == id));
        let index = match open {
            Some(index) => index,
            None => {
                let message = Message::new(Role::Assistant, Vec::new());
                self.streaming = Some(message.id.clone());
                self.messages.push(message);
                self.messages.len() - 1
            }
        };
        self.messages[index].push_text(delta);

        self.status = ChatStatus::Streaming;
        true
    }

    /// Close a request that completed normally
    pub fn finish(&mut self, turn: Turn) -> bool {
        if !self.is_current(turn) {
            return false;
        }
        self.status = ChatStatus::Idle;
        self.streaming = None;
        tracing::debug!(chat = %self.id.as_str(), turn = turn.0, "turn finished");
        true
    }

    /// Close a request that failed
    ///
    /// Text already streamed stays in the history.
    pub fn fail(&mut self, turn: Turn, error: ChatError) -> bool {
        if !self.is_current(turn) {
            return false;
        }
        tracing::warn!(chat = %self.id.as_str(), turn = turn.0, %error, "turn failed");
        self.status = ChatStatus::Error;
        self.streaming = None;
        self.error = Some(error);
        true
    }

    /// Cancel the request in flight
    ///
    /// Returns `false` when nothing was running.
    pub fn stop(&mut self) -> bool {
        if !self.status.is_busy() {
            return false;
        }
        self.turn += 1;
        self.status = ChatStatus::Idle;
        self.streaming = None;
        tracing::debug!(chat = %self.id.as_str(), "turn stopped");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_turn() {
        let mut store = ChatStore::new();
        assert!(store.messages().is_empty());

        let (_, request) = store.begin_turn(UserInput::new("Hi"));
        assert_eq!(store.status(), ChatStatus::Submitted);
        assert_eq!(store.messages().len(), 1);
        assert_eq!(store.messages()[0].role, Role::User);
        assert_eq!(request.id, *store.id());
        assert_eq!(request.messages, store.messages());
    }

    #[test]
    fn test_streaming_builds_one_assistant_turn() {
        let mut store = ChatStore::new();
        let (turn, _) = store.begin_turn(UserInput::new("Hi"));

        assert!(store.apply_delta(turn, "Hel"));
        assert_eq!(store.status(), ChatStatus::Streaming);
        let id = store.messages()[1].id.clone();

        assert!(store.apply_delta(turn, "lo"));
        assert!(store.finish(turn));

        assert_eq!(store.status(), ChatStatus::Idle);
        assert_eq!(store.messages().len(), 2);
        assert_eq!(store.messages()[1].id, id);
        assert_eq!(store.messages()[1].role, Role::Assistant);
        assert_eq!(store.messages()[1].text(), "Hello");
    }

    #[test]
    fn test_history_is_append_only() {
        let mut store = ChatStore::new();
        let (first, _) = store.begin_turn(UserInput::new("one"));
        store.apply_delta(first, "reply one");
        store.finish(first);
        let snapshot = store.messages().to_vec();

        let (second, _) = store.begin_turn(UserInput::new("two"));
        store.apply_delta(second, "reply two");
        store.finish(second);

        assert_eq!(&store.messages()[..2], snapshot.as_slice());
        let texts: Vec<_> = store.messages().iter().map(Message::text).collect();
        assert_eq!(texts, ["one", "reply one", "two", "reply two"]);
    }

    #[test]
    fn test_stop_drops_late_chunks() {
        let mut store = ChatStore::new();
        let (turn, _) = store.begin_turn(UserInput::new("Hi"));
        store.apply_delta(turn, "partial");

        assert!(store.stop());
        assert_eq!(store.status(), ChatStatus::Idle);
        assert!(!store.apply_delta(turn, " more"));
        assert!(!store.finish(turn));
        assert_eq!(store.messages()[1].text(), "partial");

        assert!(!store.stop());
    }

    #[test]
    fn test_new_turn_supersedes_old_request() {
        let mut store = ChatStore::new();
        let (old, _) = store.begin_turn(UserInput::new("first"));
        let (new, _) = store.begin_turn(UserInput::new("second"));

        assert!(!store.apply_delta(old, "stale"));
        assert!(store.apply_delta(new, "fresh"));
        assert_eq!(store.messages().len(), 3);
        assert_eq!(store.messages()[2].text(), "fresh");
    }

    #[test]
    fn test_failure_and_recovery() {
        let mut store = ChatStore::new();
        let (turn, _) = store.begin_turn(UserInput::new("Hi"));
        let err = ChatError::Transport("connection reset".into());

        assert!(store.fail(turn, err.clone()));
        assert_eq!(store.status(), ChatStatus::Error);
        assert_eq!(store.error(), Some(&err));

        store.begin_turn(UserInput::new("again"));
        assert_eq!(store.error(), None);
        assert_eq!(store.status(), ChatStatus::Submitted);
    }

    #[test]
    fn test_empty_delta_does_not_open_turn() {
        let mut store = ChatStore::new();
        let (turn, _) = store.begin_turn(UserInput::new("Hi"));
        assert!(store.apply_delta(turn, ""));
        assert_eq!(store.messages().len(), 1);
        assert_eq!(store.status(), ChatStatus::Submitted);
    }
}
