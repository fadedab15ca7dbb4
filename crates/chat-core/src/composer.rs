//! Message Composer
//!
//! Draft input owned by the chat page and the rules for turning it into a
//! user turn.

use crate::hook::{ChatHook, UserInput};

/// Draft text plus submit/suggestion/cancel actions
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    draft: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft text
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft (on every keystroke)
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the draft holds anything besides whitespace
    ///
    /// Drives both the submit guard and the disabled state of the send button.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Send the draft as typed and clear it
    ///
    /// Returns `false` without touching the draft when it is blank.
    pub fn submit<H>(&mut self, hook: &H) -> bool
    where
        H: ChatHook + ?Sized,
    {
        if !self.can_submit() {
            tracing::debug!("ignoring blank submit");
            return false;
        }
        let text = std::mem::take(&mut self.draft);
        hook.send_message(UserInput::new(text));
        true
    }

    /// Send a suggestion's literal text, discarding whatever was drafted
    pub fn choose_suggestion<H>(&mut self, hook: &H, suggestion: &str)
    where
        H: ChatHook + ?Sized,
    {
        hook.send_message(UserInput::new(suggestion));
        self.draft.clear();
    }

    /// Cancel the in-flight response
    pub fn cancel<H>(&self, hook: &H)
    where
        H: ChatHook + ?Sized,
    {
        hook.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::ChatError;
    use crate::message::{Message, Role};
    use crate::status::ChatStatus;
    use crate::store::ChatStore;

    /// In-memory hook recording every call
    #[derive(Default)]
    struct RecordingHook {
        store: Mutex<ChatStore>,
        sent: Mutex<Vec<UserInput>>,
        stops: Mutex<usize>,
    }

    impl RecordingHook {
        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().iter().map(|i| i.text.clone()).collect()
        }

        fn stops(&self) -> usize {
            *self.stops.lock().unwrap()
        }
    }

    impl ChatHook for RecordingHook {
        fn messages(&self) -> Vec<Message> {
            self.store.lock().unwrap().messages().to_vec()
        }

        fn status(&self) -> ChatStatus {
            self.store.lock().unwrap().status()
        }

        fn error(&self) -> Option<ChatError> {
            self.store.lock().unwrap().error().cloned()
        }

        fn send_message(&self, input: UserInput) {
            self.sent.lock().unwrap().push(input.clone());
            self.store.lock().unwrap().begin_turn(input);
        }

        fn stop(&self) {
            *self.stops.lock().unwrap() += 1;
            self.store.lock().unwrap().stop();
        }
    }

    #[test]
    fn test_submit_sends_exact_text_and_clears() {
        let hook = RecordingHook::default();
        let mut composer = Composer::new();

        for text in ["Hello", "  padded  ", "multi\nline", "ünïcödé"] {
            composer.set_draft(text);
            assert!(composer.can_submit());
            assert!(composer.submit(&hook));
            assert_eq!(composer.draft(), "");
        }

        assert_eq!(hook.sent(), ["Hello", "  padded  ", "multi\nline", "ünïcödé"]);
        let users: Vec<_> = hook
            .messages()
            .iter()
            .filter(|m| m.role == Role::User)
            .map(Message::text)
            .collect();
        assert_eq!(users, hook.sent());
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let hook = RecordingHook::default();
        let mut composer = Composer::new();

        for text in ["", "   ", "\t\n ", "\u{3000}"] {
            composer.set_draft(text);
            assert!(!composer.can_submit());
            assert!(!composer.submit(&hook));
            assert_eq!(composer.draft(), text);
        }

        assert!(hook.sent().is_empty());
        assert!(hook.messages().is_empty());
    }

    #[test]
    fn test_suggestion_ignores_draft() {
        let hook = RecordingHook::default();
        let mut composer = Composer::new();
        composer.set_draft("half typed question");

        composer.choose_suggestion(&hook, "Explain quantum computing");

        assert_eq!(hook.sent(), ["Explain quantum computing"]);
        assert_eq!(composer.draft(), "");
        let messages = hook.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].text(), "Explain quantum computing");
    }

    #[test]
    fn test_suggestion_bypasses_trim_guard() {
        let hook = RecordingHook::default();
        let mut composer = Composer::new();
        composer.choose_suggestion(&hook, " ");
        assert_eq!(hook.sent(), [" "]);
    }

    #[test]
    fn test_cancel_calls_stop_once_per_click() {
        let hook = RecordingHook::default();
        let mut composer = Composer::new();
        composer.set_draft("Tell me a story");
        composer.submit(&hook);
        assert!(hook.status().is_busy());

        composer.cancel(&hook);
        assert_eq!(hook.stops(), 1);
        assert_eq!(hook.status(), ChatStatus::Idle);

        composer.cancel(&hook);
        assert_eq!(hook.stops(), 2);
    }

    #[test]
    fn test_whitespace_scenario() {
        let hook = RecordingHook::default();
        let mut composer = Composer::new();

        composer.set_draft("   ");
        assert!(!composer.can_submit());
        composer.submit(&hook);
        assert!(hook.messages().is_empty());

        composer.choose_suggestion(&hook, "Explain quantum computing");
        assert_eq!(hook.messages().len(), 1);
        assert_eq!(hook.messages()[0].text(), "Explain quantum computing");
        assert_eq!(composer.draft(), "");
    }

    #[test]
    fn test_works_through_trait_object() {
        let hook: std::sync::Arc<dyn ChatHook> = std::sync::Arc::new(RecordingHook::default());
        let mut composer = Composer::new();
        composer.set_draft("hi");
        assert!(composer.submit(hook.as_ref()));
        assert_eq!(hook.messages().len(), 1);
    }
}
