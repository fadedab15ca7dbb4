//! Copyable handle to the injected chat hook.

use std::sync::Arc;

use chat_core::{ChatError, ChatHook, ChatStatus, Message, UserInput};
use leptos::prelude::*;

/// Arena-backed handle to an `Arc<dyn ChatHook>`.
///
/// `Copy`, so event handlers and effects can capture it freely. Reads go
/// straight to the underlying hook and stay reactive when the hook is.
#[derive(Clone, Copy)]
pub struct ChatHandle(StoredValue<Arc<dyn ChatHook>>);

impl ChatHandle {
    pub fn new(hook: Arc<dyn ChatHook>) -> Self {
        Self(StoredValue::new(hook))
    }
}

impl ChatHook for ChatHandle {
    fn messages(&self) -> Vec<Message> {
        self.0.with_value(|hook| hook.messages())
    }

    fn status(&self) -> ChatStatus {
        self.0.with_value(|hook| hook.status())
    }

    fn error(&self) -> Option<ChatError> {
        self.0.with_value(|hook| hook.error())
    }

    fn send_message(&self, input: UserInput) {
        self.0.with_value(|hook| hook.send_message(input));
    }

    fn stop(&self) {
        self.0.with_value(|hook| hook.stop());
    }
}
