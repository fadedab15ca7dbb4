//! Wire body posted to the chat endpoint

use serde::{Deserialize, Serialize};

use crate::message::{ChatId, Message};

/// Why a request was issued
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trigger {
    #[default]
    SubmitMessage,
}

/// Chat request body: the conversation id plus the full history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub id: ChatId,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub trigger: Trigger,
}
