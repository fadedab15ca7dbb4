//! # chat-core
//!
//! Conversation model, chat hook contract and composer rules for the chat
//! surface, free of any UI framework.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       ChatPage (UI)                          │
//! │  ┌────────────┐   reads     ┌─────────────────────────────┐  │
//! │  │  Composer  │────────────▶│ ChatHook                    │  │
//! │  │  (draft)   │ send / stop │ messages · status · error   │  │
//! │  └────────────┘────────────▶│  └── ChatStore (turns)      │  │
//! │                             └─────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `ChatHook` trait is the seam to the transport: the UI never talks to
//! the network, it only observes hook state and calls `send_message`/`stop`.

pub mod composer;
pub mod config;
pub mod decoder;
pub mod error;
pub mod hook;
pub mod message;
pub mod notice;
pub mod request;
pub mod status;
pub mod store;

pub use composer::Composer;
pub use config::ChatConfig;
pub use decoder::TextStreamDecoder;
pub use error::{ChatError, Result};
pub use hook::{ChatHook, UserInput};
pub use message::{ChatId, Message, MessageId, Part, Role};
pub use notice::ErrorNotice;
pub use request::ChatRequest;
pub use status::ChatStatus;
pub use store::{ChatStore, Turn};
