//! Chat UI building blocks.
//!
//! Presentational components only: they hold no chat state and talk to the
//! outside world through callbacks.
//!
//! - [`Button`]: shared button with variants and sizes
//! - [`Container`]: centered max-width column
//! - [`ScrollArea`]: scrollable container
//! - [`Suggestions`], [`Suggestion`]: prompt chips
//! - [`Conversation`], [`ConversationContent`], [`ConversationEmptyState`]: scroll shell
//! - [`Message`], [`MessageContent`], [`MessageResponse`]: a single turn
//! - [`ErrorBanner`]: inline error card
//! - [`icons`]: SVG icons

mod button;
mod container;
mod conversation;
mod error_banner;
pub mod icons;
mod message;
mod scroll_area;
mod suggestion;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use container::Container;
pub use conversation::{Conversation, ConversationContent, ConversationEmptyState};
pub use error_banner::ErrorBanner;
pub use icons::*;
pub use message::{Message, MessageContent, MessageResponse};
pub use scroll_area::ScrollArea;
pub use suggestion::{Suggestion, Suggestions};
