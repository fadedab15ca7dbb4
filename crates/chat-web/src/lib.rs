//! chat-web
//!
//! Leptos-based WASM chat interface: conversation view, streaming assistant
//! turns, suggestion chips and a message composer, driven by an injected
//! [`ChatHook`](chat_core::ChatHook).

mod app;
pub mod components;
pub mod config;
mod hook;
pub mod markdown;
mod pages;
pub mod transport;

pub use app::App;
pub use hook::ChatHandle;
pub use pages::ChatPage;
pub use transport::HttpChatHook;
