//! Main App Component

use std::sync::Arc;

use chat_core::ChatConfig;
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::hook::ChatHandle;
use crate::pages::ChatPage;
use crate::transport::HttpChatHook;

/// Root application component
///
/// Builds the HTTP chat hook from `config` and hands it to the chat page.
#[component]
pub fn App(config: ChatConfig) -> impl IntoView {
    let hook = ChatHandle::new(Arc::new(HttpChatHook::new(config.api_url)));
    let suggestions = config.suggestions;
    let wrap = config.wrap_suggestions;

    view! {
        <Router>
            <main class="app min-h-screen bg-background text-foreground">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route
                        path=path!("/")
                        view=move || view! {
                            <ChatPage hook=hook suggestions=suggestions.clone() wrap_suggestions=wrap />
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
