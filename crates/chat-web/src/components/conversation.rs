//! Conversation shell.

use leptos::prelude::*;

/// Scrollable log holding the turns.
#[component]
pub fn Conversation(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div role="log" aria-live="polite" class=format!("relative flex-1 overflow-y-auto {class}")>
            {children()}
        </div>
    }
}

/// Vertical stack of turns inside a [`Conversation`].
#[component]
pub fn ConversationContent(children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-8 p-4">
            {children()}
        </div>
    }
}

/// Placeholder shown while the conversation has no turns.
#[component]
pub fn ConversationEmptyState(
    /// Heading.
    #[prop(default = "No messages yet")]
    title: &'static str,
    /// Supporting line under the heading.
    #[prop(default = "Start a conversation to see messages here")]
    description: &'static str,
    /// Optional icon above the heading.
    #[prop(optional, into)]
    icon: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <div class="flex size-full flex-col items-center justify-center gap-3 p-8 text-center">
            {icon.map(|icon| view! { <div class="text-muted-foreground">{icon.run()}</div> })}
            <div class="space-y-1">
                <h3 class="font-medium text-sm">{title}</h3>
                <p class="text-muted-foreground text-sm">{description}</p>
            </div>
        </div>
    }
}
