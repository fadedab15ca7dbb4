//! A single conversation turn.

use chat_core::Role;
use leptos::prelude::*;

use crate::markdown;

/// Turn wrapper; aligns and styles its content by role.
#[component]
pub fn Message(
    /// Who sent the turn.
    from: Role,
    /// DOM id, used to scroll a turn into view.
    #[prop(optional, into)]
    id: Option<String>,
    children: Children,
) -> impl IntoView {
    let role_classes = match from {
        Role::User => "is-user ml-auto justify-end",
        Role::Assistant => "is-assistant",
    };

    view! {
        <div
            id=id
            data-role=from.to_string()
            class=format!("group flex w-full max-w-[95%] flex-col gap-2 {role_classes}")
        >
            {children()}
        </div>
    }
}

/// Content column of a [`Message`]; user turns get a bubble.
#[component]
pub fn MessageContent(children: Children) -> impl IntoView {
    view! {
        <div class="flex w-fit max-w-full min-w-0 flex-col gap-2 overflow-hidden text-sm \
                    group-[.is-user]:ml-auto group-[.is-user]:rounded-lg \
                    group-[.is-user]:bg-secondary group-[.is-user]:px-4 group-[.is-user]:py-3 \
                    group-[.is-assistant]:text-foreground">
            {children()}
        </div>
    }
}

/// Assistant text rendered as markdown.
#[component]
pub fn MessageResponse(
    /// Markdown source.
    #[prop(into)]
    text: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let html = markdown::to_html(&text);

    view! {
        <div
            class=format!("size-full [&>*:first-child]:mt-0 [&>*:last-child]:mb-0 {class}")
            inner_html=html
        />
    }
}
