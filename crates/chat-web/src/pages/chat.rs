//! Chat Page

use chat_core::{ChatHook, Composer, Message as ChatMessage, MessageId, Part, Role};
use leptos::callback::Callback;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::{
    ArrowUpIcon, Button, ButtonSize, ButtonVariant, Container, Conversation, ConversationContent,
    ConversationEmptyState, ErrorBanner, Message, MessageContent, MessageResponse,
    MessageSquareIcon, SendIcon, SquareIcon, Suggestion, Suggestions,
};
use crate::hook::ChatHandle;

const ICON_BUTTON: &str = "shadow-border-small hover:shadow-border-medium bg-background/80 \
                           backdrop-blur-sm border-0 hover:bg-background hover:scale-[1.02] \
                           transition-all duration-150 ease";

/// DOM id of a rendered turn
fn dom_id(id: &MessageId) -> String {
    format!("message-{id}")
}

fn scroll_into_view(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Render one part of a turn; non-text parts render nothing
fn render_part(role: Role, part: Part) -> Option<AnyView> {
    match part {
        Part::Text { text } => Some(match role {
            Role::Assistant => {
                view! { <MessageResponse text=text class="markdown-content" /> }.into_any()
            }
            Role::User => view! { <div class="whitespace-pre-wrap">{text}</div> }.into_any(),
        }),
        Part::Unsupported => None,
    }
}

fn render_turn(message: ChatMessage) -> impl IntoView {
    let role = message.role;
    let id = dom_id(&message.id);
    let parts: Vec<AnyView> = message
        .parts
        .into_iter()
        .filter_map(|part| render_part(role, part))
        .collect();

    view! {
        <Message from=role id=id>
            <MessageContent>{parts}</MessageContent>
        </Message>
    }
}

/// Chat composition root
///
/// Owns the draft input; everything else is read from `hook`.
#[component]
pub fn ChatPage(
    /// Injected chat hook.
    hook: ChatHandle,
    /// Prompts offered while the conversation is empty.
    suggestions: Vec<String>,
    /// Wrap suggestion chips instead of a scrolling row.
    #[prop(default = false)]
    wrap_suggestions: bool,
) -> impl IntoView {
    let composer = RwSignal::new(Composer::new());
    let suggestions = StoredValue::new(suggestions);
    let bottom = NodeRef::<Div>::new();

    let messages = Memo::new(move |_| hook.messages());
    let has_messages = move || messages.with(|m| !m.is_empty());
    let busy = move || hook.status().is_busy();

    // Keep the newest turn in view, including while it streams.
    Effect::new(move |_| {
        let (count, tail) = messages.with(|m| (m.len(), m.last().map(ChatMessage::text_len)));
        if let Some(anchor) = bottom.get() {
            scroll_into_view(&anchor, ScrollLogicalPosition::End);
            tracing::trace!(count, ?tail, "scrolled to latest turn");
        }
    });

    let submit = move || {
        composer.update(|c| {
            c.submit(&hook);
        });
    };

    let pick_suggestion = move |text: String| {
        composer.update(|c| c.choose_suggestion(&hook, &text));
    };

    let scroll_to_latest = move |_: MouseEvent| {
        let target = messages.with_untracked(|m| m.last().map(|m| dom_id(&m.id)));
        if let Some(element) = target.and_then(|id| document().get_element_by_id(&id)) {
            scroll_into_view(&element, ScrollLogicalPosition::Start);
        }
    };

    let send_button = move || {
        view! {
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Icon
                button_type="submit"
                label="Send message"
                disabled=Signal::derive(move || !composer.with(Composer::can_submit))
                class=ICON_BUTTON
            >
                <SendIcon />
            </Button>
        }
    };

    view! {
        <Container class="relative">
            <Conversation class="relative flex flex-col py-24 mx-auto stretch">
                <ConversationContent>
                    <Show
                        when=has_messages
                        fallback=|| view! {
                            <ConversationEmptyState
                                title="Start a conversation"
                                description="Messages will appear here as the conversation progresses."
                                icon=|| view! { <MessageSquareIcon class="size-6" /> }
                            />
                        }
                    >
                        <For
                            each=move || messages.get()
                            key=|message| (message.id.clone(), message.parts.len(), message.text_len())
                            children=render_turn
                        />
                        {move || hook.error().map(|error| view! {
                            <Message from=Role::Assistant>
                                <MessageContent>
                                    <ErrorBanner error=error />
                                </MessageContent>
                            </Message>
                        })}
                        <div node_ref=bottom />
                    </Show>
                </ConversationContent>

                <Show when=move || !has_messages()>
                    <Suggestions wrap=wrap_suggestions>
                        {suggestions
                            .get_value()
                            .into_iter()
                            .map(|suggestion| view! {
                                <Suggestion suggestion=suggestion on_click=Callback::new(pick_suggestion) />
                            })
                            .collect_view()}
                    </Suggestions>
                </Show>

                <Show when=has_messages>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Icon
                        label="Scroll to latest message"
                        on_click=Callback::new(scroll_to_latest)
                        class="fixed z-10 left-1/2 -translate-x-1/2 bottom-20 shadow-border-small \
                               hover:shadow-border-medium bg-background/80 backdrop-blur-sm border-0 \
                               hover:bg-background hover:scale-[1.02] transition-all duration-150 ease"
                    >
                        <ArrowUpIcon />
                    </Button>
                </Show>

                <Container class="fixed left-1/2 -translate-x-1/2 bottom-4">
                    <form
                        class="w-full border-border border rounded-lg flex items-center justify-center \
                               gap-2 px-3 py-2 mt-4 h-[49px] bg-background"
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            submit();
                        }
                    >
                        <input
                            class="w-full bg-transparent outline-none placeholder:text-muted-foreground text-foreground"
                            placeholder="Say something..."
                            prop:value=move || composer.with(|c| c.draft().to_string())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                composer.update(|c| c.set_draft(text));
                            }
                        />
                        <Show when=busy fallback=send_button>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Icon
                                label="Stop generating"
                                on_click=Callback::new(move |_: MouseEvent| {
                                    composer.with_untracked(|c| c.cancel(&hook));
                                })
                                class="shadow-border-small hover:shadow-border-medium bg-background/80 \
                                       backdrop-blur-sm border-0 hover:bg-background \
                                       hover:scale-[1.02] transition-all duration-150 ease animate-pulse"
                            >
                                <SquareIcon />
                            </Button>
                        </Show>
                    </form>
                </Container>
            </Conversation>
        </Container>
    }
}
