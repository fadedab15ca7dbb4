//! Suggestion chips.

use leptos::callback::{Callable, Callback};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::{Button, ButtonSize, ButtonVariant, ScrollArea};

/// Row of suggestion chips.
///
/// By default the chips stay on one line and scroll horizontally with the
/// scrollbar hidden; `wrap` lets them flow onto several lines instead.
#[component]
pub fn Suggestions(
    /// Wrap chips instead of scrolling.
    #[prop(default = false)]
    wrap: bool,
    /// Additional CSS classes for the chip row.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if wrap {
        view! {
            <div class=format!("flex flex-wrap items-center gap-2 w-full {class}")>
                {children()}
            </div>
        }
        .into_any()
    } else {
        view! {
            <ScrollArea hide_scrollbar=true class="w-full overflow-x-auto whitespace-nowrap">
                <div class=format!("flex w-max flex-nowrap items-center gap-2 {class}")>
                    {children()}
                </div>
            </ScrollArea>
        }
        .into_any()
    }
}

/// A single clickable prompt; reports its literal text when clicked.
#[component]
pub fn Suggestion(
    /// Prompt text, shown and reported as-is.
    #[prop(into)]
    suggestion: String,
    /// Receives `suggestion` on click.
    #[prop(into)]
    on_click: Callback<String>,
) -> impl IntoView {
    let text = suggestion.clone();

    view! {
        <Button
            variant=ButtonVariant::Outline
            size=ButtonSize::Sm
            class="rounded-full px-4"
            on_click=Callback::new(move |_: MouseEvent| on_click.run(text.clone()))
        >
            {suggestion}
        </Button>
    }
}
