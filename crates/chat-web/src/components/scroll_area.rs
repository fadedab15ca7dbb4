//! Scrollable area component.

use leptos::prelude::*;

/// Scrollable container.
///
/// `hide_scrollbar` keeps the area scrollable while hiding the bar itself,
/// as used by the single-row suggestion strip.
#[component]
pub fn ScrollArea(
    /// Hide the scrollbar affordance.
    #[prop(default = false)]
    hide_scrollbar: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Scrollable content.
    children: Children,
) -> impl IntoView {
    let scrollbar = if hide_scrollbar {
        "[scrollbar-width:none] [&::-webkit-scrollbar]:hidden"
    } else {
        "scrollbar-thin"
    };
    let classes = format!("relative overflow-auto {scrollbar} {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
