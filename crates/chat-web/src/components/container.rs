//! Page-width layout wrapper.

use leptos::prelude::*;

/// Centers its content in a column at most 700px wide.
#[component]
pub fn Container(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("container max-w-[700px] w-full mx-auto px-4 md:px-0 {class}")>
            {children()}
        </div>
    }
}
