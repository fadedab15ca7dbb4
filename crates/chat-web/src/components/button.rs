//! Button component with variants and sizes.

use leptos::callback::{Callable, Callback};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled primary action.
    #[default]
    Primary,
    /// Bordered, transparent background.
    Outline,
}

impl ButtonVariant {
    /// CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Outline => "border border-border bg-background hover:bg-accent hover:text-accent-foreground",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button, used by suggestion chips.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    /// CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Md => "h-10 px-4 text-sm",
            Self::Icon => "h-9 w-9",
        }
    }
}

/// Shared button.
///
/// `disabled` is reactive so the composer can mirror its submit guard.
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Whether the button is disabled.
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Accessible label for icon-only buttons.
    #[prop(optional)]
    label: Option<&'static str>,
    /// Click handler.
    #[prop(optional, into)]
    on_click: Option<Callback<MouseEvent>>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 rounded-md font-medium \
                        cursor-pointer transition-all focus-visible:outline-none \
                        focus-visible:ring-2 focus-visible:ring-ring \
                        disabled:pointer-events-none disabled:opacity-50 disabled:cursor-not-allowed";

    let classes = format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    );

    view! {
        <button
            type=button_type
            class=classes
            aria-label=label
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
