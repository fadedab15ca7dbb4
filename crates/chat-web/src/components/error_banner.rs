//! Inline error card.

use chat_core::ChatError;
use leptos::prelude::*;

use super::{AlertCircleIcon, ClockIcon};

/// Renders a hook error according to its [`ErrorNotice`](chat_core::ErrorNotice).
#[component]
pub fn ErrorBanner(error: ChatError) -> impl IntoView {
    let notice = error.notice();
    let title = notice.title();
    let detail = notice.detail().to_string();

    if notice.is_rate_limit() {
        return view! {
            <div class="w-full flex flex-col gap-4 p-4 bg-linear-to-r from-orange-50 to-red-50 \
                        dark:from-orange-950/30 dark:to-red-950/30 border border-orange-200 \
                        dark:border-orange-800 rounded-lg">
                <div class="w-full flex items-center gap-3">
                    <div class="shrink-0">
                        <ClockIcon class="w-6 h-6 text-orange-500" />
                    </div>
                    <div>
                        <h3 class="font-semibold text-orange-800 dark:text-orange-200">{title}</h3>
                        <p class="text-sm text-orange-700 dark:text-orange-300 mt-1">{detail}</p>
                    </div>
                </div>
            </div>
        }
        .into_any();
    }

    let hint = notice.hint();

    view! {
        <div class="flex flex-col gap-3 p-4 bg-gradient-to-r from-red-50 to-pink-50 \
                    dark:from-red-950/30 dark:to-pink-950/30 border border-red-200 \
                    dark:border-red-800 rounded-lg">
            <div class="flex items-center gap-3">
                <div class="flex-shrink-0">
                    <AlertCircleIcon class="w-5 h-5 text-red-500" />
                </div>
                <div>
                    <h3 class="font-semibold text-red-800 dark:text-red-200">{title}</h3>
                    <p class="text-sm text-red-700 dark:text-red-300 mt-1">{detail}</p>
                </div>
            </div>
            {hint.map(|hint| view! {
                <div class="text-xs text-red-600 dark:text-red-400 bg-red-100 dark:bg-red-900/20 p-2 rounded">
                    {format!("💡 {hint}")}
                </div>
            })}
        </div>
    }
    .into_any()
}
