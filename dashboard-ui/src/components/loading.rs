//! Loading Component

use leptos::*;
use quickcommerce::dashboard::router::LOADING_PLACEHOLDER;

/// Placeholder shown in a metric card until its group arrives
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2 text-gray-400 py-4 animate-pulse">
            <span class="inline-block w-3 h-3 rounded-full bg-gray-300" />
            <span>{LOADING_PLACEHOLDER}</span>
        </div>
    }
}
