//! Navigation Component
//!
//! Header with the dashboard title and the four tab buttons.

use leptos::*;
use quickcommerce::dashboard::content;
use quickcommerce::dashboard::{Tab, TabAction};

use crate::components::tone::badge_class;
use crate::state::DashboardState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class=format!("{} shadow-lg", badge_class(quickcommerce::dashboard::Tone::Primary))>
            <div class="container mx-auto px-4 py-6">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                    // Title block
                    <div>
                        <h1 class="text-3xl font-bold">{content::TITLE}</h1>
                        <p class="text-teal-100">{content::SUBTITLE}</p>
                    </div>

                    // Tab buttons
                    <nav class="flex flex-wrap gap-2">
                        {Tab::ALL
                            .into_iter()
                            .map(|tab| view! { <TabButton tab=tab /> })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Individual tab button
#[component]
fn TabButton(tab: Tab) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <button
            on:click=move |_| state.select(tab)
            class=move || {
                let base = "px-4 py-2 rounded-lg font-medium transition-colors";
                if state.is_active(tab) {
                    format!("{} bg-white text-indigo-700 shadow", base)
                } else {
                    format!("{} text-white hover:bg-teal-500 hover:bg-opacity-30", base)
                }
            }
        >
            {tab.label()}
        </button>
    }
}

/// Buttons that jump to another tab
#[component]
pub fn ActionButtons(actions: Vec<TabAction>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="flex flex-wrap justify-center gap-4 mt-8">
            {actions
                .into_iter()
                .enumerate()
                .map(|(idx, action)| {
                    let class = if idx == 0 {
                        "px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
                    } else {
                        "px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white rounded-lg font-medium transition-colors"
                    };
                    view! {
                        <button class=class on:click=move |_| state.select(action.target)>
                            {action.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
