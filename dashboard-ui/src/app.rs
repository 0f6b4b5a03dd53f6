//! App Root Component
//!
//! Provides the dashboard state, starts the metric load and lays out the
//! header, tab content and footer.

use leptos::*;
use quickcommerce::dashboard::content;

use crate::api;
use crate::components::Nav;
use crate::pages::TabContent;
use crate::state::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_dashboard_state();

    // Load metric groups once on mount
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            state.load();
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <TabContent />
            </main>

            <Footer />
        </div>
    }
}

/// Footer with load status and the data source setting
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    // Session only: the field starts empty on every page load
    let (source_url, set_source_url) = create_signal(String::new());

    let on_reload = move |_| {
        state.source_url.set(api::provider_url(&source_url.get_untracked()));
        state.load();
    };

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 py-3 px-4">
            <div class="container mx-auto flex flex-wrap items-center justify-between gap-2 text-sm text-gray-500">
                <span>{content::DESCRIPTION}</span>

                // Last load time
                <span>
                    {move || {
                        if state.loading.get() {
                            "Loading...".to_string()
                        } else {
                            state.loaded_at.get()
                                .and_then(chrono::DateTime::from_timestamp_millis)
                                .map(|dt| format!("Loaded at {}", dt.format("%H:%M:%S")))
                                .unwrap_or_else(|| "Not loaded".to_string())
                        }
                    }}
                </span>

                // Groups that failed to load
                {move || {
                    let failures = state.failures.get();
                    (!failures.is_empty()).then(|| view! {
                        <span class="text-rose-600" title=failures.join("\n")>
                            {format!("{} group(s) unavailable", failures.len())}
                        </span>
                    })
                }}

                // Metrics provider URL, empty for the built-in snapshot
                <div class="flex items-center space-x-2">
                    <input
                        type="text"
                        placeholder="Built-in data"
                        class="px-2 py-1 border border-gray-300 rounded"
                        prop:value=source_url
                        on:input=move |ev| set_source_url.set(event_target_value(&ev))
                    />
                    <button
                        class="px-3 py-1 bg-indigo-600 hover:bg-indigo-700 text-white rounded"
                        on:click=on_reload
                    >
                        "Reload"
                    </button>
                </div>
            </div>
        </footer>
    }
}
