//! Overview Page
//!
//! Research question, introduction, headline metrics and challenge areas.

use leptos::*;
use quickcommerce::dashboard::router::OverviewBlock;

use crate::components::tone::badge_class;
use crate::components::{ActionButtons, SummaryTile};

#[component]
pub fn Overview(block: OverviewBlock) -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Research question
            <section class="bg-white rounded-xl shadow p-6 border-l-4 border-indigo-500">
                <h2 class="text-xl font-bold text-indigo-700 mb-2">"Research Question"</h2>
                <p class="text-lg text-gray-800 italic">{block.question}</p>
            </section>

            // Introduction
            <section class="bg-white rounded-xl shadow p-6 space-y-4">
                <h2 class="text-2xl font-bold text-gray-800">"Introduction"</h2>
                {block
                    .introduction
                    .iter()
                    .map(|paragraph| view! { <p class="text-gray-700">{*paragraph}</p> })
                    .collect_view()}
            </section>

            // Summary tiles
            <section>
                <h2 class="text-2xl font-bold text-gray-800 mb-4">"Key Metrics at a Glance"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {block
                        .summary
                        .into_iter()
                        .map(|tile| view! { <SummaryTile tile=tile /> })
                        .collect_view()}
                </div>
            </section>

            // Challenge areas
            <section>
                <h2 class="text-2xl font-bold text-gray-800 mb-4">"The Quick Commerce Challenge"</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    {block
                        .challenges
                        .iter()
                        .map(|area| view! {
                            <div class=format!("rounded-xl p-5 {}", badge_class(area.tone))>
                                <h3 class="font-bold mb-2">{area.title}</h3>
                                <p class="text-sm">{area.summary}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <ActionButtons actions=block.actions />
        </div>
    }
}
