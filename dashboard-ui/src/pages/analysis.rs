//! System Analysis Page
//!
//! Causal loop narrative, archetypes and the leverage points table.

use leptos::*;
use quickcommerce::dashboard::content::FeedbackLoop;
use quickcommerce::dashboard::router::AnalysisBlock;

use crate::components::tone::{badge_class, text_class};

#[component]
pub fn Analysis(block: AnalysisBlock) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-2xl font-bold text-gray-800 mb-2">"System Dynamics Analysis"</h2>
                <p class="text-gray-700">{block.cld_intro}</p>
            </section>

            // Key variables
            <section>
                <h2 class="text-xl font-bold text-gray-800 mb-4">"Key Variables in the System"</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    {block
                        .key_variables
                        .iter()
                        .map(|group| view! {
                            <div class="bg-white rounded-xl shadow p-5">
                                <h3 class="font-bold text-indigo-700 mb-2">{group.title}</h3>
                                <ul class="list-disc list-inside text-sm text-gray-700 space-y-1">
                                    {group
                                        .variables
                                        .iter()
                                        .map(|v| view! { <li>{*v}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            // Feedback loops
            <div class="grid lg:grid-cols-2 gap-6">
                <LoopColumn title="Reinforcing Loops (Growth Drivers)" loops=block.reinforcing />
                <LoopColumn title="Balancing Loops (System Limits)" loops=block.balancing />
            </div>

            // Archetypes
            <section>
                <h2 class="text-xl font-bold text-gray-800 mb-2">"System Archetypes in Quick Commerce"</h2>
                <p class="text-gray-700 mb-4">{block.archetypes_intro}</p>
                <div class="grid md:grid-cols-3 gap-4">
                    {block
                        .archetypes
                        .iter()
                        .map(|archetype| view! {
                            <div class=format!("rounded-xl p-5 {}", badge_class(archetype.tone))>
                                <h3 class="font-bold mb-2">{archetype.title}</h3>
                                <p class="text-sm">{archetype.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            // Leverage points
            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-xl font-bold text-gray-800 mb-2">"Leverage Points Analysis"</h2>
                <p class="text-gray-700 mb-4">{block.leverage_intro}</p>
                <div class="overflow-x-auto">
                    <table class="min-w-full text-sm">
                        <thead class="bg-indigo-50 text-indigo-800">
                            <tr>
                                <th class="px-4 py-2 text-left">"Leverage Point"</th>
                                <th class="px-4 py-2 text-left">"Category"</th>
                                <th class="px-4 py-2 text-left">"Rationale"</th>
                                <th class="px-4 py-2 text-left">"Expected Impact"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {block
                                .leverage_points
                                .iter()
                                .map(|point| view! {
                                    <tr>
                                        <td class="px-4 py-3 font-medium">{point.point}</td>
                                        <td class="px-4 py-3">{point.category}</td>
                                        <td class="px-4 py-3 text-gray-700">{point.rationale}</td>
                                        <td class="px-4 py-3 text-gray-700">{point.expected_impact}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </section>
        </div>
    }
}

#[component]
fn LoopColumn(title: &'static str, loops: Vec<FeedbackLoop>) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow p-6 space-y-4">
            <h2 class="text-xl font-bold text-gray-800">{title}</h2>
            {loops
                .into_iter()
                .map(|l| view! {
                    <div>
                        <h3 class=format!("font-bold {}", text_class(l.tone))>
                            {format!("{} – {}", l.code, l.title)}
                        </h3>
                        <p class="text-sm font-mono text-gray-700">{l.chain}</p>
                        <p class="text-sm text-gray-500">{l.note}</p>
                    </div>
                })
                .collect_view()}
        </section>
    }
}
