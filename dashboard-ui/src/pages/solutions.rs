//! Solutions Page
//!
//! Iceberg analysis, structural solutions and the implementation roadmap.

use leptos::*;
use quickcommerce::dashboard::router::SolutionsBlock;

use crate::components::ActionButtons;

/// Row colors from the surface of the iceberg down
const ICEBERG_SHADES: [&str; 4] = [
    "bg-sky-100 text-sky-900",
    "bg-sky-200 text-sky-900",
    "bg-indigo-200 text-indigo-900",
    "bg-indigo-700 text-white",
];

#[component]
pub fn Solutions(block: SolutionsBlock) -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Iceberg
            <section>
                <h2 class="text-2xl font-bold text-gray-800 mb-4">"Structural Analysis"</h2>
                <div class="space-y-2">
                    {block
                        .iceberg
                        .iter()
                        .enumerate()
                        .map(|(idx, level)| view! {
                            <div class=format!("rounded-lg p-4 {}", ICEBERG_SHADES[idx % ICEBERG_SHADES.len()])>
                                <h3 class="font-bold mb-1">{level.title}</h3>
                                <ul class="list-disc list-inside text-sm">
                                    {level
                                        .observations
                                        .iter()
                                        .map(|item| view! { <li>{*item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            // Structural solutions
            <section>
                <h2 class="text-2xl font-bold text-gray-800 mb-4">"Proposed Structural Solutions"</h2>
                <div class="grid md:grid-cols-2 gap-4">
                    {block
                        .solutions
                        .iter()
                        .enumerate()
                        .map(|(idx, solution)| view! {
                            <div class="bg-white rounded-xl shadow p-5 border-l-4 border-teal-500">
                                <h3 class="font-bold text-teal-700 mb-2">
                                    {format!("{}. {}", idx + 1, solution.title)}
                                </h3>
                                <p class="text-sm text-gray-700">{solution.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            // Roadmap
            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-2xl font-bold text-gray-800 mb-4">"Implementation Roadmap"</h2>
                <ol class="space-y-6">
                    {block
                        .roadmap
                        .iter()
                        .map(|phase| view! {
                            <li class="flex gap-4">
                                <span class="flex-shrink-0 w-8 h-8 rounded-full bg-indigo-600 text-white flex items-center justify-center font-bold">
                                    {phase.step}
                                </span>
                                <div>
                                    <h3 class="font-bold text-gray-800">{phase.title}</h3>
                                    <ul class="list-disc list-inside text-sm text-gray-700">
                                        {phase
                                            .actions
                                            .iter()
                                            .map(|action| view! { <li>{*action}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </section>

            <ActionButtons actions=block.actions />
        </div>
    }
}
