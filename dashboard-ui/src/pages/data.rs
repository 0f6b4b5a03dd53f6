//! Data Insights Page

use leptos::*;
use quickcommerce::dashboard::router::DataBlock;

use crate::components::{Chart, MetricCard};

#[component]
pub fn DataInsights(block: DataBlock) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <h2 class="text-2xl font-bold text-gray-800">{block.heading}</h2>

            <div class="grid md:grid-cols-2 gap-6">
                {block
                    .cards
                    .into_iter()
                    .map(|card| view! { <MetricCard card=card /> })
                    .collect_view()}
            </div>

            <section>
                <h2 class="text-2xl font-bold text-gray-800 mb-4">"Trend Analysis"</h2>
                <div class="grid lg:grid-cols-2 gap-6">
                    {block
                        .charts
                        .into_iter()
                        .map(|config| view! { <Chart config=config /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
