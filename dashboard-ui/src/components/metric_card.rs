//! Metric Card Component
//!
//! Cards for one metric group and the overview summary tiles.

use leptos::*;
use quickcommerce::dashboard::router;
use quickcommerce::dashboard::CardBody;

use crate::components::loading::LoadingPlaceholder;
use crate::components::tone::{border_class, text_class};

/// Card listing every field of one metric group
#[component]
pub fn MetricCard(card: router::MetricCard) -> impl IntoView {
    let body = match card.body {
        CardBody::Loading => view! { <LoadingPlaceholder /> }.into_view(),
        CardBody::Loaded(fields) => view! {
            <dl class="space-y-2">
                {fields
                    .into_iter()
                    .map(|field| view! {
                        <div class="flex justify-between gap-4">
                            <dt class="text-gray-600">{field.label}</dt>
                            <dd class="font-semibold text-gray-900">{field.display}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        }
        .into_view(),
    };

    view! {
        <div class=format!(
            "bg-white rounded-xl shadow p-6 border-l-4 {}",
            border_class(card.tone)
        )>
            <h3 class=format!("text-lg font-bold mb-4 {}", text_class(card.tone))>{card.title}</h3>
            {body}
        </div>
    }
}

/// Headline value on the overview tab
#[component]
pub fn SummaryTile(tile: router::SummaryTile) -> impl IntoView {
    let value_class = if tile.loaded {
        "text-2xl font-bold text-indigo-700"
    } else {
        "text-2xl font-bold text-gray-300"
    };

    view! {
        <div class="bg-white rounded-xl shadow p-4 text-center">
            <div class="text-sm text-gray-500">{tile.label}</div>
            <div class=value_class>{tile.value}</div>
        </div>
    }
}
