//! Pages
//!
//! One view per tab, each rendering the block the router produced.

pub mod analysis;
pub mod data;
pub mod overview;
pub mod solutions;

pub use analysis::Analysis;
pub use data::DataInsights;
pub use overview::Overview;
pub use solutions::Solutions;

use leptos::*;
use quickcommerce::dashboard::{render_state, ContentBlock};

use crate::state::DashboardState;

/// Content area for the active tab
#[component]
pub fn TabContent() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    move || match state.view.with(render_state) {
        ContentBlock::Overview(block) => view! { <Overview block=block /> }.into_view(),
        ContentBlock::Data(block) => view! { <DataInsights block=block /> }.into_view(),
        ContentBlock::Analysis(block) => view! { <Analysis block=block /> }.into_view(),
        ContentBlock::Solutions(block) => view! { <Solutions block=block /> }.into_view(),
    }
}
