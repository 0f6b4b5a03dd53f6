//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod metric_card;
pub mod nav;
pub mod tone;

pub use chart::Chart;
pub use loading::LoadingPlaceholder;
pub use metric_card::{MetricCard, SummaryTile};
pub use nav::{ActionButtons, Nav};
