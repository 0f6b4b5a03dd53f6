//! Dashboard core
//!
//! View state, data loading, tab routing and chart configuration for the
//! quick commerce dashboard. Everything here is UI-agnostic and compiles
//! for both native targets and `wasm32`.

pub mod chart;
pub mod content;
pub mod error;
pub mod format;
pub mod loader;
pub mod metrics;
pub mod router;
pub mod state;

#[cfg(feature = "server")]
pub mod remote;

pub use chart::{
    delivery_performance_chart, order_volume_chart, trend_charts, ChartAdapter, ChartConfig,
    ChartKind, Rgb, SeriesSpec,
};
pub use content::{Polarity, Tone};
pub use error::{ChartError, GroupParseError, SourceError, TabParseError};
pub use loader::{DataLoader, LoadReport, MetricsSource, StaticSource};
pub use metrics::{
    ConsumerMetrics, DeliveryMetrics, EnvironmentMetrics, GroupKind, LaborMetrics, MetricField,
    MetricGroup, MetricGroups, SlotUpdate, Unit,
};
pub use router::{render, render_state, CardBody, ContentBlock, MetricCard, SummaryTile, TabAction};
pub use state::{Tab, ViewState};

#[cfg(feature = "server")]
pub use remote::HttpMetricsSource;
