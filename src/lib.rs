//! # Quick Commerce Dynamics
//!
//! A systems-thinking dashboard on ultra-fast ("10-minute") delivery:
//! headline metrics, two trend charts, causal loop narrative, a leverage
//! points table and an implementation roadmap.
//!
//! ## Modules
//!
//! - [`dashboard`]: View state, data loader, tab router, chart adapter
//! - [`api`]: Metrics provider API with Axum (feature `server`)
//! - [`config`]: TOML configuration with environment overrides (feature `server`)
//! - [`text`]: Terminal rendering for the CLI (feature `server`)
//!
//! The browser client lives in the `dashboard-ui` crate and depends on
//! this one with `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust
//! use quickcommerce::dashboard::*;
//!
//! # async fn demo() {
//! let mut state = ViewState::new();
//! DataLoader::new(StaticSource).load_into(&mut state).await;
//!
//! state.select(Tab::Data);
//! match render_state(&state) {
//!     ContentBlock::Data(block) => assert_eq!(block.cards.len(), 4),
//!     _ => unreachable!(),
//! }
//! # }
//! ```

pub mod dashboard;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod text;

// Re-export top-level types for convenience
pub use dashboard::{
    render, ChartConfig, ContentBlock, DataLoader, GroupKind, MetricGroup, MetricGroups,
    MetricsSource, StaticSource, Tab, ViewState,
};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
