//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::dashboard::{DataLoader, LoadReport, MetricGroups, MetricsSource};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Metric groups served to dashboards
    pub groups: Arc<MetricGroups>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state around an already populated set of groups
    pub fn new(groups: MetricGroups, config: ServerConfig) -> Self {
        Self {
            groups: Arc::new(groups),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Populate groups from a source, then build the state
    pub async fn from_source<S: MetricsSource>(
        source: S,
        config: ServerConfig,
    ) -> (Self, LoadReport) {
        let mut groups = MetricGroups::default();
        let report = DataLoader::new(source)
            .load(|update| groups.record(update))
            .await;
        (Self::new(groups, config), report)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::StaticSource;

    #[tokio::test]
    async fn test_from_static_source() {
        let (state, report) = AppState::from_source(StaticSource, ServerConfig::default()).await;
        assert!(report.is_complete());
        assert!(state.groups.is_complete());
        assert_eq!(state.uptime_seconds(), 0);
    }
}
