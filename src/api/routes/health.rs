//! Health Routes
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::dashboard::GroupKind;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Reports which metric groups the provider holds. Missing groups make
/// the service degraded, not down: dashboards render placeholders.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let groups_loaded: Vec<GroupKind> = GroupKind::ALL
        .into_iter()
        .filter(|kind| state.groups.is_loaded(*kind))
        .collect();

    let status = if groups_loaded.len() == GroupKind::ALL.len() {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        groups_loaded,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::dashboard::{MetricGroup, MetricGroups, StaticSource};

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_degraded_when_groups_missing() {
        let mut groups = MetricGroups::default();
        groups.apply(MetricGroup::Labor(StaticSource::labor()));
        let state = Arc::new(AppState::new(groups, ServerConfig::default()));

        let Json(health) = full_health(State(state)).await;
        assert_eq!(health.status, "degraded");
        assert_eq!(health.groups_loaded, vec![GroupKind::Labor]);
    }
}
