//! Metrics Routes
//!
//! The metrics provider side of the dashboard's data loader.
//!
//! - GET /api/v1/metrics - All four groups (absent groups are null)
//! - GET /api/v1/metrics/:group - One group

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::{GroupKind, MetricGroup, MetricGroups};

/// GET /api/v1/metrics
pub async fn list_groups(State(state): State<Arc<AppState>>) -> Json<MetricGroups> {
    Json(state.groups.as_ref().clone())
}

/// GET /api/v1/metrics/:group
pub async fn get_group(
    State(state): State<Arc<AppState>>,
    Path(group): Path<String>,
) -> ApiResult<Json<MetricGroup>> {
    let kind: GroupKind = group.parse()?;

    state
        .groups
        .get(kind)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Metric group {} has not been loaded", kind)))
}
