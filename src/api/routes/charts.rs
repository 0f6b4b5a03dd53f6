//! Chart Routes
//!
//! - GET /api/v1/charts - Both trend chart configurations
//! - GET /api/v1/charts/:id?kind=line|bar - One chart

use axum::{
    extract::{Path, Query},
    Json,
};

use crate::api::dto::{ChartListResponse, ChartParams};
use crate::api::error::{ApiError, ApiResult};
use crate::dashboard::{chart, ChartConfig, ChartKind};

/// GET /api/v1/charts
pub async fn list_charts() -> Json<ChartListResponse> {
    Json(ChartListResponse {
        charts: chart::trend_charts().into(),
    })
}

/// GET /api/v1/charts/:id
///
/// The order volume chart is line-only; delivery performance defaults to
/// bars and accepts `?kind=line`.
pub async fn get_chart(
    Path(id): Path<String>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<ChartConfig>> {
    let kind = params.kind().map_err(ApiError::Validation)?;

    match (id.as_str(), kind) {
        ("order-volume", None | Some(ChartKind::Line)) => Ok(Json(chart::order_volume_chart())),
        ("order-volume", Some(ChartKind::Bar)) => Err(ApiError::Validation(
            "order-volume is only available as a line chart".to_string(),
        )),
        ("delivery-performance", kind) => Ok(Json(chart::delivery_performance_chart(
            kind.unwrap_or(ChartKind::Bar),
        ))),
        _ => Err(ApiError::NotFound(format!("Chart {} not found", id))),
    }
}
