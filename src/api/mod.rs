//! Metrics Provider API
//!
//! HTTP API that serves the dashboard's metric groups, chart
//! configurations and tab content, built with Axum. It also hosts the
//! compiled dashboard bundle.
//!
//! # Endpoints
//!
//! ## Metrics
//! - `GET /api/v1/metrics` - All metric groups
//! - `GET /api/v1/metrics/:group` - One group (`delivery`, `consumer`, `environment`, `labor`)
//!
//! ## Charts
//! - `GET /api/v1/charts` - Both trend charts
//! - `GET /api/v1/charts/:id` - One chart, `?kind=line|bar`
//!
//! ## Tabs
//! - `GET /api/v1/tabs/:tab` - Content block for a tab
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health` - Full health status
//!
//! Any other path is served from the configured static directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickcommerce::api::{serve, AppState};
//! use quickcommerce::config::ServerConfig;
//! use quickcommerce::dashboard::StaticSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let (state, _report) = AppState::from_source(StaticSource, config.clone()).await;
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/metrics", get(routes::metrics::list_groups))
        .route("/metrics/:group", get(routes::metrics::get_group))
        .route("/charts", get(routes::charts::list_charts))
        .route("/charts/:id", get(routes::charts::get_chart))
        .route("/tabs/:tab", get(routes::tabs::get_tab));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let static_files = ServeDir::new(&state.config.static_dir);

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard provider listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard provider shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{MetricGroups, StaticSource};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app(groups: MetricGroups) -> Router {
        let config = ServerConfig {
            static_dir: "/nonexistent/dist".to_string(),
            ..Default::default()
        };
        build_router(AppState::new(groups, config))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app(StaticSource::snapshot());
        let response = app
            .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, json) = get_json(create_test_app(StaticSource::snapshot()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_list_groups() {
        let (status, json) =
            get_json(create_test_app(StaticSource::snapshot()), "/api/v1/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["delivery"]["avgDeliveryTime"], 12.5);
        assert_eq!(json["labor"]["turnoverRate"], 22.0);
    }

    #[tokio::test]
    async fn test_get_group() {
        let (status, json) = get_json(
            create_test_app(StaticSource::snapshot()),
            "/api/v1/metrics/consumer",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["group"], "consumer");
        assert_eq!(json["metrics"]["impulsePurchaseRate"], 38.0);
    }

    #[tokio::test]
    async fn test_get_unknown_group() {
        let (status, json) = get_json(
            create_test_app(StaticSource::snapshot()),
            "/api/v1/metrics/system",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "GROUP_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_unloaded_group() {
        let (status, json) = get_json(
            create_test_app(MetricGroups::default()),
            "/api/v1/metrics/delivery",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_charts() {
        let (status, json) =
            get_json(create_test_app(StaticSource::snapshot()), "/api/v1/charts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["charts"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["charts"][1]["kind"], "bar");
    }

    #[tokio::test]
    async fn test_get_chart_as_line() {
        let (status, json) = get_json(
            create_test_app(StaticSource::snapshot()),
            "/api/v1/charts/delivery-performance?kind=line",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["kind"], "line");
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], false);
    }

    #[tokio::test]
    async fn test_get_chart_bad_kind() {
        let (status, _) = get_json(
            create_test_app(StaticSource::snapshot()),
            "/api/v1/charts/order-volume?kind=pie",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_tab_content() {
        let (status, json) = get_json(
            create_test_app(StaticSource::snapshot()),
            "/api/v1/tabs/solutions",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tab"], "solutions");
        assert_eq!(json["roadmap"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_unknown_tab_falls_back_to_overview() {
        let (status, json) = get_json(
            create_test_app(StaticSource::snapshot()),
            "/api/v1/tabs/references",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tab"], "overview");
        assert_eq!(json["summary"][0]["value"], "12.5 mins");
    }
}
