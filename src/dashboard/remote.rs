//! Remote Metrics Source
//!
//! Reads metric groups from a provider API (see [`crate::api`]) over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::SourceError;
use super::loader::MetricsSource;
use super::metrics::{GroupKind, MetricGroup};

/// Configuration for [`HttpMetricsSource`]
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Provider base URL, e.g. `http://localhost:8085/api/v1`
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Attempts per group before giving up
    pub max_retries: u32,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8085/api/v1".to_string(),
            request_timeout_ms: 5000,
            max_retries: 3,
        }
    }
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Metrics source backed by `GET {base_url}/metrics/{group}`
pub struct HttpMetricsSource {
    client: Client,
    config: RemoteConfig,
}

impl HttpMetricsSource {
    pub fn new(config: RemoteConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| SourceError::Unavailable(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn group_url(&self, kind: GroupKind) -> String {
        format!(
            "{}/metrics/{}",
            self.config.base_url.trim_end_matches('/'),
            kind.slug()
        )
    }

    async fn fetch_once(&self, kind: GroupKind) -> Result<MetricGroup, SourceError> {
        let response = self
            .client
            .get(self.group_url(kind))
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                group: kind,
                status: status.as_u16(),
            });
        }

        response
            .json::<MetricGroup>()
            .await
            .map_err(|e| SourceError::Decode {
                group: kind,
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl MetricsSource for HttpMetricsSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, kind: GroupKind) -> Result<MetricGroup, SourceError> {
        let mut last_error = SourceError::Unavailable("no attempts made".to_string());

        for attempt in 0..self.config.max_retries.max(1) {
            if attempt > 0 {
                // Linear backoff: 250ms, 500ms, ...
                tokio::time::sleep(Duration::from_millis(250 * attempt as u64)).await;
            }

            match self.fetch_once(kind).await {
                Ok(group) => return Ok(group),
                // 4xx and bad payloads are final
                Err(e @ SourceError::Status { status: 400..=499, .. }) => return Err(e),
                Err(e @ SourceError::Decode { .. }) => return Err(e),
                Err(e) => {
                    tracing::debug!(group = %kind, attempt, error = %e, "Metrics fetch failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RemoteConfig::default();
        assert_eq!(config.base_url, "http://localhost:8085/api/v1");
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_group_url_trims_trailing_slash() {
        let source =
            HttpMetricsSource::new(RemoteConfig::new("http://example.test/api/v1/")).unwrap();
        assert_eq!(
            source.group_url(GroupKind::Environment),
            "http://example.test/api/v1/metrics/environment"
        );
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_unavailable() {
        let source = HttpMetricsSource::new(RemoteConfig {
            base_url: "http://127.0.0.1:9/api/v1".to_string(),
            request_timeout_ms: 500,
            max_retries: 1,
        })
        .unwrap();

        let err = source.fetch(GroupKind::Delivery).await.unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }
}
