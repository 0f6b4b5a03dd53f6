//! HTTP API Client
//!
//! Browser-side [`MetricsSource`] backed by the metrics provider API.
//! The provider URL lives only in the current page's state.

use quickcommerce::dashboard::GroupKind;

#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use quickcommerce::dashboard::{MetricGroup, MetricsSource, SourceError};

/// Normalize a provider URL typed by the user; blank means the built-in data
pub fn provider_url(input: &str) -> Option<String> {
    let url = input.trim().trim_end_matches('/');
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

/// Metrics provider reached with `fetch`
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn group_url(&self, kind: GroupKind) -> String {
        format!(
            "{}/metrics/{}",
            self.base_url.trim_end_matches('/'),
            kind.slug()
        )
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl MetricsSource for HttpSource {
    fn name(&self) -> &str {
        "browser-http"
    }

    async fn fetch(&self, kind: GroupKind) -> Result<MetricGroup, SourceError> {
        let response = Request::get(&self.group_url(kind))
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        if !response.ok() {
            return Err(SourceError::Status {
                group: kind,
                status: response.status(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_url() {
        let source = HttpSource::new("http://localhost:8085/api/v1/");
        assert_eq!(
            source.group_url(GroupKind::Environment),
            "http://localhost:8085/api/v1/metrics/environment"
        );
    }

    #[test]
    fn test_provider_url() {
        assert_eq!(
            provider_url("  http://localhost:8085/api/v1/ "),
            Some("http://localhost:8085/api/v1".to_string())
        );
        assert_eq!(provider_url("   "), None);
    }
}
