//! Data Transfer Objects
//!
//! Response types for the API endpoints that are not dashboard types
//! themselves.

use serde::{Deserialize, Serialize};

use crate::dashboard::{ChartConfig, ChartKind, GroupKind};

/// All chart configurations
#[derive(Debug, Serialize)]
pub struct ChartListResponse {
    pub charts: Vec<ChartConfig>,
}

/// Query parameters for a single chart
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// Render as `line` or `bar` where the chart supports both
    #[serde(default)]
    pub kind: Option<String>,
}

impl ChartParams {
    pub fn kind(&self) -> Result<Option<ChartKind>, String> {
        match self.kind.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None => Ok(None),
            Some("line") => Ok(Some(ChartKind::Line)),
            Some("bar") => Ok(Some(ChartKind::Bar)),
            Some(other) => Err(format!("unknown chart kind '{}', expected line or bar", other)),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Groups the provider can serve
    pub groups_loaded: Vec<GroupKind>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_params_kind() {
        let params = ChartParams { kind: Some("BAR".to_string()) };
        assert_eq!(params.kind(), Ok(Some(ChartKind::Bar)));

        assert_eq!(ChartParams::default().kind(), Ok(None));

        let params = ChartParams { kind: Some("pie".to_string()) };
        assert!(params.kind().is_err());
    }
}
