//! Chart Adapter
//!
//! Turns fixed numeric series into chart configurations. Field names
//! follow Chart.js (`borderColor`, `beginAtZero`, ...) so a config can be
//! handed to that library unchanged; the Leptos client draws the same
//! structure on a canvas.

use serde::Serialize;
use std::fmt;

use super::error::ChartError;

/// Month labels shared by both trend charts
pub const MONTHS: [&str; 7] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"];

pub const ORDER_VOLUME: [f64; 7] = [65.0, 78.0, 66.0, 89.0, 96.0, 112.0, 125.0];
pub const AVG_DELIVERY_MINUTES: [f64; 7] = [18.0, 16.0, 15.0, 14.0, 13.0, 12.0, 12.5];
pub const ON_TIME_PERCENT: [f64; 7] = [72.0, 75.0, 78.0, 80.0, 83.0, 85.0, 87.0];

const INDIGO: Rgb = Rgb(79, 70, 229);
const CYAN: Rgb = Rgb(6, 182, 212);
const EMERALD: Rgb = Rgb(16, 185, 129);

/// Opacity of series backgrounds
const FILL_ALPHA: f64 = 0.2;

/// Percent axis upper bound for bar rendering
const PERCENT_MAX: f64 = 100.0;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `rgb(r, g, b)`
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    /// `rgba(r, g, b, a)`
    pub fn with_alpha(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Input description of one series
#[derive(Debug, Clone)]
pub struct SeriesSpec<'a> {
    pub label: &'a str,
    pub values: &'a [f64],
    pub color: Rgb,
    pub fill: bool,
    pub tension: Option<f64>,
}

impl<'a> SeriesSpec<'a> {
    pub fn new(label: &'a str, values: &'a [f64], color: Rgb) -> Self {
        Self {
            label,
            values,
            color,
            fill: false,
            tension: None,
        }
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }
}

/// Renderer-facing series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// (label, value) pairs of one dataset
    pub fn points(&self, dataset: usize) -> Vec<(&str, f64)> {
        self.datasets
            .get(dataset)
            .map(|ds| {
                self.labels
                    .iter()
                    .map(String::as_str)
                    .zip(ds.data.iter().copied())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScale {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scales {
    pub y: AxisScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
}

/// Chart.js reads the legend from `options.plugins.legend`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

impl ChartOptions {
    /// Auto-scaled y axis, not anchored at zero
    pub fn auto_scaled() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    position: LegendPosition::Top,
                },
            },
            scales: Scales {
                y: AxisScale {
                    begin_at_zero: false,
                    max: None,
                },
            },
        }
    }

    /// Fixed 0-100 percent axis
    pub fn percent_scale() -> Self {
        Self {
            scales: Scales {
                y: AxisScale {
                    begin_at_zero: true,
                    max: Some(PERCENT_MAX),
                },
            },
            ..Self::auto_scaled()
        }
    }

    /// Scale policy for a chart kind
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar => Self::percent_scale(),
            ChartKind::Line => Self::auto_scaled(),
        }
    }
}

/// Complete configuration for one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Builds [`ChartConfig`]s from label and series inputs
pub struct ChartAdapter;

impl ChartAdapter {
    pub fn build(
        id: &'static str,
        title: &'static str,
        kind: ChartKind,
        labels: &[&str],
        series: &[SeriesSpec<'_>],
    ) -> Result<ChartConfig, ChartError> {
        if labels.is_empty() {
            return Err(ChartError::NoLabels);
        }

        let datasets = series
            .iter()
            .map(|input| {
                if input.values.len() != labels.len() {
                    return Err(ChartError::LengthMismatch {
                        series: input.label.to_string(),
                        expected: labels.len(),
                        actual: input.values.len(),
                    });
                }
                Ok(Dataset {
                    label: input.label.to_string(),
                    data: input.values.to_vec(),
                    border_color: input.color.css(),
                    background_color: input.color.with_alpha(FILL_ALPHA),
                    tension: input.tension,
                    fill: input.fill,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ChartConfig {
            id,
            title,
            kind,
            data: ChartData {
                labels: labels.iter().map(|l| l.to_string()).collect(),
                datasets,
            },
            options: ChartOptions::for_kind(kind),
        })
    }
}

/// Monthly order volume, single filled line
pub fn order_volume_chart() -> ChartConfig {
    ChartAdapter::build(
        "order-volume",
        "Order Volume Over Time",
        ChartKind::Line,
        &MONTHS,
        &[SeriesSpec::new("Orders (thousands)", &ORDER_VOLUME, INDIGO)
            .filled()
            .tension(0.3)],
    )
    .unwrap_or_else(|e| unreachable!("fixed order volume series is valid: {e}"))
}

/// Delivery time and on-time rate over the same months
pub fn delivery_performance_chart(kind: ChartKind) -> ChartConfig {
    ChartAdapter::build(
        "delivery-performance",
        "Delivery Performance Metrics",
        kind,
        &MONTHS,
        &[
            SeriesSpec::new("Avg Delivery Time (mins)", &AVG_DELIVERY_MINUTES, CYAN),
            SeriesSpec::new("On-time Rate (%)", &ON_TIME_PERCENT, EMERALD),
        ],
    )
    .unwrap_or_else(|e| unreachable!("fixed delivery series are valid: {e}"))
}

/// Charts shown on the data tab
pub fn trend_charts() -> [ChartConfig; 2] {
    [order_volume_chart(), delivery_performance_chart(ChartKind::Bar)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_css() {
        assert_eq!(INDIGO.css(), "rgb(79, 70, 229)");
        assert_eq!(INDIGO.with_alpha(0.2), "rgba(79, 70, 229, 0.2)");
    }

    #[test]
    fn test_order_volume_chart() {
        let chart = order_volume_chart();
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.data.datasets.len(), 1);

        let ds = &chart.data.datasets[0];
        assert_eq!(ds.label, "Orders (thousands)");
        assert_eq!(ds.tension, Some(0.3));
        assert!(ds.fill);
        assert_eq!(chart.data.points(0).len(), 7);
        assert_eq!(chart.data.points(0)[6], ("Jul", 125.0));
        assert!(!chart.options.scales.y.begin_at_zero);
        assert_eq!(chart.options.scales.y.max, None);
    }

    #[test]
    fn test_delivery_chart_scale_policy() {
        let bar = delivery_performance_chart(ChartKind::Bar);
        assert_eq!(bar.data.datasets.len(), 2);
        assert!(bar.options.scales.y.begin_at_zero);
        assert_eq!(bar.options.scales.y.max, Some(100.0));

        let line = delivery_performance_chart(ChartKind::Line);
        assert!(!line.options.scales.y.begin_at_zero);
        assert_eq!(line.options.scales.y.max, None);
    }

    #[test]
    fn test_charts_share_labels() {
        let [orders, delivery] = trend_charts();
        assert_eq!(orders.data.labels, delivery.data.labels);
        assert_eq!(orders.data.labels.first().map(String::as_str), Some("Jan"));
        assert_eq!(orders.data.labels.last().map(String::as_str), Some("Jul"));
        for ds in orders.data.datasets.iter().chain(&delivery.data.datasets) {
            assert_eq!(ds.data.len(), 7);
        }
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let short = [1.0, 2.0];
        let err = ChartAdapter::build(
            "t",
            "T",
            ChartKind::Line,
            &MONTHS,
            &[SeriesSpec::new("short", &short, CYAN)],
        )
        .unwrap_err();

        assert_eq!(
            err,
            ChartError::LengthMismatch {
                series: "short".to_string(),
                expected: 7,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_empty_labels_rejected() {
        let err = ChartAdapter::build("t", "T", ChartKind::Bar, &[], &[]).unwrap_err();
        assert_eq!(err, ChartError::NoLabels);
    }

    #[test]
    fn test_serializes_chartjs_names() {
        let json = serde_json::to_value(order_volume_chart()).unwrap();
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "rgb(79, 70, 229)");
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], false);
        assert_eq!(json["options"]["plugins"]["legend"]["position"], "top");
        assert!(json["options"].get("legend").is_none());

        let json = serde_json::to_value(delivery_performance_chart(ChartKind::Bar)).unwrap();
        assert_eq!(json["options"]["scales"]["y"]["max"], 100.0);
        assert!(json["data"]["datasets"][0].get("tension").is_none());
    }
}
