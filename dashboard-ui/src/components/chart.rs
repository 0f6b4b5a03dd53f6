//! Chart Component
//!
//! Draws a [`ChartConfig`] on an HTML5 canvas: lines (optionally filled)
//! or grouped bars over the category labels, with an HTML legend.

use leptos::*;
use quickcommerce::dashboard::chart::{AxisScale, LegendPosition};
use quickcommerce::dashboard::{ChartConfig, ChartKind};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 36.0;
const GRID_LINES: usize = 5;

/// Chart card component
#[component]
pub fn Chart(config: ChartConfig) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend_top = config.options.plugins.legend.position == LegendPosition::Top;

    let drawn = config.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &drawn);
        }
    });

    let legend = view! { <ChartLegend config=config.clone() /> };
    let (legend_above, legend_below) = if legend_top {
        (Some(legend), None)
    } else {
        (None, Some(legend))
    };

    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h3 class="text-lg font-bold text-gray-800 mb-4">{config.title}</h3>
            {legend_above}
            <canvas
                node_ref=canvas_ref
                width="640"
                height="320"
                class="w-full h-64"
            />
            {legend_below}
        </div>
    }
}

/// Legend showing dataset colors
#[component]
fn ChartLegend(config: ChartConfig) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 my-3">
            {config
                .data
                .datasets
                .into_iter()
                .map(|ds| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", ds.border_color)
                        />
                        <span class="text-sm text-gray-600">{ds.label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Y-axis bounds for the chart's scale policy
fn y_bounds(config: &ChartConfig) -> (f64, f64) {
    let values = config.data.datasets.iter().flat_map(|ds| ds.data.iter().copied());
    let (data_min, data_max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !data_min.is_finite() {
        return (0.0, 1.0);
    }

    scale_bounds(config.options.scales.y, data_min, data_max)
}

fn scale_bounds(axis: AxisScale, data_min: f64, data_max: f64) -> (f64, f64) {
    let span = data_max - data_min;
    let padding = if span > 0.0 { span * 0.1 } else { 1.0 };

    let min = if axis.begin_at_zero {
        data_min.min(0.0)
    } else {
        data_min - padding
    };
    let max = axis.max.unwrap_or(data_max + padding);

    if max > min {
        (min, max)
    } else {
        (min, min + 1.0)
    }
}

/// Center of category `index` out of `count` along the plot width
fn category_center(index: usize, count: usize, left: f64, width: f64) -> f64 {
    let slot = width / count.max(1) as f64;
    left + slot * (index as f64 + 0.5)
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, config: &ChartConfig) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let (y_min, y_max) = y_bounds(config);
    let to_y = |value: f64| MARGIN_TOP + ((y_max - value) / (y_max - y_min)) * chart_height;

    // Horizontal grid lines with y labels
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=GRID_LINES {
        let y = MARGIN_TOP + (i as f64 / GRID_LINES as f64) * chart_height;
        ctx.set_stroke_style(&"#e5e7eb".into());
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / GRID_LINES as f64) * (y_max - y_min);
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let labels = &config.data.labels;
    let count = labels.len();

    let baseline = to_y(y_min.max(0.0).min(y_max));
    match config.kind {
        ChartKind::Line => draw_lines(&ctx, config, chart_width, &to_y, baseline),
        ChartKind::Bar => draw_bars(&ctx, config, chart_width, &to_y, baseline),
    }

    // Category labels
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("12px sans-serif");
    for (i, label) in labels.iter().enumerate() {
        let x = category_center(i, count, MARGIN_LEFT, chart_width);
        let _ = ctx.fill_text(label, x - 10.0, height - 12.0);
    }
}

fn draw_lines(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    chart_width: f64,
    to_y: &dyn Fn(f64) -> f64,
    baseline: f64,
) {
    let count = config.data.labels.len();

    for ds in &config.data.datasets {
        let points: Vec<(f64, f64)> = ds
            .data
            .iter()
            .enumerate()
            .map(|(i, v)| (category_center(i, count, MARGIN_LEFT, chart_width), to_y(*v)))
            .collect();
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            continue;
        };
        let tension = ds.tension.unwrap_or(0.0);

        if ds.fill {
            ctx.set_fill_style(&ds.background_color.as_str().into());
            ctx.begin_path();
            ctx.move_to(first.0, baseline);
            ctx.line_to(first.0, first.1);
            trace_path(ctx, &points, tension);
            ctx.line_to(last.0, baseline);
            ctx.close_path();
            ctx.fill();
        }

        ctx.set_stroke_style(&ds.border_color.as_str().into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(first.0, first.1);
        trace_path(ctx, &points, tension);
        ctx.stroke();

        ctx.set_fill_style(&ds.border_color.as_str().into());
        for (x, y) in &points {
            ctx.begin_path();
            let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }
}

/// Continue the current path through `points`, curved by `tension`
fn trace_path(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)], tension: f64) {
    for i in 1..points.len() {
        let (x0, y0) = points[i - 1];
        let (x1, y1) = points[i];

        if tension <= 0.0 {
            ctx.line_to(x1, y1);
            continue;
        }

        let prev = if i >= 2 { points[i - 2] } else { points[i - 1] };
        let next = points.get(i + 1).copied().unwrap_or(points[i]);
        let cp1 = (x0 + (x1 - prev.0) * tension / 2.0, y0 + (y1 - prev.1) * tension / 2.0);
        let cp2 = (x1 - (next.0 - x0) * tension / 2.0, y1 - (next.1 - y0) * tension / 2.0);
        ctx.bezier_curve_to(cp1.0, cp1.1, cp2.0, cp2.1, x1, y1);
    }
}

fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    chart_width: f64,
    to_y: &dyn Fn(f64) -> f64,
    baseline: f64,
) {
    let count = config.data.labels.len().max(1);
    let series = config.data.datasets.len().max(1);
    let slot = chart_width / count as f64;
    let group_width = slot * 0.8;
    let bar_width = group_width / series as f64;

    for (s, ds) in config.data.datasets.iter().enumerate() {
        for (i, value) in ds.data.iter().enumerate() {
            let x = MARGIN_LEFT
                + slot * i as f64
                + (slot - group_width) / 2.0
                + bar_width * s as f64;
            let top = to_y(*value);

            ctx.set_fill_style(&ds.background_color.as_str().into());
            ctx.fill_rect(x, top, bar_width, baseline - top);
            ctx.set_stroke_style(&ds.border_color.as_str().into());
            ctx.set_line_width(1.0);
            ctx.stroke_rect(x, top, bar_width, baseline - top);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcommerce::dashboard::chart::{delivery_performance_chart, order_volume_chart};

    #[test]
    fn test_percent_axis_is_fixed() {
        let (min, max) = y_bounds(&delivery_performance_chart(ChartKind::Bar));
        assert_eq!((min, max), (0.0, 100.0));
    }

    #[test]
    fn test_auto_axis_pads_data_range() {
        let (min, max) = y_bounds(&order_volume_chart());
        assert!(min < 65.0 && min > 0.0);
        assert!(max > 125.0);
    }

    #[test]
    fn test_flat_series_gets_nonzero_span() {
        let axis = AxisScale { begin_at_zero: false, max: None };
        let (min, max) = scale_bounds(axis, 5.0, 5.0);
        assert!(max > min);
    }

    #[test]
    fn test_category_centers() {
        assert_eq!(category_center(0, 4, 0.0, 400.0), 50.0);
        assert_eq!(category_center(3, 4, 0.0, 400.0), 350.0);
    }
}
