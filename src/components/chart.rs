//! Chart Components
//!
//! Canvas-drawn charts for the dashboard: trend area chart, state bar
//! chart, and status distribution pie.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// One chart datum: a label with a numeric value.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Primary accent color (violet, matching the brand gradient).
const ACCENT: &str = "#8b5cf6";
const ACCENT_FILL: &str = "rgba(139, 92, 246, 0.15)";
const GRID: &str = "#f1f5f9";
const LABEL: &str = "#64748b";
const BACKGROUND: &str = "#ffffff";

/// Slice colors for the status pie: critical, warning, stable, overflow.
const SLICE_COLORS: [&str; 4] = ["#ef4444", "#f59e0b", "#22c55e", "#8b5cf6"];

/// Area chart over an ordered series (monthly update trend).
#[component]
pub fn TrendChart(#[prop(into)] points: Signal<Vec<SeriesPoint>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let points = points.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_trend(&canvas, &points);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Vertical bar chart over a labelled series (per-state update counts).
#[component]
pub fn BarChart(#[prop(into)] points: Signal<Vec<SeriesPoint>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = points.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &points);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Pie chart with an HTML legend (status distribution).
#[component]
pub fn PieChart(#[prop(into)] points: Signal<Vec<SeriesPoint>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = points.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &points);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="320"
                height="320"
                class="w-48 h-48 md:w-64 md:h-64 mx-auto"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    points.get()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, point)| {
                            let color = SLICE_COLORS[idx % SLICE_COLORS.len()];
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", color)
                                    />
                                    <span class="text-sm text-slate-500">
                                        {point.label}
                                        " ("
                                        {format!("{:.0}", point.value)}
                                        ")"
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Padded y-axis maximum for a series. Never collapses to zero so flat
/// or empty series still get a drawable scale.
pub(crate) fn series_max(points: &[SeriesPoint]) -> f64 {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

fn clear_canvas(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No data yet", width / 2.0 - 40.0, height / 2.0);
}

fn draw_trend(canvas: &HtmlCanvasElement, points: &[SeriesPoint]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear_canvas(&ctx, width, height);

    if points.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let y_max = series_max(points);

    // Horizontal grid lines with y-axis labels
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&GRID.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&LABEL.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let step = if points.len() > 1 {
        chart_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x_of = |i: usize| margin_left + i as f64 * step;
    let y_of = |value: f64| margin_top + (1.0 - value / y_max) * chart_height;

    // Area fill under the line
    ctx.set_fill_style(&ACCENT_FILL.into());
    ctx.begin_path();
    ctx.move_to(x_of(0), y_of(points[0].value));
    for (i, point) in points.iter().enumerate().skip(1) {
        ctx.line_to(x_of(i), y_of(point.value));
    }
    ctx.line_to(x_of(points.len() - 1), margin_top + chart_height);
    ctx.line_to(x_of(0), margin_top + chart_height);
    ctx.close_path();
    ctx.fill();

    // Line on top
    ctx.set_stroke_style(&ACCENT.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_of(i), y_of(point.value));
        } else {
            ctx.line_to(x_of(i), y_of(point.value));
        }
    }
    ctx.stroke();

    // Points
    ctx.set_fill_style(&ACCENT.into());
    for (i, point) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_of(i), y_of(point.value), 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis labels
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let _ = ctx.fill_text(&point.label, x_of(i) - 12.0, height - 12.0);
    }
}

fn draw_bars(canvas: &HtmlCanvasElement, points: &[SeriesPoint]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear_canvas(&ctx, width, height);

    if points.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let y_max = series_max(points);

    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&GRID.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&LABEL.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let slot = chart_width / points.len() as f64;
    let bar_width = slot * 0.6;

    ctx.set_fill_style(&ACCENT.into());
    for (i, point) in points.iter().enumerate() {
        let bar_height = (point.value / y_max) * chart_height;
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let x = margin_left + i as f64 * slot + slot / 2.0 - 18.0;
        let _ = ctx.fill_text(&point.label, x, height - 12.0);
    }
}

fn draw_pie(canvas: &HtmlCanvasElement, points: &[SeriesPoint]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear_canvas(&ctx, width, height);

    let total: f64 = points.iter().map(|p| p.value).sum();
    if total <= 0.0 {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 10.0;

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (idx, point) in points.iter().enumerate() {
        let sweep = point.value / total * std::f64::consts::PI * 2.0;
        let color = SLICE_COLORS[idx % SLICE_COLORS.len()];

        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();
        ctx.fill();

        start += sweep;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_max_pads_the_peak() {
        let points = vec![
            SeriesPoint::new("Jan", 4000.0),
            SeriesPoint::new("Feb", 6200.0),
        ];
        assert!((series_max(&points) - 6820.0).abs() < 1e-9);
    }

    #[test]
    fn test_series_max_of_empty_series_is_nonzero() {
        assert_eq!(series_max(&[]), 1.0);
    }

    #[test]
    fn test_series_max_of_flat_zero_series_is_nonzero() {
        let points = vec![SeriesPoint::new("a", 0.0), SeriesPoint::new("b", 0.0)];
        assert_eq!(series_max(&points), 1.0);
    }
}
