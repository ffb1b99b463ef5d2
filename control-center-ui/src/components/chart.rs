//! Chart Components
//!
//! Trend (line, area, bar) and share (pie) charts drawn on HTML5 Canvas.

use std::f64::consts::PI;

use control_center::format;
use control_center::primitives::{ShareSlice, ValueScale};
use control_center::{ChartKind, ShareChart, TrendChart};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Series colors, assigned in series order
const SERIES_COLORS: [&str; 5] = ["#8884d8", "#82ca9d", "#ffc658", "#8dd1e1", "#a4de6c"];

const AXIS_COLOR: &str = "#9ca3af";
const GRID_COLOR: &str = "#e5e7eb";

fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Multi-series chart over ordered categories
#[component]
pub fn TrendChartView(chart: TrendChart) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let names: Vec<String> = chart.series().iter().map(|s| s.name.clone()).collect();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_trend(&canvas, &chart);
        }
    });

    view! {
        <div class="relative">
            <canvas node_ref=canvas_ref width="800" height="320" class="w-full h-64" />
            <Legend names=names />
        </div>
    }
}

/// Pie chart of category shares
#[component]
pub fn ShareChartView(chart: ShareChart) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let names: Vec<String> = chart.shares().iter().map(|s| s.name.clone()).collect();
    let slices = chart.slices();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_share(&canvas, &slices);
        }
    });

    view! {
        <div class="relative">
            <canvas node_ref=canvas_ref width="400" height="320" class="w-full h-64" />
            <Legend names=names />
        </div>
    }
}

/// Series names with their colors
#[component]
fn Legend(names: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-2">
            {names
                .into_iter()
                .enumerate()
                .map(|(idx, name)| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", series_color(idx))
                        />
                        <span class="text-xs text-[#555]">{name}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

fn tick_label(value: f64, scale: &ValueScale) -> String {
    if scale.max - scale.min >= 10.0 {
        format::thousands(value.round())
    } else {
        format!("{:.2}", value)
    }
}

/// Draw a trend chart on canvas
fn draw_trend(canvas: &HtmlCanvasElement, chart: &TrendChart) {
    let Some(ctx) = context_2d(canvas) else {
        tracing::warn!("Canvas 2d context unavailable");
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    if chart.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    let scale = chart.scale();

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("left");
    for tick in scale.ticks(5) {
        let y = margin_top + scale.project(tick, chart_height);
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&AXIS_COLOR.into());
        let _ = ctx.fill_text(&tick_label(tick, &scale), 5.0, y + 4.0);
    }

    // One band per category, labels centered under it
    let categories = chart.categories();
    let band = chart_width / categories.len() as f64;
    let center = |i: usize| margin_left + band * (i as f64 + 0.5);

    ctx.set_fill_style(&AXIS_COLOR.into());
    ctx.set_text_align("center");
    for (i, category) in categories.iter().enumerate() {
        let _ = ctx.fill_text(category, center(i), height - 15.0);
    }

    let baseline = margin_top + scale.project(scale.min.max(0.0), chart_height);
    let series_count = chart.series().len();

    for s in 0..series_count {
        let color = series_color(s);
        let points: Vec<(f64, f64)> = chart
            .values(s)
            .into_iter()
            .enumerate()
            .map(|(i, v)| (center(i), margin_top + scale.project(v, chart_height)))
            .collect();

        match chart.kind() {
            ChartKind::Bar => {
                let bar_width = band * 0.8 / series_count as f64;
                ctx.set_fill_style(&color.into());
                for (i, &(_, y)) in points.iter().enumerate() {
                    let x = margin_left + band * i as f64 + band * 0.1 + bar_width * s as f64;
                    let (top, bottom) = (y.min(baseline), y.max(baseline));
                    ctx.fill_rect(x, top, bar_width, bottom - top);
                }
            }
            ChartKind::Line | ChartKind::Area => {
                if chart.kind() == ChartKind::Area {
                    if let (Some(first), Some(last)) = (points.first(), points.last()) {
                        ctx.set_fill_style(&color.into());
                        ctx.set_global_alpha(0.3);
                        ctx.begin_path();
                        ctx.move_to(first.0, baseline);
                        for &(x, y) in &points {
                            ctx.line_to(x, y);
                        }
                        ctx.line_to(last.0, baseline);
                        ctx.close_path();
                        ctx.fill();
                        ctx.set_global_alpha(1.0);
                    }
                }

                ctx.set_stroke_style(&color.into());
                ctx.set_line_width(2.0);
                ctx.begin_path();
                for (i, &(x, y)) in points.iter().enumerate() {
                    if i == 0 {
                        ctx.move_to(x, y);
                    } else {
                        ctx.line_to(x, y);
                    }
                }
                ctx.stroke();

                // Draw points
                ctx.set_fill_style(&color.into());
                for &(x, y) in &points {
                    ctx.begin_path();
                    let _ = ctx.arc(x, y, 3.0, 0.0, PI * 2.0);
                    ctx.fill();
                }
            }
        }
    }
}

/// Draw a pie chart, slices clockwise from twelve o'clock
fn draw_share(canvas: &HtmlCanvasElement, slices: &[ShareSlice]) {
    let Some(ctx) = context_2d(canvas) else {
        tracing::warn!("Canvas 2d context unavailable");
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0 - 20.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    if slices.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", cx - 30.0, cy);
        return;
    }

    for (idx, slice) in slices.iter().enumerate() {
        ctx.set_fill_style(&series_color(idx).into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, slice.start_angle, slice.start_angle + slice.sweep);
        ctx.close_path();
        ctx.fill();
    }

    // Percent labels at two thirds of the radius
    ctx.set_fill_style(&"#111".into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for slice in slices.iter().filter(|s| s.fraction >= 0.04) {
        let mid = slice.start_angle + slice.sweep / 2.0;
        let x = cx + mid.cos() * radius * 0.66;
        let y = cy + mid.sin() * radius * 0.66;
        let _ = ctx.fill_text(&format!("{:.0}%", slice.fraction * 100.0), x, y + 4.0);
    }
}
