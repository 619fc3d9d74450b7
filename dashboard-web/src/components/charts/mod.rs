//! Chart Components
//!
//! Allocation pie, value line and grouped bar charts drawn on HTML5 canvas.
//! Layout math lives in [`geometry`]; this module only issues draw calls.

pub mod bar;
pub mod geometry;
pub mod line;
pub mod pie;

pub use bar::{BarChart, BarSeries};
pub use line::LineChart;
pub use pie::PieChart;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::utils::constants::{AXIS_LABEL_COLOR, CHART_BACKGROUND, GRID_COLOR};
use geometry::{axis_label, LinearScale, PlotArea};

/// 2D context of `canvas`, cleared to the chart background.
pub(crate) fn prepare_canvas(canvas: &HtmlCanvasElement) -> Option<(CanvasRenderingContext2d, f64, f64)> {
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style_str(CHART_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    Some((ctx, width, height))
}

/// Horizontal grid lines with value labels on the left.
pub(crate) fn draw_value_axis(ctx: &CanvasRenderingContext2d, plot: &PlotArea, scale: &LinearScale) {
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    ctx.set_font("12px Inter, sans-serif");

    for tick in scale.ticks(4) {
        let y = scale.y(tick, plot);
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(plot.right(), y);
        ctx.stroke();

        ctx.set_fill_style_str(AXIS_LABEL_COLOR);
        let _ = ctx.fill_text(&axis_label(tick), 8.0, y + 4.0);
    }
}

/// Category labels centred under each band.
pub(crate) fn draw_category_labels(
    ctx: &CanvasRenderingContext2d,
    plot: &PlotArea,
    labels: &[String],
    centre_of: impl Fn(usize) -> f64,
) {
    ctx.set_fill_style_str(AXIS_LABEL_COLOR);
    ctx.set_font("12px Inter, sans-serif");
    for (i, label) in labels.iter().enumerate() {
        let width = ctx.measure_text(label).map(|m| m.width()).unwrap_or(0.0);
        let _ = ctx.fill_text(label, centre_of(i) - width / 2.0, plot.bottom() + 20.0);
    }
}

/// Colour swatches under a chart
#[component]
pub fn ChartLegend(entries: Vec<(String, &'static str)>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {entries
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <div class="legend-item">
                            <span class="legend-swatch" style=format!("background-color: {}", color)></span>
                            <span>{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
