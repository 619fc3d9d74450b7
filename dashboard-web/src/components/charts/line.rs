//! Portfolio value line chart

use leptos::prelude::*;
use shared::dto::PerformancePoint;
use web_sys::HtmlCanvasElement;

use super::geometry::{LinearScale, PlotArea};
use super::{draw_category_labels, draw_value_axis, prepare_canvas, ChartLegend};
use crate::utils::constants::PRIMARY_COLOR;

#[component]
pub fn LineChart(
    points: Vec<PerformancePoint>,
    #[prop(into)] series_label: String,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_line(&canvas, &points);
        }
    });

    view! {
        <div class="chart">
            <canvas node_ref=canvas_ref width="1200" height="300" class="chart-canvas"></canvas>
            <ChartLegend entries=vec![(series_label, PRIMARY_COLOR)]/>
        </div>
    }
}

fn draw_line(canvas: &HtmlCanvasElement, points: &[PerformancePoint]) {
    let Some((ctx, width, height)) = prepare_canvas(canvas) else {
        return;
    };

    let plot = PlotArea::within(width, height);
    let scale = LinearScale::padded(points.iter().map(|p| p.value));
    draw_value_axis(&ctx, &plot, &scale);

    if points.is_empty() {
        return;
    }

    let count = points.len();
    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (plot.point_x(i, count), scale.y(p.value, &plot)))
        .collect();

    ctx.set_stroke_style_str(PRIMARY_COLOR);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (x, y)) in coords.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style_str(PRIMARY_COLOR);
    for (x, y) in &coords {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
    draw_category_labels(&ctx, &plot, &labels, |i| plot.point_x(i, count));
}
