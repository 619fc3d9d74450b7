//! Allocation pie chart

use leptos::prelude::*;
use shared::dto::AllocationSlice;
use shared::error::AppError;
use web_sys::HtmlCanvasElement;

use super::geometry::{pie_angles, polar};
use super::{prepare_canvas, ChartLegend};
use crate::utils::constants::SERIES_COLORS;

#[component]
pub fn PieChart(slices: Vec<AllocationSlice>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let total: f64 = slices.iter().map(|s| s.value).sum();
    let legend = slices
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name.clone(), SERIES_COLORS[i % SERIES_COLORS.len()]))
        .collect::<Vec<_>>();

    let chart = if total > 0.0 {
        Effect::new(move |_| {
            if let Some(canvas) = canvas_ref.get() {
                draw_pie(&canvas, &slices);
            }
        });
        Ok(view! {
            <canvas node_ref=canvas_ref width="600" height="300" class="chart-canvas"></canvas>
            <ChartLegend entries=legend/>
        })
    } else {
        Err(AppError::Render("allocation chart has no positive values".to_string()))
    };

    view! { <div class="chart">{chart}</div> }
}

fn draw_pie(canvas: &HtmlCanvasElement, slices: &[AllocationSlice]) {
    let Some((ctx, width, height)) = prepare_canvas(canvas) else {
        return;
    };

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (height / 2.0 - 40.0).max(10.0);

    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let angles = pie_angles(&values);

    for (i, (start, end)) in angles.iter().enumerate() {
        if start == end {
            continue;
        }
        ctx.set_fill_style_str(SERIES_COLORS[i % SERIES_COLORS.len()]);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, *start, *end);
        ctx.close_path();
        ctx.fill();
    }

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("13px Inter, sans-serif");
    for (slice, (start, end)) in slices.iter().zip(&angles) {
        if start == end {
            continue;
        }
        let label = format!("{} {}%", slice.name, slice.percentage);
        let (x, y) = polar(cx, cy, radius + 18.0, (start + end) / 2.0);
        let text_width = ctx.measure_text(&label).map(|m| m.width()).unwrap_or(0.0);
        let x = if x < cx { x - text_width } else { x };
        let _ = ctx.fill_text(&label, x, y + 4.0);
    }
}
