//! Grouped bar chart (one bar per series within each category)

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::geometry::{LinearScale, PlotArea};
use super::{draw_category_labels, draw_value_axis, prepare_canvas, ChartLegend};

/// One coloured series; `values[i]` belongs to category `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub label: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Fraction of each category band left empty on either side.
const BAND_PADDING: f64 = 0.15;

#[component]
pub fn BarChart(categories: Vec<String>, series: Vec<BarSeries>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let legend = series
        .iter()
        .map(|s| (s.label.clone(), s.color))
        .collect::<Vec<_>>();

    Effect::new(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &categories, &series);
        }
    });

    view! {
        <div class="chart">
            <canvas node_ref=canvas_ref width="1200" height="300" class="chart-canvas"></canvas>
            <ChartLegend entries=legend/>
        </div>
    }
}

fn draw_bars(canvas: &HtmlCanvasElement, categories: &[String], series: &[BarSeries]) {
    let Some((ctx, width, height)) = prepare_canvas(canvas) else {
        return;
    };

    let plot = PlotArea::within(width, height);
    let scale = LinearScale::from_zero(series.iter().flat_map(|s| s.values.iter().copied()));
    draw_value_axis(&ctx, &plot, &scale);

    if categories.is_empty() || series.is_empty() {
        return;
    }

    let count = categories.len();
    for index in 0..count {
        let (band_left, band_width) = plot.band(index, count);
        let inner_left = band_left + band_width * BAND_PADDING;
        let bar_width = band_width * (1.0 - 2.0 * BAND_PADDING) / series.len() as f64;

        for (s, bars) in series.iter().enumerate() {
            let Some(value) = bars.values.get(index).copied() else {
                continue;
            };
            let top = scale.y(value, &plot);
            ctx.set_fill_style_str(bars.color);
            ctx.fill_rect(
                inner_left + bar_width * s as f64,
                top,
                (bar_width - 2.0).max(1.0),
                plot.bottom() - top,
            );
        }
    }

    draw_category_labels(&ctx, &plot, categories, |i| {
        let (left, w) = plot.band(i, count);
        left + w / 2.0
    });
}
