//! Chart layout math, kept free of canvas calls so it can be tested natively.

use std::f64::consts::{FRAC_PI_2, PI};

/// Drawing area inside the canvas margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub const MARGIN_LEFT: f64 = 64.0;
    pub const MARGIN_RIGHT: f64 = 16.0;
    pub const MARGIN_TOP: f64 = 16.0;
    pub const MARGIN_BOTTOM: f64 = 32.0;

    pub fn within(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            left: Self::MARGIN_LEFT,
            top: Self::MARGIN_TOP,
            width: (canvas_width - Self::MARGIN_LEFT - Self::MARGIN_RIGHT).max(0.0),
            height: (canvas_height - Self::MARGIN_TOP - Self::MARGIN_BOTTOM).max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Left edge and width of band `index` out of `count` equal bands.
    pub fn band(&self, index: usize, count: usize) -> (f64, f64) {
        if count == 0 {
            return (self.left, 0.0);
        }
        let band_width = self.width / count as f64;
        (self.left + band_width * index as f64, band_width)
    }

    /// Centre x of point `index` out of `count` points spread edge to edge.
    pub fn point_x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * index as f64 / (count - 1) as f64
    }
}

/// Linear value axis mapped onto the plot's vertical extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
}

impl LinearScale {
    /// Axis for bar charts: starts at zero, headroom above the largest value.
    pub fn from_zero(values: impl IntoIterator<Item = f64>) -> Self {
        let max = values.into_iter().fold(0.0_f64, f64::max);
        let max = if max > 0.0 { max * 1.1 } else { 1.0 };
        Self { min: 0.0, max }
    }

    /// Axis for line charts: 10% padding around the data range.
    pub fn padded(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if !min.is_finite() || !max.is_finite() {
            return Self { min: 0.0, max: 1.0 };
        }

        let range = max - min;
        let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
        Self {
            min: min - padding,
            max: max + padding,
        }
    }

    pub fn y(&self, value: f64, plot: &PlotArea) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return plot.bottom();
        }
        plot.top + (self.max - value) / span * plot.height
    }

    /// `count + 1` evenly spaced tick values from max down to min.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        (0..=count)
            .map(|i| self.max - (self.max - self.min) * i as f64 / count as f64)
            .collect()
    }
}

/// Start and end angles (radians) of each pie slice, clockwise from 12 o'clock.
/// Non-positive values get empty slices.
pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = -FRAC_PI_2;

    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 && *value > 0.0 {
                value / total * 2.0 * PI
            } else {
                0.0
            };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Point on a circle, used to anchor slice labels.
pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Compact axis label: `21.9k`, `950`.
pub fn axis_label(value: f64) -> String {
    if value.abs() >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_plot_area_margins() {
        let plot = PlotArea::within(600.0, 300.0);
        assert_eq!(plot.left, 64.0);
        assert_eq!(plot.width, 520.0);
        assert_eq!(plot.height, 252.0);
        assert_eq!(plot.bottom(), 268.0);
        assert_eq!(plot.right(), 584.0);
    }

    #[test]
    fn test_bands_cover_width() {
        let plot = PlotArea::within(600.0, 300.0);
        let (x0, w) = plot.band(0, 4);
        let (x3, w3) = plot.band(3, 4);
        assert_eq!(x0, plot.left);
        assert!((x3 + w3 - plot.right()).abs() < EPS);
        assert_eq!(w, w3);
        assert_eq!(plot.band(0, 0).1, 0.0);
    }

    #[test]
    fn test_point_x_spreads_edge_to_edge() {
        let plot = PlotArea::within(600.0, 300.0);
        assert_eq!(plot.point_x(0, 6), plot.left);
        assert!((plot.point_x(5, 6) - plot.right()).abs() < EPS);
        assert_eq!(plot.point_x(0, 1), plot.left + plot.width / 2.0);
    }

    #[test]
    fn test_scale_from_zero() {
        let scale = LinearScale::from_zero([5_200.0, 7_200.0, 3_400.0]);
        assert_eq!(scale.min, 0.0);
        assert!((scale.max - 7_920.0).abs() < EPS);

        let empty = LinearScale::from_zero(std::iter::empty());
        assert_eq!(empty.max, 1.0);
    }

    #[test]
    fn test_scale_maps_extremes_to_plot_edges() {
        let plot = PlotArea::within(600.0, 300.0);
        let scale = LinearScale::padded([18_500.0, 21_875.0]);
        assert!(scale.min < 18_500.0 && scale.max > 21_875.0);
        assert!((scale.y(scale.max, &plot) - plot.top).abs() < EPS);
        assert!((scale.y(scale.min, &plot) - plot.bottom()).abs() < EPS);
        assert!(scale.y(21_875.0, &plot) < scale.y(18_500.0, &plot));
    }

    #[test]
    fn test_flat_series_gets_padding() {
        let scale = LinearScale::padded([10.0, 10.0]);
        assert_eq!(scale, LinearScale { min: 9.0, max: 11.0 });
    }

    #[test]
    fn test_ticks() {
        let scale = LinearScale { min: 0.0, max: 100.0 };
        assert_eq!(scale.ticks(4), vec![100.0, 75.0, 50.0, 25.0, 0.0]);
    }

    #[test]
    fn test_pie_angles_close_the_circle() {
        let angles = pie_angles(&[4_250.0, 10_000.0, 5_500.0, 2_125.0]);
        assert_eq!(angles.len(), 4);
        assert!((angles[0].0 + FRAC_PI_2).abs() < EPS);
        for pair in angles.windows(2) {
            assert!((pair[0].1 - pair[1].0).abs() < EPS);
        }
        assert!((angles[3].1 - (2.0 * PI - FRAC_PI_2)).abs() < EPS);
    }

    #[test]
    fn test_pie_angles_skip_non_positive() {
        let angles = pie_angles(&[0.0, 1.0, -3.0]);
        assert_eq!(angles[0].0, angles[0].1);
        assert!((angles[1].1 - angles[1].0 - 2.0 * PI).abs() < EPS);
        assert_eq!(angles[2].0, angles[2].1);
        assert!(pie_angles(&[0.0]).iter().all(|(a, b)| a == b));
    }

    #[test]
    fn test_axis_label() {
        assert_eq!(axis_label(21_875.0), "21.9k");
        assert_eq!(axis_label(950.0), "950");
    }
}
