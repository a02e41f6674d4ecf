// ============================================================
// Layer 3 - Chart Description
// ============================================================
// A line chart described as plain data: title, axis labels
// and named series of (x, y) points. The visualizer builds
// these from the results table, and a ChartRenderer turns
// them into pixels. Keeping the description separate from
// the drawing means chart content can be checked in tests
// without a display or fonts.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label:  String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), points }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title:   String,
    pub x_label: String,
    pub y_label: String,
    pub series:  Vec<Series>,
}

impl ChartSpec {
    pub fn new(
        title:   impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title:   title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series:  Vec::new(),
        }
    }

    /// Builder-style: append a series
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Axis ranges covering every point, padded by 5% on y.
    ///
    /// Degenerate ranges (no points, or a single x/y value)
    /// are widened so the plotting backend always gets a
    /// non-empty interval.
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let points = self.series.iter().flat_map(|s| s.points.iter());

        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in points.filter(|(x, y)| x.is_finite() && y.is_finite()) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        if !x_min.is_finite() {
            return (0.0..1.0, 0.0..1.0);
        }

        if x_max <= x_min {
            x_min -= 0.5;
            x_max += 0.5;
        }
        let pad = if y_max > y_min { (y_max - y_min) * 0.05 } else { 0.5 };

        (x_min..x_max, (y_min - pad)..(y_max + pad))
    }
}
