// File: crates/chart-core/src/series.rs
// Summary: Named, colored line series drawn in the order its points are given.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend text.
    pub label: String,
    pub color: skia::Color,
    pub stroke_width: f32,
    /// Points are connected in slice order; callers sort by x when the source
    /// has no inherent order.
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn line(label: impl Into<String>, color: skia::Color, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), color, stroke_width: 2.0, data_xy: data }
    }

    /// True when x values are strictly increasing.
    pub fn is_strictly_ascending(&self) -> bool {
        self.data_xy.windows(2).all(|w| w[0].0 < w[1].0)
    }
}
