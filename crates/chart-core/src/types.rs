// File: crates/chart-core/src/types.rs
// Summary: Shared layout types and constants (surface size, margins, plot rect).

use crate::error::ChartError;

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 30, 50, 60)
    }
}

/// Inner plot rectangle: origin in surface pixels plus its size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotRect {
    /// Carve the plot area out of a `width` x `height` surface.
    /// Fails when the insets leave no positive area.
    pub fn from_surface(width: i32, height: i32, insets: &Insets) -> Result<Self, ChartError> {
        let inner_w = width as i64 - insets.hsum() as i64;
        let inner_h = height as i64 - insets.vsum() as i64;
        if inner_w <= 0 || inner_h <= 0 {
            return Err(ChartError::PlotAreaTooSmall {
                width,
                height,
                hsum: insets.hsum(),
                vsum: insets.vsum(),
            });
        }
        Ok(Self {
            left: insets.left as f32,
            top: insets.top as f32,
            width: inner_w as f32,
            height: inner_h as f32,
        })
    }
}
