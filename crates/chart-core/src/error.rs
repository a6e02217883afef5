// File: crates/chart-core/src/error.rs
// Summary: Typed failures raised while validating a chart before rendering.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("insets {hsum}x{vsum} leave no plot area on a {width}x{height} surface")]
    PlotAreaTooSmall { width: i32, height: i32, hsum: u32, vsum: u32 },

    #[error("axis `{label}` has a non-finite domain [{min}, {max}]")]
    NonFiniteDomain { label: String, min: f64, max: f64 },
}
