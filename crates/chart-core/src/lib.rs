// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and SVG rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod types;
pub mod scale;
pub mod theme;
pub mod text;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::{Axis, TickFormat};
pub use scale::LinearScale;
pub use theme::Theme;
pub use text::{Anchor, TextShaper};
pub use types::{Insets, PlotRect};
pub use error::ChartError;
pub use skia_safe::Color;
