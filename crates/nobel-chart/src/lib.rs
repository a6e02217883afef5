// File: crates/nobel-chart/src/lib.rs
// Summary: Nobel laureates line chart: load CSV, reshape into STEM/Non-STEM counts, render SVG.

pub mod cli;
pub mod colors;
pub mod config;
pub mod error;
pub mod group;
pub mod loader;
pub mod record;
pub mod render;
pub mod reshape;

use std::path::Path;

use anyhow::Result;

pub use colors::ColorAssignment;
pub use config::ChartConfig;
pub use error::{ConfigError, DataError};
pub use group::{CategoryGroup, StemCategories};
pub use record::LaureateRecord;
pub use reshape::{sorted_series, ChartData, CountsByGroup, CountsByYear};

/// Full pipeline: load `input`, reshape, and write the chart to `output`.
/// Nothing is written when loading or reshaping fails.
pub fn render_file(input: &Path, output: &Path, cfg: &ChartConfig) -> Result<ChartData> {
    let records = loader::load_csv(input)?;
    let data = ChartData::from_records(&records, &cfg.stem_categories())?;
    render::write_svg(&data, cfg, output)?;
    Ok(data)
}
