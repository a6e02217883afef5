// File: crates/nobel-chart/src/cli.rs
// Summary: Command-line surface: argument parsing, config overrides, and the one-shot run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::ChartConfig;

#[derive(Parser, Debug)]
#[command(
    name = "nobel-chart",
    about = "Render Nobel laureate counts per year (STEM vs Non-STEM) as an SVG line chart"
)]
pub struct Cli {
    /// Laureate CSV with `year`, `category` and `fullname` columns
    #[arg(value_name = "FILE", default_value = "nobel_laureates.csv")]
    pub input: PathBuf,

    /// Where to write the SVG
    #[arg(short, long, value_name = "SVG", default_value = "nobel_laureates.svg")]
    pub output: PathBuf,

    /// TOML chart config (camelCase keys, e.g. `marginTop = 50`)
    #[arg(short, long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Outer SVG width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Outer SVG height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Chart title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Color theme (light, dark, solarized-light, solarized-dark, high-contrast-dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Category counted as STEM; repeat to list several. Replaces the default set.
    #[arg(long = "stem-category", value_name = "CATEGORY")]
    pub stem_categories: Vec<String>,

    /// Draw grid lines at tick positions
    #[arg(long)]
    pub grid: bool,
}

impl Cli {
    /// Flags win over config file values.
    pub fn apply_overrides(&self, cfg: &mut ChartConfig) {
        if let Some(w) = self.width {
            cfg.width = w;
        }
        if let Some(h) = self.height {
            cfg.height = h;
        }
        if let Some(t) = &self.title {
            cfg.title = t.clone();
        }
        if let Some(t) = &self.theme {
            cfg.theme = t.clone();
        }
        if !self.stem_categories.is_empty() {
            cfg.stem_categories = self.stem_categories.clone();
        }
        if self.grid {
            cfg.grid = true;
        }
    }

    pub fn resolve_config(&self) -> Result<ChartConfig> {
        let mut cfg = match &self.config {
            Some(path) => ChartConfig::from_toml_file(path)?,
            None => ChartConfig::default(),
        };
        self.apply_overrides(&mut cfg);
        cfg.validate().context("invalid chart configuration")?;
        Ok(cfg)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let cfg = cli.resolve_config()?;
    let data = crate::render_file(&cli.input, &cli.output, &cfg)
        .with_context(|| format!("failed to chart '{}'", cli.input.display()))?;
    log::info!(
        "Wrote {} ({} groups, years {}..={}, max {} per year)",
        cli.output.display(),
        data.counts.len(),
        data.year_domain.0,
        data.year_domain.1,
        data.max_count
    );
    Ok(())
}
