// File: crates/nobel-chart/src/main.rs
// Summary: Binary entry point; renders the laureates CSV to an SVG line chart.

use anyhow::Result;
use clap::Parser;
use nobel_chart::cli::{self, Cli};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    cli::run(Cli::parse())
}
