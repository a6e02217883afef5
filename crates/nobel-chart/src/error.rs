// File: crates/nobel-chart/src/error.rs
// Summary: Typed errors for loading/reshaping laureate data and for chart configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error("CSV is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("malformed record at line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Year and count domains are undefined over zero buckets.
    #[error("no laureate records to chart")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("margins {horizontal}x{vertical} leave no plot area in a {width}x{height} chart")]
    NoPlotArea { width: u32, height: u32, horizontal: u32, vertical: u32 },

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}
