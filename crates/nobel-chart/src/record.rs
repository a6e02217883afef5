// File: crates/nobel-chart/src/record.rs
// Summary: One laureate row as deserialized from the CSV.

use serde::Deserialize;

/// Columns other than these three are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaureateRecord {
    pub year: i32,
    pub category: String,
    #[serde(rename = "fullname")]
    pub name: String,
}

impl LaureateRecord {
    pub fn new(year: i32, category: impl Into<String>, name: impl Into<String>) -> Self {
        Self { year, category: category.into(), name: name.into() }
    }
}
