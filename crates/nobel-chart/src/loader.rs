// File: crates/nobel-chart/src/loader.rs
// Summary: CSV loading into `LaureateRecord`s; the only I/O wait point of the pipeline.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::DataError;
use crate::record::LaureateRecord;

/// Header names a laureate CSV must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["year", "category", "fullname"];

/// Load every record from the CSV at `path`. Any malformed row aborts the load.
pub fn load_csv(path: &Path) -> Result<Vec<LaureateRecord>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Open { path: path.to_path_buf(), source })?;
    let records = read_records(file)?;
    log::info!("Loaded {} laureate records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse laureate records from any CSV source with a header row.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<LaureateRecord>, DataError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers().map_err(DataError::Header)?;
    log::debug!("CSV headers: {:?}", headers);
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|col| !headers.iter().any(|h| h == **col)) {
        return Err(DataError::MissingColumn(*missing));
    }

    let mut out = Vec::new();
    for result in rdr.deserialize::<LaureateRecord>() {
        let record = result.map_err(|source| DataError::Record {
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?;
        out.push(record);
    }
    Ok(out)
}
