// File: crates/nobel-chart/tests/loader.rs
// Purpose: CSV loading: column mapping, extra columns, and load failures.

use std::path::Path;

use nobel_chart::loader::{load_csv, read_records};
use nobel_chart::{DataError, LaureateRecord};

#[test]
fn reads_required_columns_and_ignores_extras() {
    let csv = "id,year,category,fullname,motivation\n\
               1,1903,physics,Marie Curie,\"radiation, research\"\n\
               2,1911,chemistry,Marie Curie,polonium\n";
    let records = read_records(csv.as_bytes()).expect("parse");
    assert_eq!(
        records,
        vec![
            LaureateRecord::new(1903, "physics", "Marie Curie"),
            LaureateRecord::new(1911, "chemistry", "Marie Curie"),
        ]
    );
}

#[test]
fn missing_column_is_reported_by_name() {
    let csv = "year,category,name\n1903,physics,Marie Curie\n";
    let err = read_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, DataError::MissingColumn("fullname")), "got {err:?}");
}

#[test]
fn non_integer_year_aborts_with_line_number() {
    let csv = "year,category,fullname\n1903,physics,A\nnineteen-ten,peace,B\n";
    match read_records(csv.as_bytes()) {
        Err(DataError::Record { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected a record error, got {other:?}"),
    }
}

#[test]
fn header_only_file_loads_empty() {
    let records = read_records("year,category,fullname\n".as_bytes()).expect("parse");
    assert!(records.is_empty());
}

#[test]
fn missing_file_is_an_open_error() {
    let err = load_csv(Path::new("does/not/exist.csv")).unwrap_err();
    assert!(matches!(err, DataError::Open { .. }));
    assert!(err.to_string().contains("exist.csv"));
}

#[test]
fn loads_sample_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/nobel_sample.csv");
    let records = load_csv(&path).expect("load fixture");
    assert_eq!(records.len(), 11);
    assert_eq!(records[0].name, "Martin L. Perl");
}
