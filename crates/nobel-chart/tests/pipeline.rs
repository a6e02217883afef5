// File: crates/nobel-chart/tests/pipeline.rs
// Purpose: CSV -> reshape -> chart model -> SVG, end to end.

use std::path::{Path, PathBuf};

use chart_core::theme::category10;
use nobel_chart::render::{build_chart, render_svg};
use nobel_chart::{render_file, ChartConfig, ChartData, DataError, LaureateRecord, StemCategories};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/nobel_sample.csv")
}

fn fixture_data() -> ChartData {
    let records = nobel_chart::loader::load_csv(&fixture()).expect("load");
    ChartData::from_records(&records, &StemCategories::default()).expect("derive")
}

#[test]
fn chart_model_mirrors_reshaped_data() {
    let data = fixture_data();
    assert_eq!(data.year_domain, (1995, 2000));
    assert_eq!(data.max_count, 3);

    let chart = build_chart(&data, &ChartConfig::default());
    assert_eq!(chart.title.as_deref(), Some("Nobel Laureates in STEM vs Non-STEM by Year"));
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (1995.0, 2000.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 4.0));
    assert_eq!(chart.y_axis.label, "Number of Laureates");

    // STEM shows up first in the file, so it takes the first palette color
    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["STEM", "Non-STEM"]);
    assert_eq!(chart.series[0].color, category10(0));
    assert_eq!(chart.series[1].color, category10(1));

    assert_eq!(chart.series[0].data_xy, vec![(1995.0, 2.0), (1996.0, 2.0), (2000.0, 3.0)]);
    assert_eq!(chart.series[1].data_xy, vec![(1995.0, 2.0), (1997.0, 1.0), (1998.0, 1.0)]);
    assert!(chart.series.iter().all(|s| s.is_strictly_ascending()));
}

#[test]
fn year_ticks_are_whole_years() {
    let chart = build_chart(&fixture_data(), &ChartConfig::default());
    let labels: Vec<String> = chart.x_axis.ticks().into_iter().map(|(_, l)| l).collect();
    assert_eq!(labels, vec!["1995", "1996", "1997", "1998", "1999", "2000"]);
}

#[test]
fn renders_svg_document() {
    let svg = render_svg(&fixture_data(), &ChartConfig::default()).expect("render");
    let text = String::from_utf8(svg).expect("utf8");
    assert!(text.contains("<svg"));
    assert!(text.contains("<path"));
}

#[test]
fn render_file_writes_output() {
    let out = PathBuf::from("target/test_out/nobel_sample.svg");
    let _ = std::fs::remove_file(&out);
    let data = render_file(&fixture(), &out, &ChartConfig::default()).expect("pipeline");
    assert_eq!(data.counts.total(), 11);
    assert!(std::fs::metadata(&out).expect("written").len() > 0);
}

#[test]
fn empty_csv_fails_before_writing() {
    let dir = PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).expect("mkdir");
    let input = dir.join("empty_laureates.csv");
    std::fs::write(&input, "year,category,fullname\n").expect("write input");
    let out = dir.join("empty_laureates.svg");
    let _ = std::fs::remove_file(&out);

    let err = render_file(&input, &out, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err.downcast_ref::<DataError>(), Some(DataError::Empty)));
    assert!(!out.exists());
}

#[test]
fn single_group_dataset_has_one_line() {
    let records = vec![LaureateRecord::new(1901, "physics", "W. Röntgen"), LaureateRecord::new(1902, "physics", "H. Lorentz")];
    let data = ChartData::from_records(&records, &StemCategories::default()).expect("derive");
    let chart = build_chart(&data, &ChartConfig::default());
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].label, "STEM");
}
