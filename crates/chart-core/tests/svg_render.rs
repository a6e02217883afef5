// File: crates/chart-core/tests/svg_render.rs
// Purpose: End-to-end SVG rendering: document shape, series colors, label toggling, layout errors.

use chart_core::theme::category10;
use chart_core::{Axis, Chart, ChartError, Insets, RenderOptions, Series};

fn two_line_chart() -> Chart {
    let mut chart = Chart::new().with_title("Two lines");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::line("a", category10(0), vec![(0.0, 0.0), (1.0, 2.0), (4.0, 3.0)]));
    chart.add_series(Series::line("b", category10(1), vec![(0.0, 1.0), (2.0, 1.5), (3.0, 3.5)]));
    chart
}

// The SVG device writes colors as hex or rgb() depending on the Skia release.
fn mentions_color(svg: &str, hex: &str, rgb: &str) -> bool {
    let lower = svg.to_ascii_lowercase();
    lower.contains(hex) || lower.contains(rgb)
}

#[test]
fn render_smoke_svg() {
    let chart = two_line_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");

    chart.render_to_svg(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");

    let svg = chart.render_to_svg_string(&opts).expect("render string");
    assert!(svg.contains("<svg"), "should be an SVG document");
    assert!(svg.contains("<path"), "series and axes are paths");
}

#[test]
fn series_strokes_use_their_colors() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let svg = two_line_chart().render_to_svg_string(&opts).expect("render");
    assert!(mentions_color(&svg, "1f77b4", "rgb(31,119,180)"));
    assert!(mentions_color(&svg, "ff7f0e", "rgb(255,127,14)"));
}

#[test]
fn labels_can_be_switched_off() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let svg = two_line_chart().render_to_svg_string(&opts).expect("render");
    assert!(!svg.contains("<text"), "no text expected with draw_labels = false");
}

#[test]
fn grid_adds_output() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let plain = two_line_chart().render_to_svg_bytes(&opts).expect("render");
    opts.draw_grid = true;
    let gridded = two_line_chart().render_to_svg_bytes(&opts).expect("render");
    assert!(gridded.len() > plain.len());
}

#[test]
fn single_point_series_renders_without_error() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 1995.0, 1995.0);
    chart.y_axis = Axis::new("Y", 0.0, 2.0);
    chart.add_series(Series::line("solo", category10(0), vec![(1995.0, 1.0)]));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    assert!(chart.render_to_svg_bytes(&opts).is_ok());
}

#[test]
fn oversized_insets_are_rejected() {
    let chart = two_line_chart();
    let mut opts = RenderOptions::default();
    opts.width = 100;
    opts.insets = Insets::new(70, 30, 50, 60);

    assert_eq!(
        chart.validate(&opts),
        Err(ChartError::PlotAreaTooSmall { width: 100, height: 400, hsum: 100, vsum: 110 })
    );
    let err = chart.render_to_svg_bytes(&opts).unwrap_err();
    assert!(err.downcast_ref::<ChartError>().is_some());
}
