// File: crates/nobel-chart/src/render.rs
// Summary: Map reshaped laureate counts and a `ChartConfig` onto a chart_core::Chart and write SVG.

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{Axis, Chart, Series, TickFormat};

use crate::config::ChartConfig;
use crate::reshape::ChartData;

/// One line per present group, in group order, colored by the assignment.
pub fn build_chart(data: &ChartData, cfg: &ChartConfig) -> Chart {
    let mut chart = Chart::new().with_title(cfg.title.clone());

    let (x_min, x_max) = data.x_domain();
    let (y_min, y_max) = data.y_domain();
    chart.x_axis = Axis::new(cfg.x_label.clone(), x_min, x_max).with_format(TickFormat::Integer);
    chart.y_axis = Axis::new(cfg.y_label.clone(), y_min, y_max);

    for (group, counts) in data.counts.iter() {
        let points: Vec<(f64, f64)> = crate::reshape::sorted_series(counts)
            .into_iter()
            .map(|(year, count)| (f64::from(year), f64::from(count)))
            .collect();
        if points.len() < 2 {
            log::debug!("{group} has {} point(s); its line will not be visible", points.len());
        }
        let color = data
            .colors
            .color_for(group)
            .unwrap_or_else(|| chart_core::theme::category10(0));
        chart.add_series(Series::line(group.label(), color, points));
    }
    chart
}

/// Render `data` to an in-memory SVG document.
pub fn render_svg(data: &ChartData, cfg: &ChartConfig) -> Result<Vec<u8>> {
    let opts = cfg.render_options()?;
    build_chart(data, cfg).render_to_svg_bytes(&opts)
}

pub fn write_svg(data: &ChartData, cfg: &ChartConfig, output: &Path) -> Result<()> {
    let opts = cfg.render_options()?;
    build_chart(data, cfg)
        .render_to_svg(&opts, output)
        .with_context(|| format!("rendering chart to {}", output.display()))
}
