// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless SVG rendering pipeline using Skia's SVG canvas.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::axis::Axis;
use crate::error::ChartError;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};

/// Tick mark length, in pixels.
const TICK_SIZE: f32 = 6.0;
/// Gap between a tick mark and its label.
const TICK_PADDING: f32 = 3.0;
/// Legend swatch edge and row pitch.
const SWATCH: f32 = 18.0;
const LEGEND_ROW: f32 = 20.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels, tick labels and legend text. Off for
    /// font-independent output.
    pub draw_labels: bool,
    pub draw_legend: bool,
    pub draw_grid: bool,
    pub tick_font_size: f32,
    pub label_font_size: f32,
    pub title_font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            draw_legend: true,
            draw_grid: false,
            tick_font_size: 10.0,
            label_font_size: 12.0,
            title_font_size: 16.0,
        }
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Render to an in-memory SVG document.
    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let plot = PlotRect::from_surface(opts.width, opts.height, &opts.insets)?;
        self.x_axis.validate()?;
        self.y_axis.validate()?;

        let bounds = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
        let canvas = skia::svg::Canvas::new(bounds, None);
        canvas.clear(opts.theme.background);

        let xs = self.x_axis.scale((0.0, plot.width));
        let ys = self.y_axis.scale((plot.height, 0.0));
        let x_ticks = self.x_axis.ticks();
        let y_ticks = self.y_axis.ticks();
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        // Everything below is in plot coordinates.
        canvas.save();
        canvas.translate((plot.left, plot.top));

        if opts.draw_grid {
            draw_grid(&canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, &opts.theme);
        }
        for s in &self.series {
            draw_line_series(&canvas, &xs, &ys, s);
        }
        draw_x_axis(&canvas, &plot, &xs, &x_ticks, opts, shaper.as_ref());
        draw_y_axis(&canvas, &plot, &ys, &y_ticks, opts, shaper.as_ref());
        if let Some(shaper) = &shaper {
            draw_titles(&canvas, &plot, self, opts, shaper);
        }
        if opts.draw_legend {
            draw_legend(&canvas, &plot, &self.series, opts, shaper.as_ref());
        }

        canvas.restore();
        let data = canvas.end();
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> Result<String> {
        let bytes = self.render_to_svg_bytes(opts)?;
        String::from_utf8(bytes).context("SVG output is not valid UTF-8")
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_svg_path.as_ref();
        let bytes = self.render_to_svg_bytes(opts)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Checks layout and axes without producing output.
    pub fn validate(&self, opts: &RenderOptions) -> Result<(), ChartError> {
        PlotRect::from_surface(opts.width, opts.height, &opts.insets)?;
        self.x_axis.validate()?;
        self.y_axis.validate()
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let paint = stroke_paint(theme.grid, 1.0);
    for (v, _) in x_ticks {
        let x = xs.to_px(*v);
        canvas.draw_line((x, 0.0), (x, plot.height), &paint);
    }
    for (v, _) in y_ticks {
        let y = ys.to_px(*v);
        canvas.draw_line((0.0, y), (plot.width, y), &paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((xs.to_px(x0), ys.to_px(y0)));

    for &(x, y) in data.iter().skip(1) {
        path.line_to((xs.to_px(x), ys.to_px(y)));
    }

    let stroke = stroke_paint(series.color, series.stroke_width);
    canvas.draw_path(&path, &stroke);
}

fn draw_x_axis(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    xs: &LinearScale,
    ticks: &[(f64, String)],
    opts: &RenderOptions,
    shaper: Option<&TextShaper>,
) {
    let paint = stroke_paint(opts.theme.axis_line, 1.0);
    let h = plot.height;

    // domain line with outer ticks at both ends
    canvas.draw_line((0.0, h), (plot.width, h), &paint);
    canvas.draw_line((0.0, h), (0.0, h + TICK_SIZE), &paint);
    canvas.draw_line((plot.width, h), (plot.width, h + TICK_SIZE), &paint);

    let size = opts.tick_font_size;
    for (v, label) in ticks {
        let x = xs.to_px(*v);
        canvas.draw_line((x, h), (x, h + TICK_SIZE), &paint);
        if let Some(shaper) = shaper {
            let baseline = h + TICK_SIZE + TICK_PADDING + size * 0.71;
            shaper.draw(canvas, label, x, baseline, size, opts.theme.tick, Anchor::Middle, true);
        }
    }
}

fn draw_y_axis(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    ys: &LinearScale,
    ticks: &[(f64, String)],
    opts: &RenderOptions,
    shaper: Option<&TextShaper>,
) {
    let paint = stroke_paint(opts.theme.axis_line, 1.0);
    let h = plot.height;

    canvas.draw_line((0.0, 0.0), (0.0, h), &paint);
    canvas.draw_line((-TICK_SIZE, 0.0), (0.0, 0.0), &paint);
    canvas.draw_line((-TICK_SIZE, h), (0.0, h), &paint);

    let size = opts.tick_font_size;
    for (v, label) in ticks {
        let y = ys.to_px(*v);
        canvas.draw_line((-TICK_SIZE, y), (0.0, y), &paint);
        if let Some(shaper) = shaper {
            let x = -(TICK_SIZE + TICK_PADDING);
            shaper.draw(canvas, label, x, y + size * 0.32, size, opts.theme.tick, Anchor::End, true);
        }
    }
}

fn draw_titles(canvas: &skia::Canvas, plot: &PlotRect, chart: &Chart, opts: &RenderOptions, shaper: &TextShaper) {
    let theme = &opts.theme;
    let mid_x = plot.width * 0.5;

    if let Some(title) = &chart.title {
        shaper.draw(canvas, title, mid_x, -20.0, opts.title_font_size, theme.title, Anchor::Middle, false);
    }
    if !chart.x_axis.label.is_empty() {
        let y = plot.height + 40.0;
        shaper.draw(canvas, &chart.x_axis.label, mid_x, y, opts.label_font_size, theme.axis_label, Anchor::Middle, false);
    }
    if !chart.y_axis.label.is_empty() {
        // rotated frame: x runs bottom-to-top along the left edge
        canvas.save();
        canvas.rotate(-90.0, None);
        shaper.draw(
            canvas,
            &chart.y_axis.label,
            -plot.height * 0.5,
            -50.0,
            opts.label_font_size,
            theme.axis_label,
            Anchor::Middle,
            false,
        );
        canvas.restore();
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    series: &[Series],
    opts: &RenderOptions,
    shaper: Option<&TextShaper>,
) {
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Fill);

    let size = opts.label_font_size;
    for (i, s) in series.iter().enumerate() {
        let top = i as f32 * LEGEND_ROW;
        swatch.set_color(s.color);
        let rect = skia::Rect::from_xywh(plot.width - SWATCH, top, SWATCH, SWATCH);
        canvas.draw_rect(rect, &swatch);
        if let Some(shaper) = shaper {
            let baseline = top + SWATCH * 0.5 + size * 0.35;
            shaper.draw(canvas, &s.label, plot.width - SWATCH - 6.0, baseline, size, opts.theme.legend_text, Anchor::End, false);
        }
    }
}
