use anyhow::Result;
use chart_core::theme::category10;
use chart_core::{Axis, Chart, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_xy(n: usize, lines: usize) -> Chart {
    let mut ch = Chart::new();
    for k in 0..lines {
        let data = (0..n)
            .map(|i| {
                let x = i as f64;
                (x, (x * 0.05 + k as f64).sin() * 10.0 + 12.0)
            })
            .collect();
        ch.add_series(Series::line(format!("s{k}"), category10(k), data));
    }
    ch.x_axis = Axis::new("X", 0.0, (n - 1) as f64);
    ch.y_axis = Axis::new("Y", 0.0, 24.0);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg_bytes");
    for &n in &[120usize, 5_000usize] {
        group.bench_function(format!("xy_{n}x2"), |b| {
            let ch = build_chart_xy(n, 2);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_svg_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_ticks(c: &mut Criterion) {
    c.bench_function("year_axis_ticks", |b| {
        let axis = Axis::new("Year", 1901.0, 2016.0).with_format(chart_core::TickFormat::Integer);
        b.iter(|| black_box(axis.ticks()));
    });
}

criterion_group!(benches, bench_render, bench_ticks);
criterion_main!(benches);
