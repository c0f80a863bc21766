use anyhow::Result;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use paper_core::{AxesSpec, FunctionCurve, Length, RenderOptions, SheetSpec};

fn millimetre_sheet() -> SheetSpec {
    SheetSpec::grid(Length::cm(10.0), Length::cm(10.0), 1.0)
}

fn function_sheet(samples: usize) -> SheetSpec {
    SheetSpec { samples, ..SheetSpec::default() }
        .with_axes(AxesSpec::default())
        .curve(FunctionCurve::new("f", |x| (x * 1.3).sin() * 4.0))
        .curve(FunctionCurve::new("g", |x| 0.5 * x * x - 2.0))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &dpi in &[150.0f32, 300.0] {
        group.bench_with_input(BenchmarkId::new("millimetre_10cm", dpi), &dpi, |b, &dpi| {
            let sheet = millimetre_sheet().build().expect("valid sheet");
            let opts = RenderOptions { dpi, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = sheet.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_curves");
    for &n in &[500usize, 50_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let sheet = function_sheet(n).build().expect("valid sheet");
            b.iter(|| black_box(sheet.sample_curves().expect("finite curves")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_sampling);
criterion_main!(benches);
