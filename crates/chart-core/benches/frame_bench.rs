use anyhow::Result;
use chart_core::{Color, LineStyle, PlotEngine, RecordingBackend};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_engine(n: usize) -> PlotEngine {
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let sine: Vec<f64> = xs.iter().map(|x| (x * 0.01).sin() * 10.0).collect();
    let ramp: Vec<f64> = xs.iter().map(|x| x * 0.001).collect();
    let mut engine = PlotEngine::default();
    engine
        .configure_series(
            vec![xs.clone(), xs],
            vec![sine, ramp],
            vec![Color::blue(), Color::red()],
            vec![LineStyle::Solid, LineStyle::Dashed],
        )
        .expect("valid series");
    engine
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("two_series_{n}"), |b| {
            let engine = build_engine(n);
            let mut backend = RecordingBackend::new();
            b.iter(|| -> Result<()> {
                backend.reset();
                engine.render(&mut backend)?;
                black_box(backend.calls.len());
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
