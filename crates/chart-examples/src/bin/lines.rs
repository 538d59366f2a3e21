// File: crates/chart-examples/src/bin/lines.rs
// Summary: Renders three styled series (solid peak-down, dotted peak-up, dashed sine) to PNG.

use anyhow::{Context, Result};
use chart_core::{CanvasGeometry, Color, LineStyle, PlotEngine, RenderOptions};
use chart_render_skia::SkiaBackend;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "target/out/example_lines.png".to_string());

    let geometry = CanvasGeometry::new(960, 480, 70, 20)?;
    let mut engine = PlotEngine::new(geometry, RenderOptions::default())?;
    engine.set_title("As Chartify!")?;

    let xs: Vec<f64> = (0..=20).map(|i| i as f64 * 0.5).collect();
    engine.configure_series(
        vec![vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0], xs.clone()],
        vec![
            vec![0.0, 1.0, 0.0],
            vec![2.0, 1.0, 2.0],
            xs.iter().map(|x| (x * 0.8).sin()).collect(),
        ],
        vec![Color::blue(), Color::red(), Color::rgb(178, 173, 23)],
        vec![LineStyle::Solid, LineStyle::Dotted, LineStyle::Dashed],
    )?;

    let mut backend = SkiaBackend::for_geometry(engine.geometry())?;
    engine.render(&mut backend)?;
    backend
        .write_png(&out)
        .with_context(|| format!("failed to write '{out}'"))?;
    tracing::info!(path = %out, "wrote plot");
    Ok(())
}
