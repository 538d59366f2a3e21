// File: crates/chart-examples/src/bin/csv_lines.rs
// Summary: Loads numeric columns from a CSV (first column = x, every other column = one series) and plots them to PNG.

use anyhow::{bail, Context, Result};
use chart_core::{CanvasGeometry, Color, LineStyle, PlotEngine, PlotSeries, PlotConfiguration, RenderOptions, Theme};
use chart_render_skia::SkiaBackend;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const PALETTE: [Color; 4] = [
    Color::rgb(64, 160, 255),
    Color::rgb(220, 80, 80),
    Color::rgb(40, 200, 120),
    Color::rgb(255, 230, 70),
];
const STYLES: [LineStyle; 3] = [LineStyle::Solid, LineStyle::Dashed, LineStyle::Dotted];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: example-csv <input.csv> [output.png] [theme]");
    };
    let input = PathBuf::from(input);
    let out = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| input.with_extension("png"));
    let theme = args.next().map(|n| chart_core::theme::find(&n)).unwrap_or_else(Theme::dark);

    let series = load_series_csv(&input)
        .with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    tracing::info!(series = series.len(), input = %input.display(), "loaded");

    let options = RenderOptions { theme, ..RenderOptions::default() };
    let mut engine = PlotEngine::new(CanvasGeometry::default(), options)?;
    engine.configure(PlotConfiguration::from_series(series)?);
    if let Some(stem) = input.file_stem().and_then(|s| s.to_str()) {
        engine.set_title(stem)?;
    }

    let mut backend = SkiaBackend::for_geometry(engine.geometry())?;
    engine.render(&mut backend)?;
    backend.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Read a headed CSV; the first column is shared x, each further column one series.
fn load_series_csv(path: &Path) -> Result<Vec<PlotSeries>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        bail!("need an x column and at least one y column, found {} columns", headers.len());
    }

    let mut xs = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len() - 1];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Result<f64> {
            let raw = rec.get(i).unwrap_or("").trim();
            raw.parse::<f64>()
                .with_context(|| format!("row {}: column '{}' is not a number: '{raw}'", row + 2, &headers[i]))
        };
        xs.push(parse(0)?);
        for (c, col) in columns.iter_mut().enumerate() {
            col.push(parse(c + 1)?);
        }
    }

    columns
        .into_iter()
        .enumerate()
        .map(|(c, ys)| {
            PlotSeries::new(
                &headers[c + 1],
                xs.clone(),
                ys,
                PALETTE[c % PALETTE.len()],
                STYLES[c % STYLES.len()],
            )
            .map_err(anyhow::Error::from)
        })
        .collect()
}
