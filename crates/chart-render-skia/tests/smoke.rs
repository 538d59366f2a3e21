// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end render through Skia: PNG output, RGBA readback, resize.

use chart_core::{CanvasGeometry, Color, LineStyle, PlotEngine, RenderOptions, Theme};
use chart_render_skia::SkiaBackend;

fn engine(width: u32, height: u32) -> PlotEngine {
    let geom = CanvasGeometry::new(width, height, 20, 0).unwrap();
    let opts = RenderOptions { grid: None, axes: None, ..RenderOptions::default() };
    let mut engine = PlotEngine::new(geom, opts).unwrap();
    engine
        .configure_series(
            vec![vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]],
            vec![vec![0.0, 1.0, 0.0], vec![2.0, 1.0, 2.0]],
            vec![Color::blue(), Color::red()],
            vec![LineStyle::Solid, LineStyle::Dotted],
        )
        .unwrap();
    engine
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_smoke_png() {
    let engine = engine(200, 200);
    let mut backend = SkiaBackend::for_geometry(engine.geometry()).expect("surface");
    engine.render(&mut backend).expect("render should succeed");
    assert_eq!(backend.frames(), 1);

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    backend.write_png(&out).expect("write png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = backend.encode_png().expect("encode");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let engine = engine(200, 200);
    let mut backend = SkiaBackend::for_geometry(engine.geometry()).unwrap();
    engine.render(&mut backend).unwrap();

    let (px, w, h, stride) = backend.to_rgba8().expect("rgba readback");
    assert_eq!((w, h), (200, 200));
    assert_eq!(stride, w as usize * 4);
    assert_eq!(px.len(), stride * h as usize);

    // background corner is opaque white (light theme)
    assert_eq!(pixel(&px, stride, 0, 0), [255u8, 255, 255, 255]);
    // solid blue passes exactly through the apex of the peak-down path
    let apex = pixel(&px, stride, 100, 20);
    assert!(apex[2] > 200 && apex[0] < 80, "apex pixel {apex:?}");
    // dotted red starts with a dot at the top-left of the inner box
    let start = pixel(&px, stride, 20, 20);
    assert!(start[0] > 200 && start[2] < 80, "dot pixel {start:?}");
}

#[test]
fn dark_theme_and_resize() {
    let mut engine = engine(200, 200);
    engine
        .set_options(RenderOptions { theme: Theme::dark(), ..RenderOptions::default() })
        .unwrap();
    engine.resize(320, 240).unwrap();

    let mut backend = SkiaBackend::new(200, 200).unwrap();
    backend.resize(320, 240).unwrap();
    assert_eq!(backend.size(), (320, 240));
    engine.render(&mut backend).unwrap();

    let (px, _, _, stride) = backend.to_rgba8().unwrap();
    assert_eq!(&pixel(&px, stride, 2, 2)[..3], &[0u8, 0, 0]);
}

#[test]
fn render_with_centered_title() {
    let mut engine = engine(240, 160);
    engine.set_title("Signal").unwrap();
    let mut backend = SkiaBackend::for_geometry(engine.geometry()).unwrap();
    engine.render(&mut backend).expect("title render");
    assert_eq!(backend.frames(), 1);

    // text stays in the top margin band and leaves the corners untouched
    let (px, _, _, stride) = backend.to_rgba8().unwrap();
    assert_eq!(pixel(&px, stride, 0, 0), [255u8, 255, 255, 255]);
    assert_eq!(pixel(&px, stride, 239, 0), [255u8, 255, 255, 255]);
}
