// File: crates/chart-render-skia/tests/styles.rs
// Purpose: Per-style pixel checks along a horizontal segment: solid fills, dashed leaves gaps, dotted spaces dots.
// Layout: 240x160 canvas, margin 20, inset 10 -> data box [30, 210] x [30, 130].
// Series (0,1) (1,1) (2,0) maps to (30,30) (120,30) (210,130), so the first
// segment runs along row 30 from x=30 to x=120.

use chart_core::{CanvasGeometry, Color, LineStyle, PlotEngine, RenderOptions};
use chart_render_skia::SkiaBackend;

const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

struct Frame {
    px: Vec<u8>,
    stride: usize,
}

impl Frame {
    fn at(&self, x: usize, y: usize) -> [u8; 4] {
        let i = y * self.stride + x * 4;
        [self.px[i], self.px[i + 1], self.px[i + 2], self.px[i + 3]]
    }

    fn is_blue(&self, x: usize, y: usize) -> bool {
        let p = self.at(x, y);
        p[2] > 200 && p[0] < 80 && p[1] < 80
    }
}

fn render_style(style: LineStyle) -> SkiaBackend {
    let geom = CanvasGeometry::new(240, 160, 20, 10).unwrap();
    // no grid, axes or title: only the series touches the background
    let opts = RenderOptions { grid: None, axes: None, ..RenderOptions::default() };
    let mut engine = PlotEngine::new(geom, opts).unwrap();
    engine
        .configure_series(
            vec![vec![0.0, 1.0, 2.0]],
            vec![vec![1.0, 1.0, 0.0]],
            vec![Color::blue()],
            vec![style],
        )
        .unwrap();
    let mut backend = SkiaBackend::for_geometry(engine.geometry()).unwrap();
    engine.render(&mut backend).expect("render");
    backend
}

fn frame(style: LineStyle) -> Frame {
    let (px, _, _, stride) = render_style(style).to_rgba8().expect("rgba readback");
    Frame { px, stride }
}

#[test]
fn solid_fills_the_whole_segment() {
    let f = frame(LineStyle::Solid);
    for x in [30, 33, 42, 80, 118] {
        assert!(f.is_blue(x, 30), "x={x}: {:?}", f.at(x, 30));
    }
    assert_eq!(f.at(60, 50), BACKGROUND);
}

#[test]
fn dashed_leaves_the_gap_at_background() {
    let f = frame(LineStyle::Dashed);
    // first dash covers [30, 40), gap [40, 45), second dash from 45
    assert!(f.is_blue(35, 30), "{:?}", f.at(35, 30));
    assert_eq!(f.at(42, 30), BACKGROUND);
    assert!(f.is_blue(50, 30), "{:?}", f.at(50, 30));
}

#[test]
fn dotted_shows_background_between_dots() {
    let f = frame(LineStyle::Dotted);
    // dots of radius 2 at x = 30, 37, 44, ...
    assert!(f.is_blue(37, 30), "{:?}", f.at(37, 30));
    assert!(f.is_blue(44, 30), "{:?}", f.at(44, 30));
    assert_eq!(f.at(33, 30), BACKGROUND);
    assert_eq!(f.at(40, 30), BACKGROUND);
}

#[test]
fn rendering_is_repeatable() {
    let a = image::load_from_memory(&render_style(LineStyle::Dashed).encode_png().unwrap()).unwrap().to_rgba8();
    let b = image::load_from_memory(&render_style(LineStyle::Dashed).encode_png().unwrap()).unwrap().to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
