// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for chart-core with PNG and RGBA8 readback.

pub mod text;

use anyhow::{anyhow, Result};
use chart_core::{CanvasGeometry, Color, RenderBackend, ScreenPoint};
use skia_safe as skia;

pub use text::TextShaper;

/// Stroke width used for grid, axis and native series lines.
pub const LINE_WIDTH: f32 = 1.0;

#[inline]
fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a(), c.r(), c.g(), c.b())
}

/// Draws chart-core frames onto an off-screen N32 raster surface.
pub struct SkiaBackend {
    surface: skia::Surface,
    text: TextShaper,
    width: i32,
    height: i32,
    frames: usize,
}

impl SkiaBackend {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (w, h) = (i32::try_from(width)?, i32::try_from(height)?);
        let surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        Ok(Self { surface, text: TextShaper::new(), width: w, height: h, frames: 0 })
    }

    /// Surface sized to the canvas described by `geometry`.
    pub fn for_geometry(geometry: &CanvasGeometry) -> Result<Self> {
        Self::new(geometry.width, geometry.height)
    }

    /// Recreate the surface after a window resize; contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (w, h) = (i32::try_from(width)?, i32::try_from(height)?);
        if (w, h) == (self.width, self.height) {
            return Ok(());
        }
        self.surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        self.width = w;
        self.height = h;
        Ok(())
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    /// Frames presented so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Encode the current surface contents as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current surface contents to `path` as PNG, creating parent dirs.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read back unpremultiplied RGBA8 pixels; returns `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(anyhow!("failed to read back surface pixels"));
        }
        Ok((pixels, self.width as u32, self.height as u32, stride))
    }
}

impl RenderBackend for SkiaBackend {
    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia(color));
    }

    fn draw_dot(&mut self, center: ScreenPoint, radius: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        self.surface.canvas().draw_circle((center.x, center.y), radius, &paint);
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(LINE_WIDTH);
        paint.set_color(to_skia(color));
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn draw_text(&mut self, text: &str, anchor: ScreenPoint, size: f32, color: Color) {
        let canvas = self.surface.canvas();
        self.text.draw_centered(canvas, text, anchor.x, anchor.y, size, to_skia(color));
    }

    fn present(&mut self) -> Result<()> {
        self.frames += 1;
        tracing::debug!(frame = self.frames, width = self.width, height = self.height, "frame presented");
        Ok(())
    }
}
