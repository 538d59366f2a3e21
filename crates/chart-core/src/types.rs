// File: crates/chart-core/src/types.rs
// Summary: Canvas geometry and default sizes.

use crate::error::{ChartError, Result};
use crate::geometry::PixelRect;

/// Default canvas width in pixels.
pub const WIDTH: u32 = 1000;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 500;
/// Default padding between the canvas edge and the grid box.
pub const MARGIN: u32 = 70;
/// Default extra padding between the grid box and plotted data.
pub const INSET: u32 = 20;

/// Canvas size and paddings, in pixels.
/// Contract: width/height are non-zero and leave a positive inner plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub inset: u32,
}

impl CanvasGeometry {
    pub fn new(width: u32, height: u32, margin: u32, inset: u32) -> Result<Self> {
        let g = Self { width, height, margin, inset };
        g.validate()?;
        Ok(g)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::invalid(format!(
                "canvas size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        let pad = 2 * (self.margin as u64 + self.inset as u64);
        if pad >= self.width as u64 || pad >= self.height as u64 {
            return Err(ChartError::invalid(format!(
                "margin {} and inset {} leave no drawable area in a {}x{} canvas",
                self.margin, self.inset, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Offset of the data area from the canvas edge (margin + inset).
    pub fn origin(&self) -> f32 {
        (self.margin + self.inset) as f32
    }

    /// Drawable data width (`width - 2*margin - 2*inset`).
    pub fn inner_width(&self) -> f32 {
        self.width.saturating_sub(2 * (self.margin + self.inset)) as f32
    }

    /// Drawable data height (`height - 2*margin - 2*inset`).
    pub fn inner_height(&self) -> f32 {
        self.height.saturating_sub(2 * (self.margin + self.inset)) as f32
    }
}

impl CanvasGeometry {
    /// The box `[margin, size - margin]` on both axes that grid and axes live in.
    pub fn margin_box(&self) -> PixelRect {
        let m = self.margin as f32;
        PixelRect::from_ltrb(m, m, self.width as f32 - m, self.height as f32 - m)
    }
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, margin: MARGIN, inset: INSET }
    }
}
