// File: crates/chart-core/src/grid.rs
// Summary: Gridline and axis-line layout from canvas geometry.

use crate::error::{ChartError, Result};
use crate::geometry::{clamp, ScreenSegment};
use crate::scale::CoordinateMapper;
use crate::types::CanvasGeometry;

/// Number of divisions per axis in [`GridMode::Divisions`].
pub const GRID_DIVISIONS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GridMode {
    /// A line every `n` pixels from 0 to the canvas edge, spanning the full canvas.
    Period(u32),
    /// `GRID_DIVISIONS` equal divisions of the margin box.
    #[default]
    Divisions,
}

/// Where the two axis lines go. One policy applies to a whole redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisPlacement {
    /// Through the canvas center, edge to edge.
    #[default]
    Midline,
    /// Through the first series' mapped data origin, clamped into the margin box.
    DataOrigin,
    /// Along the left and bottom edges of the margin box.
    Frame,
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Vertical lines first (left to right), then horizontal lines (top to bottom).
pub fn grid_lines(geometry: &CanvasGeometry, mode: GridMode) -> Result<Vec<ScreenSegment>> {
    let w = geometry.width as f32;
    let h = geometry.height as f32;
    let mut lines = Vec::new();
    match mode {
        GridMode::Period(0) => {
            return Err(ChartError::invalid("grid period must be at least 1 pixel"));
        }
        GridMode::Period(n) => {
            for x in (0..geometry.width).step_by(n as usize) {
                lines.push(ScreenSegment::from_xy(x as f32, 0.0, x as f32, h));
            }
            for y in (0..geometry.height).step_by(n as usize) {
                lines.push(ScreenSegment::from_xy(0.0, y as f32, w, y as f32));
            }
        }
        GridMode::Divisions => {
            let b = geometry.margin_box();
            for x in linspace(b.left as f64, b.right as f64, GRID_DIVISIONS + 1) {
                let x = x as f32;
                lines.push(ScreenSegment::from_xy(x, b.top, x, b.bottom));
            }
            for y in linspace(b.top as f64, b.bottom as f64, GRID_DIVISIONS + 1) {
                let y = y as f32;
                lines.push(ScreenSegment::from_xy(b.left, y, b.right, y));
            }
        }
    }
    Ok(lines)
}

/// `[x_axis, y_axis]`: the horizontal line first, then the vertical one.
/// `origin` is required for [`AxisPlacement::DataOrigin`] and ignored otherwise.
pub fn axis_lines(
    geometry: &CanvasGeometry,
    placement: AxisPlacement,
    origin: Option<&CoordinateMapper>,
) -> Result<[ScreenSegment; 2]> {
    let w = geometry.width as f32;
    let h = geometry.height as f32;
    let b = geometry.margin_box();
    match placement {
        AxisPlacement::Midline => {
            let (cx, cy) = (w / 2.0, h / 2.0);
            Ok([
                ScreenSegment::from_xy(0.0, cy, w, cy),
                ScreenSegment::from_xy(cx, 0.0, cx, h),
            ])
        }
        AxisPlacement::Frame => Ok([
            ScreenSegment::from_xy(b.left, b.bottom, b.right, b.bottom),
            ScreenSegment::from_xy(b.left, b.top, b.left, b.bottom),
        ]),
        AxisPlacement::DataOrigin => {
            let mapper = origin.ok_or_else(|| {
                ChartError::invalid("data-origin axes need a series to map the origin through")
            })?;
            let o = mapper.map(0.0, 0.0);
            let ox = clamp(o.x, b.left, b.right);
            let oy = clamp(o.y, b.top, b.bottom);
            Ok([
                ScreenSegment::from_xy(b.left, oy, b.right, oy),
                ScreenSegment::from_xy(ox, b.top, ox, b.bottom),
            ])
        }
    }
}
