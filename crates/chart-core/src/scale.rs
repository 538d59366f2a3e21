// File: crates/chart-core/src/scale.rs
// Summary: Data-space to pixel-space mapping for one series.

use crate::geometry::ScreenPoint;
use crate::series::{Bounds, PlotSeries};
use crate::types::CanvasGeometry;

/// Maps samples of one series into the canvas' inner data area.
///
/// X grows rightward from `margin + inset`; Y is flipped so larger data values
/// land on smaller pixel rows. A zero span is replaced by 1 so constant series
/// map to a single row/column instead of dividing by zero.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    x_min: f64,
    y_min: f64,
    x_span: f64,
    y_span: f64,
    origin: f64,
    inner_w: f64,
    inner_h: f64,
}

impl CoordinateMapper {
    pub fn new(bounds: Bounds, geometry: &CanvasGeometry) -> Self {
        let guard = |span: f64| if span == 0.0 { 1.0 } else { span };
        Self {
            x_min: bounds.x_min,
            y_min: bounds.y_min,
            x_span: guard(bounds.x_span()),
            y_span: guard(bounds.y_span()),
            origin: geometry.origin() as f64,
            inner_w: geometry.inner_width() as f64,
            inner_h: geometry.inner_height() as f64,
        }
    }

    /// Mapper over the series' own bounds.
    pub fn for_series(series: &PlotSeries, geometry: &CanvasGeometry) -> Self {
        Self::new(series.bounds(), geometry)
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f32 {
        (self.origin + (x - self.x_min) / self.x_span * self.inner_w) as f32
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f32 {
        (self.origin + self.inner_h * (1.0 - (y - self.y_min) / self.y_span)) as f32
    }

    #[inline]
    pub fn map(&self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint::new(self.to_px_x(x), self.to_px_y(y))
    }

    #[inline]
    pub fn from_px_x(&self, px: f32) -> f64 {
        if self.inner_w == 0.0 {
            return self.x_min;
        }
        self.x_min + (px as f64 - self.origin) / self.inner_w * self.x_span
    }

    #[inline]
    pub fn from_px_y(&self, py: f32) -> f64 {
        if self.inner_h == 0.0 {
            return self.y_min;
        }
        self.y_min + (1.0 - (py as f64 - self.origin) / self.inner_h) * self.y_span
    }

    /// Inverse of [`map`](Self::map): pixel back to data space.
    pub fn unmap(&self, p: ScreenPoint) -> (f64, f64) {
        (self.from_px_x(p.x), self.from_px_y(p.y))
    }

    /// Map every sample of `series` in order.
    pub fn map_series(&self, series: &PlotSeries) -> Vec<ScreenPoint> {
        series.points().map(|(x, y)| self.map(x, y)).collect()
    }
}
