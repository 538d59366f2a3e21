// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight pixel-space geometry (points, segments, boxes).

use std::ops::{Add, Mul, Sub};

/// A position on the canvas; rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for ScreenPoint {
    type Output = ScreenPoint;
    fn add(self, o: ScreenPoint) -> ScreenPoint { ScreenPoint::new(self.x + o.x, self.y + o.y) }
}

impl Sub for ScreenPoint {
    type Output = ScreenPoint;
    fn sub(self, o: ScreenPoint) -> ScreenPoint { ScreenPoint::new(self.x - o.x, self.y - o.y) }
}

impl Mul<f32> for ScreenPoint {
    type Output = ScreenPoint;
    fn mul(self, k: f32) -> ScreenPoint { ScreenPoint::new(self.x * k, self.y * k) }
}

/// Two endpoints of a line on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSegment {
    pub start: ScreenPoint,
    pub end: ScreenPoint,
}

impl ScreenSegment {
    pub const fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }

    pub fn from_xy(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(ScreenPoint::new(x0, y0), ScreenPoint::new(x1, y1))
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    /// Unit direction from start to end; `None` for a zero-length or non-finite segment.
    pub fn direction(&self) -> Option<ScreenPoint> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            let d = self.end - self.start;
            Some(ScreenPoint::new(d.x / len, d.y / len))
        } else {
            None
        }
    }
}

/// Axis-aligned box in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PixelRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
