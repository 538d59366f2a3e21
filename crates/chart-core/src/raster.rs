// File: crates/chart-core/src/raster.rs
// Summary: Solid / dashed / dotted polyline rasterization into backend primitives.
// Notes:
// - Every segment is handled on its own: dash phase restarts at offset 0 on each
//   segment and dots on a shared endpoint are not deduplicated.
// - Offsets along a segment are `i * spacing`, never an accumulated sum, so the
//   same input always yields the same primitives.

use crate::geometry::{ScreenPoint, ScreenSegment};
use crate::series::LineStyle;

/// Spacing between filler dots of a solid stroke.
pub const SOLID_SPACING: f32 = 0.5;
/// Radius of a solid stroke's filler dots.
pub const SOLID_RADIUS: f32 = 1.0;
/// Length of one drawn dash run.
pub const DASH_LEN: f32 = 10.0;
/// Length of one skipped gap run.
pub const GAP_LEN: f32 = 5.0;
/// Spacing between filler dots inside a dash run.
pub const DASH_FILL_SPACING: f32 = 0.5;
/// Radius of a dash run's filler dots.
pub const DASH_RADIUS: f32 = 1.0;
/// Distance between consecutive dots of a dotted stroke.
pub const DOT_SPACING: f32 = 7.0;
/// Radius of a dotted stroke's dots.
pub const DOT_RADIUS: f32 = 2.0;

/// One drawing instruction for a backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    /// Filled circle centered at `center`.
    Dot { center: ScreenPoint, radius: f32 },
    /// Hairline between two points.
    Line { from: ScreenPoint, to: ScreenPoint },
}

/// How solid strokes and dash runs are filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrokeMode {
    /// Closely spaced dot markers; needs only a point primitive from the backend.
    #[default]
    Markers,
    /// One native line per solid segment or dash run. Dotted output is unchanged.
    Lines,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunKind {
    Dash,
    Gap,
}

/// A sub-length of a segment, measured from the segment start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashRun {
    pub kind: RunKind,
    pub offset: f32,
    pub length: f32,
}

/// Split `length` into alternating dash/gap runs starting with a dash at 0.
/// The final run is clipped to what remains.
pub fn dash_runs(length: f32) -> Vec<DashRun> {
    let mut runs = Vec::new();
    if !(length > 0.0 && length.is_finite()) {
        return runs;
    }
    let mut drawn = 0.0f32;
    let mut kind = RunKind::Dash;
    loop {
        let step = match kind {
            RunKind::Dash => DASH_LEN,
            RunKind::Gap => GAP_LEN,
        };
        let remaining = length - drawn;
        if step >= remaining {
            runs.push(DashRun { kind, offset: drawn, length: remaining });
            break;
        }
        runs.push(DashRun { kind, offset: drawn, length: step });
        drawn += step;
        kind = match kind {
            RunKind::Dash => RunKind::Gap,
            RunKind::Gap => RunKind::Dash,
        };
    }
    runs
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LineRasterizer {
    mode: StrokeMode,
}

impl LineRasterizer {
    pub const fn new(mode: StrokeMode) -> Self {
        Self { mode }
    }

    pub const fn mode(&self) -> StrokeMode {
        self.mode
    }

    /// Rasterize a whole polyline; segments are processed first to last.
    pub fn rasterize(&self, points: &[ScreenPoint], style: LineStyle) -> Vec<Primitive> {
        let mut out = Vec::new();
        self.rasterize_into(points, style, &mut out);
        out
    }

    /// Append the polyline's primitives to `out`. Returns how many zero-length
    /// segments were skipped.
    pub fn rasterize_into(
        &self,
        points: &[ScreenPoint],
        style: LineStyle,
        out: &mut Vec<Primitive>,
    ) -> usize {
        points
            .windows(2)
            .filter(|w| !self.rasterize_segment(ScreenSegment::new(w[0], w[1]), style, out))
            .count()
    }

    /// Append one segment's primitives to `out`. Returns `false` (and emits
    /// nothing) when the segment has no usable direction.
    pub fn rasterize_segment(
        &self,
        seg: ScreenSegment,
        style: LineStyle,
        out: &mut Vec<Primitive>,
    ) -> bool {
        let Some(dir) = seg.direction() else {
            return false;
        };
        let len = seg.length();
        match (style, self.mode) {
            (LineStyle::Solid, StrokeMode::Markers) => {
                fill_dots(seg.start, dir, 0.0, len, SOLID_SPACING, SOLID_RADIUS, out);
            }
            (LineStyle::Solid, StrokeMode::Lines) => {
                out.push(Primitive::Line { from: seg.start, to: seg.end });
            }
            (LineStyle::Dashed, mode) => {
                for run in dash_runs(len).into_iter().filter(|r| r.kind == RunKind::Dash) {
                    match mode {
                        StrokeMode::Markers => fill_dots(
                            seg.start,
                            dir,
                            run.offset,
                            run.length,
                            DASH_FILL_SPACING,
                            DASH_RADIUS,
                            out,
                        ),
                        StrokeMode::Lines => out.push(Primitive::Line {
                            from: seg.start + dir * run.offset,
                            to: seg.start + dir * (run.offset + run.length),
                        }),
                    }
                }
            }
            (LineStyle::Dotted, _) => {
                fill_dots(seg.start, dir, 0.0, len, DOT_SPACING, DOT_RADIUS, out);
            }
        }
        true
    }
}

/// Dots at `start + dir * (offset + i*spacing)` for every `i*spacing < length`.
fn fill_dots(
    start: ScreenPoint,
    dir: ScreenPoint,
    offset: f32,
    length: f32,
    spacing: f32,
    radius: f32,
    out: &mut Vec<Primitive>,
) {
    let mut i = 0u32;
    loop {
        let s = i as f32 * spacing;
        if s >= length {
            break;
        }
        out.push(Primitive::Dot { center: start + dir * (offset + s), radius });
        i += 1;
    }
}
