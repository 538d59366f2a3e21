// File: crates/chart-core/src/series.rs
// Summary: One (x, y) data series with its color and line style.

use crate::color::Color;
use crate::error::{ChartError, Result};

/// Minimum number of samples a series needs to be segmented meaningfully.
pub const MIN_POINTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Data-space extent of one series. Spans may be zero; the mapper guards that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>,
    color: Color,
    style: LineStyle,
}

impl PlotSeries {
    /// Validate and build a series.
    /// Contract: `x.len() == y.len()`, at least `MIN_POINTS` samples, all finite.
    pub fn new(
        name: impl Into<String>,
        x: Vec<f64>,
        y: Vec<f64>,
        color: Color,
        style: LineStyle,
    ) -> Result<Self> {
        let name = name.into();
        if x.len() != y.len() {
            return Err(ChartError::invalid(format!(
                "series '{name}': x has {} values but y has {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < MIN_POINTS {
            return Err(ChartError::invalid(format!(
                "series '{name}': needs at least {MIN_POINTS} points, got {}",
                x.len()
            )));
        }
        if let Some(i) = x.iter().zip(&y).position(|(a, b)| !a.is_finite() || !b.is_finite()) {
            return Err(ChartError::invalid(format!(
                "series '{name}': sample {i} is not a finite number"
            )));
        }
        let series = Self { name, x, y, color, style };
        let b = series.bounds();
        if !b.x_span().is_finite() || !b.y_span().is_finite() {
            return Err(ChartError::invalid(format!(
                "series '{}': value range overflows (x span {}, y span {})",
                series.name,
                b.x_span(),
                b.y_span()
            )));
        }
        Ok(series)
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn xs(&self) -> &[f64] { &self.x }
    pub fn ys(&self) -> &[f64] { &self.y }
    pub fn color(&self) -> Color { self.color }
    pub fn style(&self) -> LineStyle { self.style }
    pub fn len(&self) -> usize { self.x.len() }

    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Samples as `(x, y)` pairs in input order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Min/max along each axis, recomputed from the raw samples on every call.
    pub fn bounds(&self) -> Bounds {
        let mut b = Bounds {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for (x, y) in self.points() {
            b.x_min = b.x_min.min(x);
            b.x_max = b.x_max.max(x);
            b.y_min = b.y_min.min(y);
            b.y_max = b.y_max.max(y);
        }
        b
    }
}
