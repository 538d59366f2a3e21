// File: crates/chart-core/src/config.rs
// Summary: Validated multi-series plot configuration built from parallel input collections.

use crate::color::Color;
use crate::error::{ChartError, Result};
use crate::series::{LineStyle, PlotSeries};

/// The ordered set of series rendered together. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfiguration {
    series: Vec<PlotSeries>,
}

impl PlotConfiguration {
    /// Build from parallel collections: series `i` is `(xs[i], ys[i], colors[i], styles[i])`.
    ///
    /// Fails with `InvalidArgument` when the four collections differ in length,
    /// are empty, or any series fails its own shape check.
    pub fn configure(
        xs: Vec<Vec<f64>>,
        ys: Vec<Vec<f64>>,
        colors: Vec<Color>,
        styles: Vec<LineStyle>,
    ) -> Result<Self> {
        let n = xs.len();
        if ys.len() != n || colors.len() != n || styles.len() != n {
            return Err(ChartError::invalid(format!(
                "parallel inputs differ in length: {} x-arrays, {} y-arrays, {} colors, {} styles",
                n,
                ys.len(),
                colors.len(),
                styles.len()
            )));
        }
        if n == 0 {
            return Err(ChartError::invalid("at least one series is required"));
        }

        let series = xs
            .into_iter()
            .zip(ys)
            .zip(colors.into_iter().zip(styles))
            .enumerate()
            .map(|(i, ((x, y), (color, style)))| {
                PlotSeries::new(format!("series-{i}"), x, y, color, style)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(series = series.len(), "plot configured");
        Ok(Self { series })
    }

    /// Build from series that were validated individually.
    pub fn from_series(series: Vec<PlotSeries>) -> Result<Self> {
        if series.is_empty() {
            return Err(ChartError::invalid("at least one series is required"));
        }
        tracing::debug!(series = series.len(), "plot configured");
        Ok(Self { series })
    }

    pub fn series(&self) -> &[PlotSeries] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
