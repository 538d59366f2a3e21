// File: crates/chart-core/src/engine.rs
// Summary: PlotEngine frame pipeline: clear, series, grid, axes, title, present.

use crate::backend::{DrawCall, RenderBackend};
use crate::color::Color;
use crate::config::PlotConfiguration;
use crate::error::{ChartError, Result};
use crate::geometry::ScreenPoint;
use crate::grid::{axis_lines, grid_lines, AxisPlacement, GridMode};
use crate::raster::{LineRasterizer, Primitive, StrokeMode};
use crate::scale::CoordinateMapper;
use crate::series::LineStyle;
use crate::theme::Theme;
use crate::types::CanvasGeometry;

/// Default title font size in pixels.
pub const TITLE_SIZE: f32 = 18.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    /// `None` disables the grid.
    pub grid: Option<GridMode>,
    /// `None` disables the axis lines.
    pub axes: Option<AxisPlacement>,
    pub stroke_mode: StrokeMode,
    pub title_size: f32,
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.grid == Some(GridMode::Period(0)) {
            return Err(ChartError::invalid("grid period must be at least 1 pixel"));
        }
        if !(self.title_size > 0.0 && self.title_size.is_finite()) {
            return Err(ChartError::invalid(format!(
                "title size must be positive, got {}",
                self.title_size
            )));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            grid: Some(GridMode::Divisions),
            axes: Some(AxisPlacement::Midline),
            stroke_mode: StrokeMode::Markers,
            title_size: TITLE_SIZE,
        }
    }
}

/// Frame stage a draw call was produced by. Stages are emitted in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Background,
    Series(usize),
    Grid,
    Axes,
    Title,
    Present,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlannedCall {
    pub layer: Layer,
    pub call: DrawCall,
}

impl PlannedCall {
    fn new(layer: Layer, call: DrawCall) -> Self {
        Self { layer, call }
    }
}

/// Owns the configured series and canvas state; renders one frame per call.
#[derive(Clone, Debug)]
pub struct PlotEngine {
    geometry: CanvasGeometry,
    options: RenderOptions,
    config: Option<PlotConfiguration>,
    title: Option<String>,
}

impl PlotEngine {
    pub fn new(geometry: CanvasGeometry, options: RenderOptions) -> Result<Self> {
        geometry.validate()?;
        options.validate()?;
        Ok(Self { geometry, options, config: None, title: None })
    }

    /// Install `config`, replacing any previously configured series.
    pub fn configure(&mut self, config: PlotConfiguration) {
        if let Some(old) = &self.config {
            tracing::debug!(old = old.len(), new = config.len(), "replacing plot configuration");
        }
        self.config = Some(config);
    }

    /// Validate parallel inputs and install them; see [`PlotConfiguration::configure`].
    pub fn configure_series(
        &mut self,
        xs: Vec<Vec<f64>>,
        ys: Vec<Vec<f64>>,
        colors: Vec<Color>,
        styles: Vec<LineStyle>,
    ) -> Result<()> {
        let config = PlotConfiguration::configure(xs, ys, colors, styles)?;
        self.configure(config);
        Ok(())
    }

    pub fn configuration(&self) -> Option<&PlotConfiguration> {
        self.config.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ChartError::invalid("title must not be empty"));
        }
        self.title = Some(title);
        Ok(())
    }

    pub fn clear_title(&mut self) {
        self.title = None;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Apply a new canvas size from the window; margin and inset are kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let geometry = CanvasGeometry::new(width, height, self.geometry.margin, self.geometry.inset)?;
        tracing::debug!(width, height, "canvas resized");
        self.geometry = geometry;
        Ok(())
    }

    pub fn set_geometry(&mut self, geometry: CanvasGeometry) -> Result<()> {
        geometry.validate()?;
        self.geometry = geometry;
        Ok(())
    }

    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    pub fn set_options(&mut self, options: RenderOptions) -> Result<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Compute every draw call of one frame, in emission order.
    pub fn plan(&self) -> Result<Vec<PlannedCall>> {
        let config = self.config.as_ref().ok_or(ChartError::NotConfigured)?;
        let theme = &self.options.theme;
        let mut calls = vec![PlannedCall::new(Layer::Background, DrawCall::Clear(theme.background))];

        let raster = LineRasterizer::new(self.options.stroke_mode);
        let mut prims = Vec::new();
        for (i, series) in config.series().iter().enumerate() {
            let mapper = CoordinateMapper::for_series(series, &self.geometry);
            let points = mapper.map_series(series);
            prims.clear();
            let skipped = raster.rasterize_into(&points, series.style(), &mut prims);
            if skipped > 0 {
                tracing::trace!(series = series.name(), skipped, "zero-length segments skipped");
            }
            tracing::debug!(series = series.name(), primitives = prims.len(), "series rasterized");
            let color = series.color();
            calls.extend(
                prims
                    .iter()
                    .map(|p| PlannedCall::new(Layer::Series(i), primitive_call(*p, color))),
            );
        }

        if let Some(mode) = self.options.grid {
            for seg in grid_lines(&self.geometry, mode)? {
                calls.push(PlannedCall::new(
                    Layer::Grid,
                    DrawCall::Line { from: seg.start, to: seg.end, color: theme.grid },
                ));
            }
        }

        if let Some(placement) = self.options.axes {
            let origin = config
                .series()
                .first()
                .map(|s| CoordinateMapper::for_series(s, &self.geometry));
            for seg in axis_lines(&self.geometry, placement, origin.as_ref())? {
                calls.push(PlannedCall::new(
                    Layer::Axes,
                    DrawCall::Line { from: seg.start, to: seg.end, color: theme.axes },
                ));
            }
        }

        if let Some(title) = &self.title {
            let anchor = ScreenPoint::new(
                self.geometry.width as f32 / 2.0,
                self.geometry.margin as f32 / 2.0,
            );
            calls.push(PlannedCall::new(
                Layer::Title,
                DrawCall::Text {
                    text: title.clone(),
                    anchor,
                    size: self.options.title_size,
                    color: theme.title,
                },
            ));
        }

        calls.push(PlannedCall::new(Layer::Present, DrawCall::Present));
        Ok(calls)
    }

    /// Draw one full frame onto `backend` and present it.
    pub fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B) -> Result<()> {
        let calls = self.plan()?;
        tracing::debug!(calls = calls.len(), "rendering frame");
        for planned in &calls {
            planned.call.replay(backend)?;
        }
        Ok(())
    }
}

impl Default for PlotEngine {
    fn default() -> Self {
        Self {
            geometry: CanvasGeometry::default(),
            options: RenderOptions::default(),
            config: None,
            title: None,
        }
    }
}

fn primitive_call(p: Primitive, color: Color) -> DrawCall {
    match p {
        Primitive::Dot { center, radius } => DrawCall::Dot { center, radius, color },
        Primitive::Line { from, to } => DrawCall::Line { from, to, color },
    }
}
