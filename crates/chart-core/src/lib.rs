// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the plot configuration, mapping, rasterization and engine API.

pub mod backend;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod raster;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;

pub use backend::{DrawCall, RecordingBackend, RenderBackend};
pub use color::Color;
pub use config::PlotConfiguration;
pub use engine::{Layer, PlannedCall, PlotEngine, RenderOptions};
pub use error::{ChartError, Result};
pub use geometry::{ScreenPoint, ScreenSegment};
pub use grid::{AxisPlacement, GridMode};
pub use raster::{LineRasterizer, Primitive, StrokeMode};
pub use scale::CoordinateMapper;
pub use series::{Bounds, LineStyle, PlotSeries};
pub use theme::Theme;
pub use types::CanvasGeometry;
