// File: crates/chart-core/src/backend.rs
// Summary: Render backend seam, draw-call records, and an in-memory recording backend.

use crate::color::Color;
use crate::geometry::ScreenPoint;

/// Receiver of draw calls for one frame. Implementations own the pixels;
/// chart-core never touches them.
pub trait RenderBackend {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);
    /// Filled circle centered at `center`.
    fn draw_dot(&mut self, center: ScreenPoint, radius: f32, color: Color);
    /// Hairline from `from` to `to`.
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color);
    /// Text whose top edge is centered horizontally on `anchor`.
    fn draw_text(&mut self, text: &str, anchor: ScreenPoint, size: f32, color: Color);
    /// Finish the frame.
    fn present(&mut self) -> anyhow::Result<()>;
}

/// One backend call, as data.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Dot { center: ScreenPoint, radius: f32, color: Color },
    Line { from: ScreenPoint, to: ScreenPoint, color: Color },
    Text { text: String, anchor: ScreenPoint, size: f32, color: Color },
    Present,
}

impl DrawCall {
    /// Send this call to `backend`.
    pub fn replay<B: RenderBackend + ?Sized>(&self, backend: &mut B) -> anyhow::Result<()> {
        match self {
            DrawCall::Clear(c) => backend.clear(*c),
            DrawCall::Dot { center, radius, color } => backend.draw_dot(*center, *radius, *color),
            DrawCall::Line { from, to, color } => backend.draw_line(*from, *to, *color),
            DrawCall::Text { text, anchor, size, color } => {
                backend.draw_text(text, *anchor, *size, *color)
            }
            DrawCall::Present => backend.present()?,
        }
        Ok(())
    }
}

/// Backend that keeps every call in order; used for headless checks.
#[derive(Default, Debug)]
pub struct RecordingBackend {
    pub calls: Vec<DrawCall>,
    pub frames: usize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded calls, keeping the frame counter.
    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }
    fn draw_dot(&mut self, center: ScreenPoint, radius: f32, color: Color) {
        self.calls.push(DrawCall::Dot { center, radius, color });
    }
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        self.calls.push(DrawCall::Line { from, to, color });
    }
    fn draw_text(&mut self, text: &str, anchor: ScreenPoint, size: f32, color: Color) {
        self.calls.push(DrawCall::Text { text: text.to_string(), anchor, size, color });
    }
    fn present(&mut self) -> anyhow::Result<()> {
        self.calls.push(DrawCall::Present);
        self.frames += 1;
        Ok(())
    }
}
