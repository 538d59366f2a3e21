// File: crates/chart-core/src/color.rs
// Summary: Validated RGBA color value type.

use crate::error::{ChartError, Result};

/// 8-bit RGBA color. Plain value, compared by components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Build from wider-typed components, each of which must lie in [0, 255].
    pub fn try_new(r: i64, g: i64, b: i64, a: i64) -> Result<Self> {
        Ok(Self::new(
            channel(r, "red")?,
            channel(g, "green")?,
            channel(b, "blue")?,
            channel(a, "alpha")?,
        ))
    }

    /// Build from an `[r, g, b]` list plus alpha.
    pub fn from_channels(channels: &[i64], alpha: i64) -> Result<Self> {
        match *channels {
            [r, g, b] => Self::try_new(r, g, b, alpha),
            _ => Err(ChartError::invalid(format!(
                "RGB channel list must have exactly 3 values, got {}",
                channels.len()
            ))),
        }
    }

    pub const fn r(&self) -> u8 { self.r }
    pub const fn g(&self) -> u8 { self.g }
    pub const fn b(&self) -> u8 { self.b }
    pub const fn a(&self) -> u8 { self.a }

    pub const fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn white() -> Self { Self::rgb(255, 255, 255) }
    pub const fn black() -> Self { Self::rgb(0, 0, 0) }
    pub const fn red() -> Self { Self::rgb(255, 0, 0) }
    pub const fn green() -> Self { Self::rgb(0, 255, 0) }
    pub const fn blue() -> Self { Self::rgb(0, 0, 255) }
    pub const fn gray() -> Self { Self::rgb(128, 128, 128) }
}

fn channel(value: i64, name: &str) -> Result<u8> {
    u8::try_from(value)
        .map_err(|_| ChartError::invalid(format!("{name} must be in 0..=255, got {value}")))
}
