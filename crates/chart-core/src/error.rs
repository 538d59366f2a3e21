// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for configuration, construction and rendering.

use thiserror::Error;

/// Result alias used throughout chart-core.
pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    /// Malformed input at construction or configuration time: bad color
    /// channels, mismatched/empty/undersized series, zero canvas size,
    /// empty title.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `render` or `plan` was called before any series were configured.
    #[error("plot is not configured; call configure() before rendering")]
    NotConfigured,

    /// The render backend failed to present a frame.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl ChartError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ChartError::InvalidArgument(msg.into())
    }
}
