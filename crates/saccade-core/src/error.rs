//! Error types for saccade-core
//!
//! Provides a unified error type for raster and geometry operations in the
//! core crate. Missing geometric fields are not errors: they surface as
//! `None` from the individual query. Errors are reserved for requests that
//! cannot be carried out on the pixel data at all.

use thiserror::Error;

/// Saccade core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid channel count
    #[error("invalid channel count: {0}")]
    InvalidChannels(u32),

    /// Incompatible raster sizes
    #[error("incompatible raster sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Incompatible channel counts
    #[error("incompatible channel counts: {0} vs {1}")]
    IncompatibleChannels(u32, u32),

    /// Buffer length does not match the declared shape
    #[error("dimension mismatch: expected {expected} samples, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Rectangle falls outside the raster
    #[error("rectangle ({x}, {y}, {w}x{h}) is outside raster bounds {width}x{height}")]
    OutOfBounds {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for saccade-core operations
pub type Result<T> = std::result::Result<T, Error>;
