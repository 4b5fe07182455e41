//! Error types for saccade-segment

use saccade_core::{Region, Size};
use thiserror::Error;

/// Errors that can occur in segment operations
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error (raster backend)
    #[error("core error: {0}")]
    Core(#[from] saccade_core::Error),

    /// View transform misuse
    #[error("transform error: {0}")]
    Transform(#[from] saccade_transform::TransformError),

    /// Pixel data needs a fully specified region
    #[error("segment with pixel data needs a complete region, got {0:?}")]
    IncompleteRegion(Region),

    /// Mask or image size differs from the region size
    #[error(
        "pixel data is {}x{} but the region is {}x{}",
        .actual.width, .actual.height, .expected.width, .expected.height
    )]
    SizeMismatch { expected: Size, actual: Size },

    /// Invalid option value
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

/// Result type for segment operations
pub type SegmentResult<T> = Result<T, SegmentError>;
