//! Error types for saccade-transform
//!
//! These signal misuse of a transform chain (a broken chain invariant or a
//! request that cannot be satisfied), never ordinary missing data.

use saccade_core::{Region, Size};
use thiserror::Error;

/// Errors that can occur while building or applying view transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] saccade_core::Error),

    /// A crop with a negative offset cannot read real pixels
    #[error("cannot sample through a crop with negative offset ({x}, {y})")]
    NegativeCropOffset { x: i32, y: i32 },

    /// The requested sub-matrix is larger than the current view
    #[error(
        "sub-matrix {}x{} does not fit in {}x{}",
        .requested.width, .requested.height, .available.width, .available.height
    )]
    SubmatTooLarge { requested: Size, available: Size },

    /// The region lacks a location or size needed for this operation
    #[error("region is not fully specified: {0:?}")]
    IncompleteRegion(Region),

    /// Invalid resize factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// An operation's input size does not match the size the chain produces
    #[error(
        "chain mismatch: expected input {}x{}, got {}x{}",
        .expected.width, .expected.height, .actual.width, .actual.height
    )]
    ChainMismatch { expected: Size, actual: Size },

    /// The sampled image does not have the chain's source size
    #[error(
        "source mismatch: chain starts at {}x{}, image is {}x{}",
        .expected.width, .expected.height, .actual.width, .actual.height
    )]
    SourceMismatch { expected: Size, actual: Size },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
