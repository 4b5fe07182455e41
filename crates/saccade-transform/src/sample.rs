//! Sampling real images through a view transform

use saccade_core::{Raster, Rect, Size};
use tracing::trace;

use crate::error::{TransformError, TransformResult};
use crate::op::TransformOp;
use crate::view::ViewTransform;

impl ViewTransform {
    /// Apply the chain to an image.
    ///
    /// Each resize replaces the working image with a resampled copy and each
    /// crop with a sub-rectangle extraction.
    ///
    /// # Errors
    ///
    /// - [`TransformError::SourceMismatch`] if `image` is not the chain's
    ///   source size
    /// - [`TransformError::NegativeCropOffset`] for crops that only make sense
    ///   for geometric back-mapping (as produced by [`ViewTransform::invert`])
    /// - [`TransformError::Core`] if the raster backend rejects an operation
    pub fn sample<R: Raster>(&self, image: &R) -> TransformResult<R> {
        if image.size() != self.source() {
            return Err(TransformError::SourceMismatch {
                expected: self.source(),
                actual: image.size(),
            });
        }

        let mut current = image.clone();
        for op in self.ops() {
            current = match *op {
                TransformOp::Resize { width, height, .. } => {
                    let size = Size::new(width, height);
                    if current.size() == size {
                        current
                    } else {
                        current.resize_to(size)?
                    }
                }
                TransformOp::Crop {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => {
                    if x < 0 || y < 0 {
                        return Err(TransformError::NegativeCropOffset { x, y });
                    }
                    current.sub_rect(&Rect::new_unchecked(x, y, width as i32, height as i32))?
                }
            };
            trace!(?op, size = ?current.size(), "sampled through op");
        }
        Ok(current)
    }
}
