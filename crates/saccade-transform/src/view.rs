//! ViewTransform - Chains of resize and crop operations
//!
//! A view transform records how a sampled image relates to an ancestor
//! image. Chains are built incrementally from a source size; every builder
//! returns a new chain and leaves the original untouched.

use saccade_core::{Point, Raster, Region, Size};
use tracing::debug;

use crate::error::{TransformError, TransformResult};
use crate::op::TransformOp;

/// Target of [`ViewTransform::add_resize`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeTarget {
    /// Resize to an explicit size
    Size(Size),
    /// Multiply the current size by a factor (truncated)
    Factor(f64),
}

/// An ordered, invertible chain of resize and crop operations
///
/// Invariant: each operation's old size equals the size produced by the
/// previous operation, or the source size for the first one.
///
/// # Examples
///
/// ```
/// use saccade_core::{Point, Region, Size};
/// use saccade_transform::{ResizeTarget, ViewTransform};
///
/// let vt = ViewTransform::new(Size::new(100, 100))
///     .add_resize(ResizeTarget::Factor(0.5))
///     .unwrap()
///     .add_submat(&Region::new(10, 10, 20, 20), false)
///     .unwrap()
///     .unwrap();
/// assert_eq!(vt.final_size(), Size::new(20, 20));
///
/// // A point found in the 20x20 view maps back to the 100x100 frame
/// let back = vt.invert().map_point(Point::new(20, 20));
/// assert_eq!(back, Point::new(60, 60));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewTransform {
    source: Size,
    ops: Vec<TransformOp>,
}

impl ViewTransform {
    /// Create an empty chain starting at an image of `source` size
    pub fn new(source: Size) -> Self {
        Self {
            source,
            ops: Vec::new(),
        }
    }

    /// Create an empty chain starting at the size of `raster`
    pub fn for_raster<R: Raster>(raster: &R) -> Self {
        Self::new(raster.size())
    }

    /// Create a chain from existing operations.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::ChainMismatch`] if an operation's old size
    /// differs from the size produced before it.
    pub fn from_ops(source: Size, ops: Vec<TransformOp>) -> TransformResult<Self> {
        let mut current = source;
        for op in &ops {
            if op.old_size() != current {
                return Err(TransformError::ChainMismatch {
                    expected: current,
                    actual: op.old_size(),
                });
            }
            current = op.new_size();
        }
        Ok(Self { source, ops })
    }

    /// Size of the image the chain starts from
    pub fn source(&self) -> Size {
        self.source
    }

    /// The operations, in application order
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the chain has no operations
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Size of the image after applying every operation
    pub fn final_size(&self) -> Size {
        self.ops.last().map_or(self.source, TransformOp::new_size)
    }

    /// Combined horizontal scale of all resize operations.
    ///
    /// Crops are ignored; returns 1.0 for a chain without resizes.
    pub fn scale_factor(&self) -> f64 {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                TransformOp::Resize {
                    old_width, width, ..
                } => Some(width as f64 / old_width as f64),
                TransformOp::Crop { .. } => None,
            })
            .product()
    }

    /// The inverse chain: reversed order, each operation inverted.
    ///
    /// `vt.invert().invert() == vt`, and mapping through `vt` then
    /// `vt.invert()` returns the starting coordinates up to rounding at
    /// resize boundaries.
    pub fn invert(&self) -> ViewTransform {
        ViewTransform {
            source: self.final_size(),
            ops: self.ops.iter().rev().map(TransformOp::inverse).collect(),
        }
    }

    /// Append `other` after this chain.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::ChainMismatch`] unless `other` starts at
    /// this chain's final size.
    pub fn concat(&self, other: &ViewTransform) -> TransformResult<ViewTransform> {
        if other.source != self.final_size() {
            return Err(TransformError::ChainMismatch {
                expected: self.final_size(),
                actual: other.source,
            });
        }
        let mut ops = self.ops.clone();
        ops.extend_from_slice(&other.ops);
        Ok(ViewTransform {
            source: self.source,
            ops,
        })
    }

    fn with_op(&self, op: TransformOp) -> ViewTransform {
        let mut ops = self.ops.clone();
        ops.push(op);
        ViewTransform {
            source: self.source,
            ops,
        }
    }

    /// Append a crop to `region`, relative to the current final size.
    ///
    /// With `adjust_to_fit`, the crop keeps its size and its location is
    /// clamped into the current bounds. Otherwise the crop is clipped to the
    /// bounds and may shrink. Returns `Ok(None)` when nothing is left.
    ///
    /// # Errors
    ///
    /// - [`TransformError::IncompleteRegion`] if `region` lacks a field
    /// - [`TransformError::SubmatTooLarge`] if `adjust_to_fit` is set and the
    ///   region is larger than the current bounds
    pub fn add_submat(
        &self,
        region: &Region,
        adjust_to_fit: bool,
    ) -> TransformResult<Option<ViewTransform>> {
        let rect = region
            .to_rect()
            .ok_or(TransformError::IncompleteRegion(*region))?;
        let bounds = self.final_size();
        if rect.is_empty() {
            debug!(?region, "empty sub-matrix requested");
            return Ok(None);
        }

        let rect = if adjust_to_fit {
            if rect.w as u32 > bounds.width || rect.h as u32 > bounds.height {
                return Err(TransformError::SubmatTooLarge {
                    requested: Size::new(rect.w as u32, rect.h as u32),
                    available: bounds,
                });
            }
            let x = rect.x.clamp(0, bounds.width as i32 - rect.w);
            let y = rect.y.clamp(0, bounds.height as i32 - rect.h);
            saccade_core::Rect::new_unchecked(x, y, rect.w, rect.h)
        } else {
            match region.crop(bounds).and_then(|r| r.to_rect()) {
                Some(r) => r,
                None => {
                    debug!(?region, ?bounds, "sub-matrix lies outside the view");
                    return Ok(None);
                }
            }
        };

        Ok(Some(self.with_op(TransformOp::Crop {
            x: rect.x,
            y: rect.y,
            width: rect.w as u32,
            height: rect.h as u32,
            old_width: bounds.width,
            old_height: bounds.height,
        })))
    }

    /// Append a crop of `size` centered on `center`.
    ///
    /// The top-left corner is placed so that the region's center pixel
    /// (see [`Region::center`]) is `center`; then see [`Self::add_submat`].
    pub fn add_submat_centered(
        &self,
        center: Point,
        size: Size,
        adjust_to_fit: bool,
    ) -> TransformResult<Option<ViewTransform>> {
        let region = Region::sized(size.width as i32, size.height as i32)
            .translate_center_to(Some(center.x), Some(center.y));
        self.add_submat(&region, adjust_to_fit)
    }

    /// Append a resize to an explicit size or by a factor.
    ///
    /// Factor results are truncated to integers.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidScaleFactor`] for a non-finite or
    /// non-positive factor, or when a resulting dimension is zero.
    pub fn add_resize(&self, target: ResizeTarget) -> TransformResult<ViewTransform> {
        let current = self.final_size();
        let size = match target {
            ResizeTarget::Size(size) => size,
            ResizeTarget::Factor(f) => {
                if !f.is_finite() || f <= 0.0 {
                    return Err(TransformError::InvalidScaleFactor(format!(
                        "factor must be positive and finite, got {}",
                        f
                    )));
                }
                Size::new(
                    (current.width as f64 * f) as u32,
                    (current.height as f64 * f) as u32,
                )
            }
        };
        if size.is_empty() {
            return Err(TransformError::InvalidScaleFactor(format!(
                "resize of {}x{} to {}x{} leaves no pixels",
                current.width, current.height, size.width, size.height
            )));
        }
        Ok(self.with_op(TransformOp::Resize {
            old_width: current.width,
            old_height: current.height,
            width: size.width,
            height: size.height,
        }))
    }
}
