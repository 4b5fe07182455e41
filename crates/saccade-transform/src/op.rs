//! Transform operation records

use saccade_core::{Rect, Size};

/// One step of a view transform
///
/// A crop record means "the current image is the sub-rectangle
/// `(x, y, width, height)` of a frame sized `old_width x old_height`". The
/// record reads the same whether the chain is walked forward or backward;
/// only [`TransformOp::inverse`] swaps the roles of old and new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum TransformOp {
    /// Rescale `old_width x old_height` to `width x height`
    Resize {
        old_width: u32,
        old_height: u32,
        width: u32,
        height: u32,
    },
    /// Take the sub-rectangle at `(x, y)` of a frame sized `old_width x old_height`
    Crop {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        old_width: u32,
        old_height: u32,
    },
}

impl TransformOp {
    /// Size of the image this operation consumes
    pub fn old_size(&self) -> Size {
        match *self {
            TransformOp::Resize {
                old_width,
                old_height,
                ..
            }
            | TransformOp::Crop {
                old_width,
                old_height,
                ..
            } => Size::new(old_width, old_height),
        }
    }

    /// Size of the image this operation produces
    pub fn new_size(&self) -> Size {
        match *self {
            TransformOp::Resize { width, height, .. } | TransformOp::Crop { width, height, .. } => {
                Size::new(width, height)
            }
        }
    }

    /// Check if this is a resize
    pub fn is_resize(&self) -> bool {
        matches!(self, TransformOp::Resize { .. })
    }

    /// The crop window as a rectangle in the old frame
    pub fn crop_rect(&self) -> Option<Rect> {
        match *self {
            TransformOp::Crop {
                x,
                y,
                width,
                height,
                ..
            } => Some(Rect::new_unchecked(x, y, width as i32, height as i32)),
            TransformOp::Resize { .. } => None,
        }
    }

    /// The algebraic inverse: old and new sizes swap, crop offsets negate.
    pub fn inverse(&self) -> TransformOp {
        match *self {
            TransformOp::Resize {
                old_width,
                old_height,
                width,
                height,
            } => TransformOp::Resize {
                old_width: width,
                old_height: height,
                width: old_width,
                height: old_height,
            },
            TransformOp::Crop {
                x,
                y,
                width,
                height,
                old_width,
                old_height,
            } => TransformOp::Crop {
                x: -x,
                y: -y,
                width: old_width,
                height: old_height,
                old_width: width,
                old_height: height,
            },
        }
    }
}
