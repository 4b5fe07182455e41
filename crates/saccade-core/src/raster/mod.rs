//! Raster - The pixel-matrix capability set
//!
//! Segment and view-transform code never touches a concrete image library.
//! It is written against [`Raster`], which exposes only what region-level
//! bookkeeping needs: sub-rectangle extraction, nearest and smooth resizing,
//! bitwise OR, zero-filled and full allocation, masked copying and a
//! set-pixel count.
//!
//! [`Mat`] is the bundled implementation. With the `image` feature the
//! trait is also implemented for `image::ImageBuffer` with 8-bit samples.

#[cfg(feature = "image")]
mod buffer;

use crate::error::Result;
use crate::mat::{MASK_ON, Mat, ScaleMethod};
use crate::region::{Rect, Size};

/// Pixel matrix operations needed by segments and view transforms
///
/// Implementations must be cheap to clone or accept the copy cost. Every
/// operation except [`Raster::paste`] returns a new raster and leaves `self`
/// untouched.
pub trait Raster: Clone {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Size in pixels
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Zero-filled raster of `size` with the same sample layout as `self`
    fn blank(&self, size: Size) -> Result<Self>;

    /// Raster of `size` with every sample at its maximum (an all-member mask)
    fn full(&self, size: Size) -> Result<Self>;

    /// Copy of the sub-rectangle `rect`, which must lie inside `self`
    fn sub_rect(&self, rect: &Rect) -> Result<Self>;

    /// Resampled copy of exactly `size`.
    ///
    /// Nearest-neighbor, so masks stay binary.
    fn resize_to(&self, size: Size) -> Result<Self>;

    /// Interpolated copy of exactly `size`, for image content.
    ///
    /// Defaults to [`Raster::resize_to`].
    fn resize_smooth_to(&self, size: Size) -> Result<Self> {
        self.resize_to(size)
    }

    /// Bitwise OR with a raster of the same shape
    fn or(&self, other: &Self) -> Result<Self>;

    /// `self` with `src` copied in at `(x, y)`, restricted to the pixels
    /// set in `mask` when one is given
    fn paste(self, src: &Self, x: i32, y: i32, mask: Option<&Self>) -> Result<Self>;

    /// Number of pixels with at least one non-zero sample
    fn count_nonzero(&self) -> u64;
}

impl Raster for Mat {
    fn width(&self) -> u32 {
        Mat::width(self)
    }

    fn height(&self) -> u32 {
        Mat::height(self)
    }

    fn blank(&self, size: Size) -> Result<Self> {
        self.create_template(size.width, size.height)
    }

    fn full(&self, size: Size) -> Result<Self> {
        Mat::filled(size.width, size.height, self.channels(), MASK_ON)
    }

    fn sub_rect(&self, rect: &Rect) -> Result<Self> {
        self.clip_rectangle(rect)
    }

    fn resize_to(&self, size: Size) -> Result<Self> {
        self.scale_to_size(size.width, size.height, ScaleMethod::Sampling)
    }

    fn resize_smooth_to(&self, size: Size) -> Result<Self> {
        self.scale_to_size(size.width, size.height, ScaleMethod::Linear)
    }

    fn or(&self, other: &Self) -> Result<Self> {
        Mat::or(self, other)
    }

    fn paste(self, src: &Self, x: i32, y: i32, mask: Option<&Self>) -> Result<Self> {
        Mat::paste(self, src, x, y, mask)
    }

    fn count_nonzero(&self) -> u64 {
        Mat::count_nonzero(self)
    }
}
