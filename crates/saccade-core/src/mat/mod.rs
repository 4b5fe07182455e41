//! MAT - The reference raster container
//!
//! `Mat` stores 8-bit samples, interleaved by channel, row-major with no
//! row padding. One channel is used for masks and grayscale images, three
//! or four for color.
//!
//! # Ownership model
//!
//! `Mat` uses `Arc` for cheap cloning (shared ownership), so segments can
//! hand the same pixel buffer to many consumers. To modify pixel data,
//! convert to `MatMut` via [`Mat::try_into_mut`] or [`Mat::to_mut`], then
//! convert back with `Into<Mat>`.

mod clip;
mod rop;
mod scale;
pub mod statistics;

pub use scale::ScaleMethod;
pub use statistics::MaskedStats;

use crate::error::{Error, Result};
use crate::region::Size;
use std::sync::Arc;

/// Sample value written into "member" pixels of a full mask
pub const MASK_ON: u8 = 255;

/// Internal pixel storage
#[derive(Debug, Clone, PartialEq, Eq)]
struct MatData {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

/// Shared, immutable raster
///
/// # Examples
///
/// ```
/// use saccade_core::Mat;
///
/// let mat = Mat::new(64, 48, 3).unwrap();
/// assert_eq!(mat.width(), 64);
/// assert_eq!(mat.height(), 48);
/// assert_eq!(mat.count_nonzero(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mat {
    inner: Arc<MatData>,
}

impl Mat {
    /// Create a new zero-filled raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 and
    /// [`Error::InvalidChannels`] unless `channels` is in `1..=4`.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        Self::filled(width, height, channels, 0)
    }

    /// Create a single-channel zero-filled mask
    pub fn new_mask(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, 1)
    }

    /// Create a raster with every sample set to `value`
    pub fn filled(width: u32, height: u32, channels: u32, value: u8) -> Result<Self> {
        Self::check_shape(width, height, channels)?;
        let len = width as usize * height as usize * channels as usize;
        Ok(Self::from_parts(width, height, channels, vec![value; len]))
    }

    /// Create a raster from existing interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len()` is not
    /// `width * height * channels`.
    pub fn from_vec(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        Self::check_shape(width, height, channels)?;
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(width, height, channels, data))
    }

    fn check_shape(width: u32, height: u32, channels: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if !(1..=4).contains(&channels) {
            return Err(Error::InvalidChannels(channels));
        }
        Ok(())
    }

    fn from_parts(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Self {
        Mat {
            inner: Arc::new(MatData {
                width,
                height,
                channels,
                data,
            }),
        }
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the raster size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.inner.width, self.inner.height)
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.channels
    }

    /// Get the raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of one row.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Get the samples of the pixel at `(x, y)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let offset = self.offset(x, y);
        Some(&self.inner.data[offset..offset + self.channels() as usize])
    }

    /// Get the first sample of the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.get_pixel(x, y).map(|p| p[0])
    }

    /// Check whether the pixel at `(x, y)` has any non-zero sample.
    #[inline]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y)
            .is_some_and(|p| p.iter().any(|&s| s != 0))
    }

    /// Count pixels with at least one non-zero sample.
    pub fn count_nonzero(&self) -> u64 {
        self.inner
            .data
            .chunks_exact(self.channels() as usize)
            .filter(|p| p.iter().any(|&s| s != 0))
            .count() as u64
    }

    /// Check if two rasters have the same width, height and channel count
    pub fn same_shape(&self, other: &Mat) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.channels() == other.channels()
    }

    /// Create a zero-filled raster of a new size with the same channel count
    pub fn create_template(&self, width: u32, height: u32) -> Result<Mat> {
        Mat::new(width, height, self.channels())
    }

    /// Create a deep copy that does not share storage.
    pub fn deep_clone(&self) -> Self {
        Mat {
            inner: Arc::new((*self.inner).clone()),
        }
    }

    /// Try to get unique mutable access without copying.
    ///
    /// Fails (returning `self`) if the storage is shared.
    pub fn try_into_mut(self) -> std::result::Result<MatMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(MatMut { inner }),
            Err(inner) => Err(Mat { inner }),
        }
    }

    /// Get a mutable copy of the raster.
    pub fn to_mut(&self) -> MatMut {
        MatMut {
            inner: (*self.inner).clone(),
        }
    }

    #[inline]
    fn stride(&self) -> usize {
        self.inner.width as usize * self.inner.channels as usize
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride() + x as usize * self.inner.channels as usize
    }
}

/// Mutable raster with unique ownership of its samples
#[derive(Debug)]
pub struct MatMut {
    inner: MatData,
}

impl MatMut {
    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.channels
    }

    /// Get the raw samples.
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the raw samples.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Set every sample of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of bounds or `pixel`
    /// does not have one sample per channel.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: &[u8]) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds {
                x: x as i32,
                y: y as i32,
                w: 1,
                h: 1,
                width: self.width(),
                height: self.height(),
            });
        }
        let channels = self.channels() as usize;
        if pixel.len() != channels {
            return Err(Error::IncompatibleChannels(
                self.channels(),
                pixel.len() as u32,
            ));
        }
        self.set_pixel_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster or `pixel` is shorter than
    /// the channel count.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: &[u8]) {
        let channels = self.inner.channels as usize;
        let offset = (y as usize * self.inner.width as usize + x as usize) * channels;
        self.inner.data[offset..offset + channels].copy_from_slice(&pixel[..channels]);
    }
}

impl From<MatMut> for Mat {
    fn from(m: MatMut) -> Self {
        Mat {
            inner: Arc::new(m.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_shape() {
        assert!(matches!(
            Mat::new(0, 4, 1),
            Err(Error::InvalidDimension { width: 0, height: 4 })
        ));
        assert!(matches!(Mat::new(4, 4, 5), Err(Error::InvalidChannels(5))));
        assert!(Mat::new(4, 4, 4).is_ok());
    }

    #[test]
    fn test_from_vec_length() {
        assert!(Mat::from_vec(2, 2, 1, vec![0; 4]).is_ok());
        assert!(matches!(
            Mat::from_vec(2, 2, 3, vec![0; 4]),
            Err(Error::DimensionMismatch {
                expected: 12,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_pixel_access() {
        let mut m = Mat::new(3, 2, 3).unwrap().to_mut();
        m.set_pixel(2, 1, &[1, 2, 3]).unwrap();
        assert!(m.set_pixel(3, 0, &[0, 0, 0]).is_err());
        assert!(m.set_pixel(0, 0, &[0]).is_err());
        let m: Mat = m.into();
        assert_eq!(m.get_pixel(2, 1), Some(&[1u8, 2, 3][..]));
        assert_eq!(m.get(2, 1), Some(1));
        assert_eq!(m.get_pixel(3, 1), None);
        assert_eq!(m.count_nonzero(), 1);
        assert!(m.is_set(2, 1));
        assert!(!m.is_set(0, 0));
    }

    #[test]
    fn test_shared_storage() {
        let a = Mat::new(2, 2, 1).unwrap();
        let b = a.clone();
        let a = a.try_into_mut().unwrap_err();
        drop(b);
        assert!(a.try_into_mut().is_ok());
    }
}
