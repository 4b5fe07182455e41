//! Sub-rectangle extraction and masked pasting

use super::{Mat, MatMut};
use crate::Rect;
use crate::error::{Error, Result};

impl Mat {
    /// Extract a rectangular sub-region.
    ///
    /// The rectangle must lie completely inside the raster; unlike clipping
    /// for display, a partially outside request is an error because callers
    /// use the result to stand in for exactly `rect`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty rectangle and
    /// [`Error::OutOfBounds`] if it does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use saccade_core::{Mat, Rect};
    ///
    /// let mat = Mat::new(100, 80, 1).unwrap();
    /// let sub = mat.clip_rectangle(&Rect::new_unchecked(10, 20, 50, 40)).unwrap();
    /// assert_eq!((sub.width(), sub.height()), (50, 40));
    /// assert!(mat.clip_rectangle(&Rect::new_unchecked(80, 60, 50, 50)).is_err());
    /// ```
    pub fn clip_rectangle(&self, rect: &Rect) -> Result<Mat> {
        if rect.is_empty() {
            return Err(Error::InvalidDimension {
                width: rect.w.max(0) as u32,
                height: rect.h.max(0) as u32,
            });
        }
        if !rect.fits_within(self.size()) {
            return Err(Error::OutOfBounds {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
                width: self.width(),
                height: self.height(),
            });
        }

        let channels = self.channels() as usize;
        let row_len = rect.w as usize * channels;
        let mut data = Vec::with_capacity(row_len * rect.h as usize);
        for y in rect.y..rect.bottom() {
            let row = self.row(y as u32);
            let start = rect.x as usize * channels;
            data.extend_from_slice(&row[start..start + row_len]);
        }
        Mat::from_vec(rect.w as u32, rect.h as u32, self.channels(), data)
    }

    /// Copy `src` into this raster with its top-left at `(x, y)`.
    ///
    /// When `mask` is given, only pixels where the mask is set are copied.
    /// Pixels that land outside this raster are skipped. The samples are
    /// written in place when this raster's storage is not shared.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel counts differ or the mask size does
    /// not match `src`.
    pub fn paste(self, src: &Mat, x: i32, y: i32, mask: Option<&Mat>) -> Result<Mat> {
        if src.channels() != self.channels() {
            return Err(Error::IncompatibleChannels(self.channels(), src.channels()));
        }
        if let Some(m) = mask
            && m.size() != src.size()
        {
            return Err(Error::IncompatibleSizes(
                src.width(),
                src.height(),
                m.width(),
                m.height(),
            ));
        }

        let (width, height) = (self.width() as i32, self.height() as i32);
        let mut dst: MatMut = self.try_into_mut().unwrap_or_else(|shared| shared.to_mut());
        for sy in 0..src.height() {
            let dy = y + sy as i32;
            if dy < 0 || dy >= height {
                continue;
            }
            for sx in 0..src.width() {
                let dx = x + sx as i32;
                if dx < 0 || dx >= width {
                    continue;
                }
                if mask.is_some_and(|m| !m.is_set(sx, sy)) {
                    continue;
                }
                if let Some(pixel) = src.get_pixel(sx, sy) {
                    dst.set_pixel_unchecked(dx as u32, dy as u32, pixel);
                }
            }
        }
        Ok(dst.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: u32, h: u32) -> Mat {
        let data = (0..w * h).map(|v| v as u8).collect();
        Mat::from_vec(w, h, 1, data).unwrap()
    }

    #[test]
    fn test_clip_rectangle_content() {
        let m = ramp(5, 4);
        let sub = m.clip_rectangle(&Rect::new_unchecked(1, 2, 3, 2)).unwrap();
        assert_eq!(sub.data(), &[11, 12, 13, 16, 17, 18]);
    }

    #[test]
    fn test_clip_rectangle_errors() {
        let m = ramp(5, 4);
        assert!(m.clip_rectangle(&Rect::new_unchecked(0, 0, 0, 2)).is_err());
        assert!(m.clip_rectangle(&Rect::new_unchecked(-1, 0, 2, 2)).is_err());
        assert!(m.clip_rectangle(&Rect::new_unchecked(4, 0, 2, 2)).is_err());
    }

    #[test]
    fn test_paste_with_mask() {
        let canvas = Mat::new(4, 4, 1).unwrap();
        let src = Mat::filled(2, 2, 1, 9).unwrap();
        let mask = Mat::from_vec(2, 2, 1, vec![1, 0, 0, 1]).unwrap();
        let out = canvas.clone().paste(&src, 1, 1, Some(&mask)).unwrap();
        assert_eq!(out.get(1, 1), Some(9));
        assert_eq!(out.get(2, 1), Some(0));
        assert_eq!(out.get(2, 2), Some(9));
        assert_eq!(out.count_nonzero(), 2);
        // A shared canvas is copied, not written through
        assert_eq!(canvas.count_nonzero(), 0);
    }

    #[test]
    fn test_paste_writes_unshared_canvas_in_place() {
        let canvas = Mat::new(4, 4, 1).unwrap();
        let storage = canvas.data().as_ptr();
        let out = canvas.paste(&Mat::filled(2, 2, 1, 9).unwrap(), 1, 1, None).unwrap();
        assert_eq!(out.data().as_ptr(), storage);
        assert_eq!(out.count_nonzero(), 4);
    }

    #[test]
    fn test_paste_clips_outside() {
        let canvas = Mat::new(3, 3, 1).unwrap();
        let src = Mat::filled(2, 2, 1, 1).unwrap();
        let out = canvas.paste(&src, 2, -1, None).unwrap();
        assert_eq!(out.count_nonzero(), 1);
        assert!(out.is_set(2, 0));
    }

    #[test]
    fn test_paste_channel_mismatch() {
        let canvas = Mat::new(3, 3, 3).unwrap();
        let src = Mat::new(2, 2, 1).unwrap();
        assert!(matches!(
            canvas.paste(&src, 0, 0, None),
            Err(Error::IncompatibleChannels(3, 1))
        ));
    }
}
