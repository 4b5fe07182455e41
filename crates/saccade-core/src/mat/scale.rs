//! Raster resampling
//!
//! Provides two resampling methods:
//! - Sampling (nearest neighbor), the only method that keeps masks binary
//! - Linear interpolation, for smoother image snapshots

use tracing::trace;

use super::Mat;
use crate::error::{Error, Result};

/// Resampling method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, keeps masks binary)
    #[default]
    Sampling,
    /// Bilinear interpolation
    Linear,
}

impl Mat {
    /// Resample the raster to exactly `width` x `height`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the target size is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use saccade_core::{Mat, ScaleMethod};
    ///
    /// let mat = Mat::filled(10, 10, 1, 7).unwrap();
    /// let half = mat.scale_to_size(5, 5, ScaleMethod::Sampling).unwrap();
    /// assert_eq!(half.count_nonzero(), 25);
    /// ```
    pub fn scale_to_size(&self, width: u32, height: u32, method: ScaleMethod) -> Result<Mat> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if width == self.width() && height == self.height() {
            return Ok(self.clone());
        }
        trace!(
            from_w = self.width(),
            from_h = self.height(),
            width,
            height,
            ?method,
            "resampling raster"
        );
        match method {
            ScaleMethod::Sampling => self.scale_by_sampling(width, height),
            ScaleMethod::Linear => self.scale_linear(width, height),
        }
    }

    fn scale_by_sampling(&self, width: u32, height: u32) -> Result<Mat> {
        let channels = self.channels() as usize;
        let xmap: Vec<u32> = (0..width)
            .map(|x| source_index(x, width, self.width()))
            .collect();
        let mut data = Vec::with_capacity(width as usize * height as usize * channels);
        for y in 0..height {
            let row = self.row(source_index(y, height, self.height()));
            for &sx in &xmap {
                let start = sx as usize * channels;
                data.extend_from_slice(&row[start..start + channels]);
            }
        }
        Mat::from_vec(width, height, self.channels(), data)
    }

    fn scale_linear(&self, width: u32, height: u32) -> Result<Mat> {
        let channels = self.channels() as usize;
        let sx = self.width() as f64 / width as f64;
        let sy = self.height() as f64 / height as f64;
        let max_x = (self.width() - 1) as f64;
        let max_y = (self.height() - 1) as f64;
        let mut data = Vec::with_capacity(width as usize * height as usize * channels);
        for y in 0..height {
            let fy = ((y as f64 + 0.5) * sy - 0.5).clamp(0.0, max_y);
            let y0 = fy.floor() as u32;
            let y1 = (y0 + 1).min(self.height() - 1);
            let ty = fy - y0 as f64;
            for x in 0..width {
                let fx = ((x as f64 + 0.5) * sx - 0.5).clamp(0.0, max_x);
                let x0 = fx.floor() as u32;
                let x1 = (x0 + 1).min(self.width() - 1);
                let tx = fx - x0 as f64;
                for c in 0..channels {
                    let sample = |px: u32, py: u32| self.row(py)[px as usize * channels + c] as f64;
                    let top = sample(x0, y0) * (1.0 - tx) + sample(x1, y0) * tx;
                    let bottom = sample(x0, y1) * (1.0 - tx) + sample(x1, y1) * tx;
                    let v = top * (1.0 - ty) + bottom * ty;
                    data.push(v.round().clamp(0.0, 255.0) as u8);
                }
            }
        }
        Mat::from_vec(width, height, self.channels(), data)
    }
}

/// Nearest source index for destination index `d`, sampling pixel centers.
#[inline]
fn source_index(d: u32, dst_len: u32, src_len: u32) -> u32 {
    let s = ((d as u64 * 2 + 1) * src_len as u64) / (dst_len as u64 * 2);
    (s as u32).min(src_len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_upscale_replicates() {
        let m = Mat::from_vec(2, 1, 1, vec![1, 2]).unwrap();
        let up = m.scale_to_size(4, 2, ScaleMethod::Sampling).unwrap();
        assert_eq!(up.data(), &[1, 1, 2, 2, 1, 1, 2, 2]);
    }

    #[test]
    fn test_sampling_downscale_picks_centers() {
        let m = Mat::from_vec(4, 1, 1, vec![10, 20, 30, 40]).unwrap();
        let down = m.scale_to_size(2, 1, ScaleMethod::Sampling).unwrap();
        assert_eq!(down.data(), &[20, 40]);
    }

    #[test]
    fn test_linear_constant_image() {
        let m = Mat::filled(3, 3, 3, 100).unwrap();
        let up = m.scale_to_size(7, 5, ScaleMethod::Linear).unwrap();
        assert!(up.data().iter().all(|&v| v == 100));
    }

    #[test]
    fn test_linear_midpoint() {
        let m = Mat::from_vec(2, 1, 1, vec![0, 100]).unwrap();
        let up = m.scale_to_size(4, 1, ScaleMethod::Linear).unwrap();
        assert_eq!(up.get(0, 0), Some(0));
        assert_eq!(up.get(3, 0), Some(100));
        assert!(up.get(1, 0).unwrap() < up.get(2, 0).unwrap());
    }

    #[test]
    fn test_zero_target_rejected() {
        let m = Mat::new(2, 2, 1).unwrap();
        assert!(m.scale_to_size(0, 2, ScaleMethod::Sampling).is_err());
    }
}
