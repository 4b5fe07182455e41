//! Masked raster statistics
//!
//! Per-channel statistics over the pixels of an image that belong to a
//! mask. These are the segment-local measurements attention components ask
//! for (average color inside a blob, brightness range, ...).

use super::Mat;
use crate::error::{Error, Result};

/// Per-channel statistics over the selected pixels
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedStats {
    /// Number of selected pixels
    pub count: u64,
    /// Mean value per channel
    pub mean: Vec<f64>,
    /// Minimum value per channel
    pub min: Vec<u8>,
    /// Maximum value per channel
    pub max: Vec<u8>,
}

impl Mat {
    /// Compute per-channel statistics over the pixels selected by `mask`.
    ///
    /// Without a mask every pixel is selected. Returns `Ok(None)` when the
    /// mask selects no pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if the mask size differs from the image size.
    pub fn masked_stats(&self, mask: Option<&Mat>) -> Result<Option<MaskedStats>> {
        if let Some(m) = mask
            && m.size() != self.size()
        {
            return Err(Error::IncompatibleSizes(
                self.width(),
                self.height(),
                m.width(),
                m.height(),
            ));
        }

        let channels = self.channels() as usize;
        let mut sum = vec![0u64; channels];
        let mut min = vec![u8::MAX; channels];
        let mut max = vec![u8::MIN; channels];
        let mut count = 0u64;

        for y in 0..self.height() {
            let row = self.row(y);
            for x in 0..self.width() {
                if mask.is_some_and(|m| !m.is_set(x, y)) {
                    continue;
                }
                count += 1;
                let pixel = &row[x as usize * channels..(x as usize + 1) * channels];
                for (c, &v) in pixel.iter().enumerate() {
                    sum[c] += v as u64;
                    min[c] = min[c].min(v);
                    max[c] = max[c].max(v);
                }
            }
        }

        if count == 0 {
            return Ok(None);
        }
        let mean = sum.iter().map(|&s| s as f64 / count as f64).collect();
        Ok(Some(MaskedStats {
            count,
            mean,
            min,
            max,
        }))
    }
}
