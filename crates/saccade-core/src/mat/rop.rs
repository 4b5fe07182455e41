//! Bitwise raster operations
//!
//! Used to merge membership masks; any non-zero sample counts as set.

use super::Mat;
use crate::error::{Error, Result};

impl Mat {
    /// Bitwise OR of two rasters of identical shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the sizes or channel counts differ.
    pub fn or(&self, other: &Mat) -> Result<Mat> {
        self.check_same_shape(other)?;
        let data = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(a, b)| a | b)
            .collect();
        Mat::from_vec(self.width(), self.height(), self.channels(), data)
    }

    fn check_same_shape(&self, other: &Mat) -> Result<()> {
        if self.size() != other.size() {
            return Err(Error::IncompatibleSizes(
                self.width(),
                self.height(),
                other.width(),
                other.height(),
            ));
        }
        if self.channels() != other.channels() {
            return Err(Error::IncompatibleChannels(
                self.channels(),
                other.channels(),
            ));
        }
        Ok(())
    }
}
