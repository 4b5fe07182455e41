//! Segment geometry
//!
//! Cropping, scaling and translation of whole segments. Every operation
//! returns a new segment (or `None` when nothing of it is left) and carries
//! the mask, image and subsegments along with the region.

use saccade_core::{Point, Raster, Rect, Region, Size};
use tracing::debug;

use crate::error::{SegmentError, SegmentResult};
use crate::segment::Segment;

/// Whether a known size of `region` is zero or negative
pub(crate) fn is_degenerate(region: &Region) -> bool {
    region.w.is_some_and(|w| w <= 0) || region.h.is_some_and(|h| h <= 0)
}

/// Raster size needed to hold `region`'s pixels
fn pixel_size(region: &Region) -> SegmentResult<Size> {
    match (region.width(), region.height()) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Ok(Size::new(w as u32, h as u32)),
        _ => Err(SegmentError::IncompleteRegion(*region)),
    }
}

fn resize_if_needed<M: Raster>(raster: &M, size: Size, smooth: bool) -> SegmentResult<M> {
    if raster.size() == size {
        Ok(raster.clone())
    } else if smooth {
        Ok(raster.resize_smooth_to(size)?)
    } else {
        Ok(raster.resize_to(size)?)
    }
}

impl<M: Raster> Segment<M> {
    pub(crate) fn has_pixels(&self) -> bool {
        self.mask.is_some() || self.image.is_some()
    }

    /// Copy of this segment moved to `region`, with mask and image
    /// resampled to the new size. Masks are resampled by nearest neighbor,
    /// images by interpolation. Subsegments are left as they are.
    ///
    /// `Ok(None)` when `region` has a non-positive size.
    pub(crate) fn resampled(&self, region: Region) -> SegmentResult<Option<Self>> {
        if is_degenerate(&region) {
            debug!(?region, "segment resampled to an empty size");
            return Ok(None);
        }
        let mut out = self.derive();
        out.region = region;
        if self.has_pixels() {
            let size = pixel_size(&region)?;
            out.mask = self
                .mask
                .as_ref()
                .map(|m| resize_if_needed(m, size, false))
                .transpose()?;
            out.image = self
                .image
                .as_ref()
                .map(|m| resize_if_needed(m, size, true))
                .transpose()?;
        }
        Ok(Some(out))
    }

    /// Crop the segment to an image of `bounds` size.
    ///
    /// Mask and image are cut at the cropped region's offset within the old
    /// region. Subsegments are cropped too; those that fall outside are
    /// dropped. Returns `Ok(None)` when the segment lies outside `bounds`.
    ///
    /// # Examples
    ///
    /// ```
    /// use saccade_core::{Mat, Region, Size};
    /// use saccade_segment::Segment;
    ///
    /// let seg = Segment::new(Region::new(10, 10, 20, 20))
    ///     .with_mask(Mat::filled(20, 20, 1, 255).unwrap());
    /// let cropped = seg.crop_to_input(Size::new(15, 15)).unwrap().unwrap();
    /// assert_eq!(*cropped.region(), Region::new(10, 10, 5, 5));
    /// assert_eq!(cropped.area(), Some(25));
    /// ```
    pub fn crop_to_input(&self, bounds: Size) -> SegmentResult<Option<Self>> {
        let Some(region) = self.region.crop(bounds) else {
            debug!(region = ?self.region, ?bounds, "segment cropped away");
            return Ok(None);
        };

        let mut out = self.derive();
        out.region = region;
        if region != self.region && self.has_pixels() {
            let size = pixel_size(&region)?;
            let dx = region.x.zip(self.region.x).map_or(0, |(n, o)| n - o);
            let dy = region.y.zip(self.region.y).map_or(0, |(n, o)| n - o);
            let rect = Rect::new_unchecked(dx, dy, size.width as i32, size.height as i32);
            out.mask = self.mask.as_ref().map(|m| m.sub_rect(&rect)).transpose()?;
            out.image = self.image.as_ref().map(|m| m.sub_rect(&rect)).transpose()?;
        }

        let mut children = Vec::with_capacity(self.subsegments.len());
        for child in &self.subsegments {
            if let Some(c) = child.crop_to_input(bounds)? {
                children.push(c);
            }
        }
        out.subsegments = children;
        Ok(Some(out))
    }

    /// Crop to the recorded input size, if there is one.
    pub(crate) fn recrop(self) -> SegmentResult<Option<Self>> {
        match self.input_size {
            Some(bounds) => self.crop_to_input(bounds),
            None => Ok(Some(self)),
        }
    }

    /// Scale the segment about its center.
    ///
    /// The region is scaled with [`Region::scale`], mask and image are
    /// resampled to the new size, and subsegments are scaled about the same
    /// center so they stay in place relative to the parent. The result is
    /// re-cropped to the input size when one is known.
    ///
    /// Returns `Ok(None)` when a dimension rounds to zero or less.
    pub fn scale(&self, factor: f64) -> SegmentResult<Option<Self>> {
        let Some(scaled) = self.scale_inner(factor, None)? else {
            return Ok(None);
        };
        scaled.recrop()
    }

    fn scale_inner(&self, factor: f64, anchor: Option<Point>) -> SegmentResult<Option<Self>> {
        let region = match anchor {
            Some(a) => self.region.scale_about(factor, a),
            None => self.region.scale(factor),
        };
        let Some(mut out) = self.resampled(region)? else {
            return Ok(None);
        };
        let anchor = anchor.or(self.region.center());
        let mut children = Vec::with_capacity(self.subsegments.len());
        for child in &self.subsegments {
            if let Some(c) = child.scale_inner(factor, anchor)? {
                children.push(c);
            }
        }
        out.subsegments = children;
        Ok(Some(out))
    }

    fn shifted(&self, dx: Option<i32>, dy: Option<i32>) -> Self {
        let mut out = self.derive();
        out.region = self.region.translate(dx, dy);
        out.subsegments = self
            .subsegments
            .iter()
            .map(|c| c.shifted(dx, dy))
            .collect();
        out
    }

    fn moved_to(&self, region: Region) -> SegmentResult<Option<Self>> {
        let dx = region.x.zip(self.region.x).map(|(n, o)| n - o);
        let dy = region.y.zip(self.region.y).map(|(n, o)| n - o);
        let mut out = self.shifted(dx, dy);
        out.region = region;
        out.recrop()
    }

    /// Shift the segment (and its subsegments) by `(dx, dy)`.
    ///
    /// Mask and image are carried unchanged; the result is re-cropped to the
    /// input size when one is known.
    pub fn translate(&self, dx: Option<i32>, dy: Option<i32>) -> SegmentResult<Option<Self>> {
        self.moved_to(self.region.translate(dx, dy))
    }

    /// Move the segment's top-left corner; see [`Region::translate_to`].
    pub fn translate_to(&self, x: Option<i32>, y: Option<i32>) -> SegmentResult<Option<Self>> {
        self.moved_to(self.region.translate_to(x, y))
    }

    /// Move the segment's center; see [`Region::translate_center_to`].
    pub fn translate_center_to(
        &self,
        x: Option<i32>,
        y: Option<i32>,
    ) -> SegmentResult<Option<Self>> {
        self.moved_to(self.region.translate_center_to(x, y))
    }

    /// Edge distance between the two segments' regions
    pub fn distance(&self, other: &Segment<M>) -> f64 {
        self.region.distance(&other.region)
    }

    /// Whether the two segments' regions overlap
    pub fn intersects(&self, other: &Segment<M>) -> bool {
        self.region.intersects(&other.region)
    }

    /// Whether `other`'s region lies inside this segment's region
    pub fn contains(&self, other: &Segment<M>) -> bool {
        self.region.contains(&other.region)
    }
}
