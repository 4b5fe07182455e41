//! Moving segments between views
//!
//! A segment found in a transformed view (a crop of a downsampled frame, for
//! example) records the [`ViewTransform`] that produced that view. From it
//! the segment can be expressed in the original frame ([`Segment::base_segment`])
//! or re-expressed in a different view ([`Segment::apply_transform`]).
//!
//! Only geometry travels through the chain. Masks and images are resampled
//! once to the mapped size and then cut to the view's bounds.

use std::sync::Arc;

use saccade_core::{Raster, Region};
use saccade_transform::ViewTransform;
use tracing::{debug, trace};

use crate::error::SegmentResult;
use crate::segment::Segment;

impl<M: Raster> Segment<M> {
    /// Map this segment through `chain`.
    ///
    /// The region is mapped with [`ViewTransform::map_region`], pixels are
    /// resampled to the mapped size, subsegments follow, and the result
    /// lives in an image of `chain.final_size()`. `scale_factor` scales the
    /// mapped segment about its center before the final crop.
    fn walk(
        &self,
        chain: &ViewTransform,
        scale_factor: Option<f64>,
        record: Option<&ViewTransform>,
    ) -> SegmentResult<Option<Self>> {
        let Some(mapped) = self.mapped(chain, record)? else {
            return Ok(None);
        };
        let mapped = match scale_factor {
            Some(f) => match mapped.scale(f)? {
                Some(s) => s,
                None => return Ok(None),
            },
            None => mapped,
        };
        mapped.crop_to_input(chain.final_size())
    }

    fn mapped(
        &self,
        chain: &ViewTransform,
        record: Option<&ViewTransform>,
    ) -> SegmentResult<Option<Self>> {
        let region = chain.map_region(&self.region);
        trace!(from = ?self.region, to = ?region, "segment walked through chain");
        let Some(mut out) = self.resampled(region)? else {
            return Ok(None);
        };

        let mut children = Vec::with_capacity(self.subsegments.len());
        for child in &self.subsegments {
            if let Some(c) = child.walk(chain, None, record)? {
                children.push(c);
            }
        }
        out.subsegments = children;
        out.view_transform = record.cloned();
        out.input_size = Some(chain.final_size());
        Ok(Some(out))
    }

    /// Express this segment in the view produced by `vt`.
    ///
    /// `vt` must start at the original frame. If this segment already lives
    /// in a transformed view, it is first taken back to the original frame
    /// (through the memoized base segment when one has been computed, or by
    /// prepending the inverse of its own chain). `scale_factor` additionally
    /// scales the result about its center.
    ///
    /// The result records `vt` as its view transform. Returns `Ok(None)`
    /// when the segment falls outside the view or shrinks to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SegmentError::Transform`] when `vt` does not start
    /// at the frame this segment's own chain starts from.
    pub fn apply_transform(
        &self,
        vt: &ViewTransform,
        scale_factor: Option<f64>,
    ) -> SegmentResult<Option<Self>> {
        if let Some(Some(base)) = self.base.get()
            && self
                .view_transform
                .as_ref()
                .is_some_and(|old| old.source() == vt.source())
        {
            trace!("applying transform to cached base segment");
            return base.walk(vt, scale_factor, Some(vt));
        }

        match &self.view_transform {
            Some(old) => {
                let chain = old.invert().concat(vt)?;
                self.walk(&chain, scale_factor, Some(vt))
            }
            None => self.walk(vt, scale_factor, Some(vt)),
        }
    }

    /// This segment in the coordinates of the original image.
    ///
    /// A segment without a view transform is its own base. Otherwise the
    /// base is computed once by walking the inverted chain and memoized;
    /// it records this segment as its [`origin`](Segment::origin) and the
    /// original image size as its input size. `Ok(None)` means the segment
    /// maps to nothing in the original frame.
    ///
    /// # Examples
    ///
    /// ```
    /// use saccade_core::{Region, Size};
    /// use saccade_segment::Segment;
    /// use saccade_transform::{ResizeTarget, ViewTransform};
    ///
    /// let vt = ViewTransform::new(Size::new(100, 100))
    ///     .add_resize(ResizeTarget::Factor(0.5))
    ///     .unwrap();
    /// let seg: Segment = Segment::new(Region::new(5, 5, 10, 10)).with_view_transform(vt);
    /// let base = seg.base_segment().unwrap().unwrap();
    /// assert_eq!(*base.region(), Region::new(10, 10, 20, 20));
    /// ```
    pub fn base_segment(&self) -> SegmentResult<Option<&Segment<M>>> {
        let Some(vt) = &self.view_transform else {
            return Ok(Some(self));
        };
        if let Some(cached) = self.base.get() {
            return Ok(cached.as_deref());
        }

        let base = self.walk(&vt.invert(), None, None)?.map(|mut base| {
            base.origin = Some(Arc::new(self.derive()));
            base.input_size = Some(vt.source());
            Arc::new(base)
        });
        if base.is_none() {
            debug!(region = ?self.region, "segment has no base in the original frame");
        }
        // A concurrent caller may have won; both values are equal.
        let _ = self.base.set(base);
        Ok(self.base.get().and_then(|b| b.as_deref()))
    }

    /// Only the region of [`Self::base_segment`], without touching pixels.
    pub fn base_region(&self) -> Option<Region> {
        match &self.view_transform {
            Some(vt) => vt.invert().map_region(&self.region).crop(vt.source()),
            None => Some(self.region),
        }
    }
}
