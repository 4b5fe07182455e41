//! Segment union
//!
//! Merges several segments into one whose region is the union envelope.
//! Masks are OR-ed into a shared canvas, one covered sub-rectangle at a
//! time, and images are copied through their masks, each at its offset
//! inside the union region.

use saccade_core::{Raster, Rect, Region, Size};
use tracing::warn;

use crate::error::{SegmentError, SegmentResult};
use crate::segment::Segment;

impl<M: Raster> Segment<M> {
    /// Union of this segment with `others`.
    ///
    /// The region is [`Region::union_of`] all regions. Fields other than
    /// region, mask and image (subsegments, view transform, input size) are
    /// taken from `self`. A segment without a mask contributes its whole
    /// box to the union mask.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::IncompleteRegion`] when pixel data has to be
    /// merged but the union region (or a contributing region) is not fully
    /// specified, and [`SegmentError::Core`] when the rasters disagree on
    /// their sample layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use saccade_core::{Mat, Region};
    /// use saccade_segment::Segment;
    ///
    /// let a = Segment::new(Region::new(0, 0, 4, 4)).with_mask(Mat::filled(4, 4, 1, 255).unwrap());
    /// let b = Segment::new(Region::new(2, 2, 4, 4)).with_mask(Mat::filled(4, 4, 1, 255).unwrap());
    /// let u = a.union(&[b]).unwrap();
    /// assert_eq!(*u.region(), Region::new(0, 0, 6, 6));
    /// assert_eq!(u.area(), Some(16 + 16 - 4));
    /// ```
    pub fn union(&self, others: &[Segment<M>]) -> SegmentResult<Self> {
        let all: Vec<&Segment<M>> = std::iter::once(self).chain(others).collect();
        let regions: Vec<Region> = all.iter().map(|s| s.region).collect();
        let region = Region::union_of(&regions).unwrap_or(self.region);

        let mut out = self.derive();
        out.region = region;

        let mask_template = all.iter().find_map(|s| s.mask.as_ref());
        let image_template = all.iter().find_map(|s| s.image.as_ref());
        if mask_template.is_none() && image_template.is_none() {
            return Ok(out);
        }

        let rect = region
            .to_rect()
            .ok_or(SegmentError::IncompleteRegion(region))?;
        if rect.is_empty() {
            warn!(?region, "union of segments has an empty canvas");
            return Err(SegmentError::IncompleteRegion(region));
        }
        let size = Size::new(rect.w as u32, rect.h as u32);

        let offset = |s: &Segment<M>| -> SegmentResult<(i32, i32, Size)> {
            let r = s
                .region
                .to_rect()
                .ok_or(SegmentError::IncompleteRegion(s.region))?;
            let own = Size::new(r.w.max(0) as u32, r.h.max(0) as u32);
            Ok((r.x - rect.x, r.y - rect.y, own))
        };

        if let Some(template) = mask_template {
            let mut canvas = template.blank(size)?;
            for s in &all {
                let (dx, dy, own) = offset(s)?;
                if own.is_empty() {
                    continue;
                }
                let piece = match &s.mask {
                    Some(m) => m.clone(),
                    None => template.full(own)?,
                };
                // OR only the part of the canvas under this segment
                let under =
                    Rect::new_unchecked(dx, dy, piece.width() as i32, piece.height() as i32);
                let merged = canvas.sub_rect(&under)?.or(&piece)?;
                canvas = canvas.paste(&merged, dx, dy, None)?;
            }
            out.mask = Some(canvas);
        }

        if let Some(template) = image_template {
            let mut canvas = template.blank(size)?;
            for s in &all {
                if let Some(img) = &s.image {
                    let (dx, dy, _) = offset(s)?;
                    canvas = canvas.paste(img, dx, dy, s.mask.as_ref())?;
                }
            }
            out.image = Some(canvas);
        }

        Ok(out)
    }
}
