//! Segment - A candidate perceptual object
//!
//! A segment is a [`Region`] plus optional pixel data: a membership mask,
//! an image snapshot, a tree of nested subsegments, and the view transform
//! that relates its coordinates to the original image.
//!
//! # Ownership model
//!
//! Segments are values. Every operation returns a new segment; the only
//! interior state is the memoized base segment, which is write-once and
//! always derived from the segment's own fields.

use std::sync::{Arc, OnceLock};

use saccade_core::{Mat, MaskedStats, Point, Raster, Region, Size};
use saccade_transform::ViewTransform;

use crate::error::{SegmentError, SegmentResult};

/// A candidate perceptual object
///
/// `M` is the raster type used for masks and images.
///
/// # Examples
///
/// ```
/// use saccade_core::{Mat, Region};
/// use saccade_segment::Segment;
///
/// let input = Mat::filled(64, 64, 3, 200).unwrap();
/// let mask = Mat::filled(8, 4, 1, 255).unwrap();
/// let seg = Segment::prepare(Region::new(10, 12, 8, 4), Some(mask), Some(&input), None).unwrap();
/// assert_eq!(seg.area(), Some(32));
/// assert_eq!(seg.image().map(|i| i.width()), Some(8));
/// ```
#[derive(Debug, Clone)]
pub struct Segment<M = Mat> {
    pub(crate) region: Region,
    pub(crate) mask: Option<M>,
    pub(crate) image: Option<M>,
    pub(crate) subsegments: Vec<Segment<M>>,
    pub(crate) view_transform: Option<ViewTransform>,
    pub(crate) input_size: Option<Size>,
    pub(crate) origin: Option<Arc<Segment<M>>>,
    pub(crate) base: OnceLock<Option<Arc<Segment<M>>>>,
}

impl<M: Raster> Segment<M> {
    /// Create a segment with only a region
    pub fn new(region: Region) -> Self {
        Self {
            region,
            mask: None,
            image: None,
            subsegments: Vec::new(),
            view_transform: None,
            input_size: None,
            origin: None,
            base: OnceLock::new(),
        }
    }

    /// Build a segment from segmentation output.
    ///
    /// When `input` is given, the image snapshot is copied out of it at
    /// `region` and the segment's input size is the input's size. Otherwise
    /// the input size is taken from `view_transform`'s final size, if any.
    ///
    /// # Errors
    ///
    /// - [`SegmentError::IncompleteRegion`] if pixel data is involved and
    ///   `region` is not fully specified
    /// - [`SegmentError::SizeMismatch`] if `mask` is not the region's size
    /// - [`SegmentError::Core`] if `region` does not lie inside `input`
    pub fn prepare(
        region: Region,
        mask: Option<M>,
        input: Option<&M>,
        view_transform: Option<ViewTransform>,
    ) -> SegmentResult<Self> {
        let rect = if mask.is_some() || input.is_some() {
            Some(
                region
                    .to_rect()
                    .ok_or(SegmentError::IncompleteRegion(region))?,
            )
        } else {
            None
        };

        if let (Some(m), Some(rect)) = (&mask, rect) {
            let expected = Size::new(rect.w.max(0) as u32, rect.h.max(0) as u32);
            if m.size() != expected {
                return Err(SegmentError::SizeMismatch {
                    expected,
                    actual: m.size(),
                });
            }
        }

        let image = match (input, rect) {
            (Some(input), Some(rect)) => Some(input.sub_rect(&rect)?),
            _ => None,
        };
        let input_size = input
            .map(Raster::size)
            .or(view_transform.as_ref().map(ViewTransform::final_size));

        Ok(Self {
            mask,
            image,
            view_transform,
            input_size,
            ..Self::new(region)
        })
    }

    /// Set the mask (unchecked; see [`Segment::prepare`])
    pub fn with_mask(self, mask: M) -> Self {
        Self {
            mask: Some(mask),
            base: OnceLock::new(),
            ..self
        }
    }

    /// Set the image snapshot (unchecked; see [`Segment::prepare`])
    pub fn with_image(self, image: M) -> Self {
        Self {
            image: Some(image),
            base: OnceLock::new(),
            ..self
        }
    }

    /// Set the child segments
    pub fn with_subsegments(self, subsegments: Vec<Segment<M>>) -> Self {
        Self {
            subsegments,
            base: OnceLock::new(),
            ..self
        }
    }

    /// Set the view transform relating this segment to the original image
    pub fn with_view_transform(self, view_transform: ViewTransform) -> Self {
        Self {
            view_transform: Some(view_transform),
            base: OnceLock::new(),
            ..self
        }
    }

    /// Set the size of the image this segment lives in
    pub fn with_input_size(self, input_size: Size) -> Self {
        Self {
            input_size: Some(input_size),
            base: OnceLock::new(),
            ..self
        }
    }

    /// Copy of this segment with new fields and an empty base cache.
    pub(crate) fn derive(&self) -> Self {
        Self {
            origin: None,
            base: OnceLock::new(),
            ..self.clone()
        }
    }

    /// The segment's region
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The membership mask, if any
    pub fn mask(&self) -> Option<&M> {
        self.mask.as_ref()
    }

    /// The image snapshot, if any
    pub fn image(&self) -> Option<&M> {
        self.image.as_ref()
    }

    /// Child segments, in order
    pub fn subsegments(&self) -> &[Segment<M>] {
        &self.subsegments
    }

    /// The view transform relating this segment to the original image
    pub fn view_transform(&self) -> Option<&ViewTransform> {
        self.view_transform.as_ref()
    }

    /// Size of the image this segment lives in, if known
    pub fn input_size(&self) -> Option<Size> {
        self.input_size
    }

    /// For a base segment, the transformed segment it was derived from
    pub fn origin(&self) -> Option<&Segment<M>> {
        self.origin.as_deref()
    }

    /// Center of the region
    pub fn center(&self) -> Option<Point> {
        self.region.center()
    }

    /// Radius of the region
    pub fn radius(&self) -> Option<f64> {
        self.region.radius()
    }

    /// Number of member pixels: the mask count when masked, else the
    /// region's area.
    pub fn area(&self) -> Option<i64> {
        match &self.mask {
            Some(m) => Some(m.count_nonzero() as i64),
            None => self.region.area(),
        }
    }

    /// Run an externally supplied measurement over the image snapshot.
    ///
    /// `f` receives the image and the mask (if any). Returns `None` when
    /// the segment carries no image.
    pub fn sample_stats<T, F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&M, Option<&M>) -> T,
    {
        self.image.as_ref().map(|img| f(img, self.mask.as_ref()))
    }
}

impl Segment<Mat> {
    /// Per-channel statistics of the image pixels inside the mask.
    pub fn masked_stats(&self) -> SegmentResult<Option<MaskedStats>> {
        match self.sample_stats(|img, mask| img.masked_stats(mask)) {
            Some(stats) => Ok(stats?),
            None => Ok(None),
        }
    }
}

impl<M: Raster + PartialEq> PartialEq for Segment<M> {
    /// Memoized and provenance fields do not take part in equality.
    fn eq(&self, other: &Self) -> bool {
        self.region == other.region
            && self.mask == other.mask
            && self.image == other.image
            && self.subsegments == other.subsegments
            && self.view_transform == other.view_transform
            && self.input_size == other.input_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_validates_mask() {
        let mask = Mat::new_mask(4, 4).unwrap();
        let err = Segment::prepare(Region::new(0, 0, 5, 4), Some(mask.clone()), None, None);
        assert!(matches!(err, Err(SegmentError::SizeMismatch { .. })));
        let err = Segment::prepare(Region::point(0, 0), Some(mask), None, None);
        assert!(matches!(err, Err(SegmentError::IncompleteRegion(_))));
    }

    #[test]
    fn test_prepare_without_pixels() {
        let seg: Segment = Segment::prepare(Region::point(3, 3), None, None, None).unwrap();
        assert_eq!(seg.area(), Some(1));
        assert!(seg.image().is_none());
        assert_eq!(seg.input_size(), None);
    }

    #[test]
    fn test_prepare_samples_image() {
        let data = (0..100).collect();
        let input = Mat::from_vec(10, 10, 1, data).unwrap();
        let seg = Segment::prepare(Region::new(2, 3, 2, 2), None, Some(&input), None).unwrap();
        assert_eq!(seg.image().unwrap().data(), &[32, 33, 42, 43]);
        assert_eq!(seg.input_size(), Some(Size::new(10, 10)));

        let outside = Segment::prepare(Region::new(9, 9, 2, 2), None, Some(&input), None);
        assert!(matches!(outside, Err(SegmentError::Core(_))));
    }

    #[test]
    fn test_prepare_input_size_from_transform() {
        let vt = ViewTransform::new(Size::new(40, 30));
        let seg: Segment = Segment::prepare(Region::new(0, 0, 2, 2), None, None, Some(vt)).unwrap();
        assert_eq!(seg.input_size(), Some(Size::new(40, 30)));
    }

    #[test]
    fn test_area_prefers_mask() {
        let mask = Mat::from_vec(2, 2, 1, vec![1, 0, 0, 1]).unwrap();
        let seg = Segment::new(Region::new(0, 0, 2, 2)).with_mask(mask);
        assert_eq!(seg.area(), Some(2));
        let seg: Segment = Segment::new(Region::new(0, 0, 2, 3));
        assert_eq!(seg.area(), Some(6));
        let seg: Segment = Segment::new(Region::sized(2, 3).translate_to(None, None));
        assert_eq!(seg.area(), Some(6));
        let seg: Segment = Segment::new(Region::default());
        assert_eq!(seg.area(), None);
    }

    #[test]
    fn test_masked_stats() {
        let img = Mat::from_vec(2, 1, 1, vec![10, 30]).unwrap();
        let mask = Mat::from_vec(2, 1, 1, vec![0, 1]).unwrap();
        let seg = Segment::new(Region::new(0, 0, 2, 1))
            .with_image(img)
            .with_mask(mask);
        let stats = seg.masked_stats().unwrap().unwrap();
        assert_eq!(stats.mean, vec![30.0]);
        let bare: Segment = Segment::new(Region::new(0, 0, 2, 1));
        assert_eq!(bare.masked_stats().unwrap(), None);
    }

    #[test]
    fn test_equality_ignores_cache() {
        let a: Segment = Segment::new(Region::new(1, 1, 2, 2));
        let b = a.clone();
        let _ = a.base.set(None);
        assert_eq!(a, b);
    }
}
