//! Subsegment selection
//!
//! Contour trees often contain redundant levels: a child that covers nearly
//! all of its parent is the same object traced twice. Selection skips such
//! children and descends into their own children instead.

use saccade_core::Raster;

use crate::error::{SegmentError, SegmentResult};
use crate::segment::Segment;

/// Default area ratio above which a child is considered redundant
pub const DEFAULT_REDUNDANCY_RATIO: f64 = 0.9;

/// Options for [`Segment::get_subsegments`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubsegmentOptions {
    /// A child whose area is at least this fraction of its parent's area
    /// is redundant
    pub redundancy_ratio: f64,
}

impl Default for SubsegmentOptions {
    fn default() -> Self {
        Self {
            redundancy_ratio: DEFAULT_REDUNDANCY_RATIO,
        }
    }
}

impl SubsegmentOptions {
    /// Create options with a custom redundancy ratio.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidOption`] unless the ratio is finite
    /// and in `(0, 1]`.
    pub fn new(redundancy_ratio: f64) -> SegmentResult<Self> {
        if !redundancy_ratio.is_finite() || redundancy_ratio <= 0.0 || redundancy_ratio > 1.0 {
            return Err(SegmentError::InvalidOption(format!(
                "redundancy ratio must be in (0, 1], got {}",
                redundancy_ratio
            )));
        }
        Ok(Self { redundancy_ratio })
    }
}

impl<M: Raster> Segment<M> {
    /// Meaningful children of this segment, in order.
    ///
    /// Children whose area is at least `redundancy_ratio` times this
    /// segment's area are replaced by their own selected children. Children
    /// with an unknown area are kept.
    pub fn get_subsegments(&self, options: &SubsegmentOptions) -> Vec<&Segment<M>> {
        let mut selected = Vec::new();
        self.collect_subsegments(options, &mut selected);
        selected
    }

    fn collect_subsegments<'a>(
        &'a self,
        options: &SubsegmentOptions,
        selected: &mut Vec<&'a Segment<M>>,
    ) {
        let parent_area = self.area();
        for child in &self.subsegments {
            let redundant = match (child.area(), parent_area) {
                (Some(c), Some(p)) => c as f64 >= options.redundancy_ratio * p as f64,
                _ => false,
            };
            if redundant {
                child.collect_subsegments(options, selected);
            } else {
                selected.push(child);
            }
        }
    }
}
