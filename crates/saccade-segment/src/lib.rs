//! saccade-segment - Perceptual segments for saccade
//!
//! A [`Segment`] is a candidate object found by some segmentation process:
//! a [`Region`](saccade_core::Region) plus an optional membership mask, an
//! image snapshot, nested subsegments, and the
//! [`ViewTransform`](saccade_transform::ViewTransform) of the view it was
//! found in.
//!
//! # Operations
//!
//! - Geometry: `crop_to_input`, `scale`, `translate`, `translate_to`,
//!   `translate_center_to`, `distance`, `intersects`, `contains`
//! - Views: `apply_transform`, `base_segment`, `base_region`
//! - Merging: `union`
//! - Contour trees: `get_subsegments`
//! - Measurement: `area`, `sample_stats`, `masked_stats`

mod error;
mod geometry;
mod segment;
mod subsegments;
mod transform;
mod union;

pub use error::{SegmentError, SegmentResult};
pub use segment::Segment;
pub use subsegments::{DEFAULT_REDUNDANCY_RATIO, SubsegmentOptions};
