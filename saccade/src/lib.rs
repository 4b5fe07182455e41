//! Saccade - Geometry core for visual attention
//!
//! Attention components look at parts of an image: a downsampled frame, a
//! crop around a point of interest, a crop of that crop. Whatever they find
//! there has to be reported in the coordinates of the original image. This
//! crate provides the pieces for that bookkeeping:
//!
//! - [`Region`]: a rectangle whose fields may be unknown
//! - [`transform::ViewTransform`]: an invertible chain of resizes and crops
//! - [`segment::Segment`]: a region with mask, image and subsegments that
//!   can move between views
//!
//! # Example
//!
//! ```
//! use saccade::{Point, Region, Size};
//! use saccade::segment::Segment;
//! use saccade::transform::{ResizeTarget, ViewTransform};
//!
//! // Look at the top-left quarter of a 200x200 frame at half resolution
//! let vt = ViewTransform::new(Size::new(200, 200))
//!     .add_submat(&Region::new(0, 0, 100, 100), false)
//!     .unwrap()
//!     .unwrap()
//!     .add_resize(ResizeTarget::Factor(0.5))
//!     .unwrap();
//!
//! // Something found at (10, 10) in the 50x50 view
//! let found: Segment = Segment::new(Region::new(10, 10, 5, 5)).with_view_transform(vt.clone());
//! let base = found.base_segment().unwrap().unwrap();
//! assert_eq!(*base.region(), Region::new(20, 20, 10, 10));
//! assert_eq!(vt.invert().map_point(Point::new(10, 10)), Point::new(20, 20));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use saccade_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use saccade_segment as segment;
pub use saccade_transform as transform;
