//! saccade-transform - View transforms for saccade
//!
//! A [`ViewTransform`] is an ordered chain of resize and crop operations
//! describing how a sampled image relates to an original, full-size image.
//! Chains support:
//!
//! - Incremental building (`add_submat`, `add_submat_centered`, `add_resize`)
//! - Exact inversion (`invert`) and composition (`concat`)
//! - Sampling real images (`sample`)
//! - Mapping regions and points through the chain (`map_region`, `map_point`)

mod error;
mod map;
mod op;
mod sample;
mod view;

pub use error::{TransformError, TransformResult};
pub use op::TransformOp;
pub use view::{ResizeTarget, ViewTransform};
