//! Geometric mapping through a view transform
//!
//! Walks a region's coordinates through the chain: crop offsets are
//! subtracted and resizes multiply by the size ratio. Intermediate values
//! stay fractional and are rounded once at the end, so a chain followed by
//! its inverse lands back on the starting pixel.

use saccade_core::{Point, Region};
use tracing::trace;

use crate::op::TransformOp;
use crate::view::ViewTransform;

/// A region with fractional fields, used while walking a chain
#[derive(Debug, Clone, Copy, PartialEq)]
struct RegionF {
    x: Option<f64>,
    y: Option<f64>,
    w: Option<f64>,
    h: Option<f64>,
}

impl RegionF {
    fn from_region(r: &Region) -> Self {
        Self {
            x: r.x.map(f64::from),
            y: r.y.map(f64::from),
            w: r.w.map(f64::from),
            h: r.h.map(f64::from),
        }
    }

    fn apply(self, op: &TransformOp) -> Self {
        match *op {
            TransformOp::Resize {
                old_width,
                old_height,
                width,
                height,
            } => {
                let sx = width as f64 / old_width as f64;
                let sy = height as f64 / old_height as f64;
                Self {
                    x: self.x.map(|v| v * sx),
                    y: self.y.map(|v| v * sy),
                    w: self.w.map(|v| v * sx),
                    h: self.h.map(|v| v * sy),
                }
            }
            TransformOp::Crop { x, y, .. } => Self {
                x: self.x.map(|v| v - x as f64),
                y: self.y.map(|v| v - y as f64),
                ..self
            },
        }
    }

    fn round(self) -> Region {
        let r = |v: Option<f64>| v.map(|v| v.round() as i32);
        Region {
            x: r(self.x),
            y: r(self.y),
            w: r(self.w),
            h: r(self.h),
        }
    }
}

impl ViewTransform {
    /// Express `region` in the coordinates of this chain's final image.
    ///
    /// Unknown fields stay unknown. To map from the final image back to the
    /// source, use `vt.invert().map_region(..)`.
    pub fn map_region(&self, region: &Region) -> Region {
        self.ops()
            .iter()
            .fold(RegionF::from_region(region), |acc, op| {
                let next = acc.apply(op);
                trace!(?op, ?next, "mapped region through op");
                next
            })
            .round()
    }

    /// Express a point in the coordinates of this chain's final image.
    pub fn map_point(&self, point: Point) -> Point {
        let r = self.map_region(&Region::point(point.x, point.y));
        Point::new(r.x.unwrap_or(point.x), r.y.unwrap_or(point.y))
    }
}
