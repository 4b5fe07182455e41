//! Region relationship operations
//!
//! Containment, intersection tests, edge distance, and the variadic
//! intersection/union envelopes. All of these tolerate partial regions:
//! an axis on which a region has no location is treated as unbounded.

use super::Region;

/// Half-open extent `[start, end)` of a region on one axis.
///
/// `None` when the region has no location on that axis.
#[inline]
fn span(start: Option<i32>, len: Option<i32>) -> Option<(i32, i32)> {
    start.map(|s| (s, s.saturating_add(len.unwrap_or(1))))
}

/// Gap between two spans; 0 when they overlap or touch.
#[inline]
fn gap(a: Option<(i32, i32)>, b: Option<(i32, i32)>) -> i32 {
    match (a, b) {
        (Some((a0, a1)), Some((b0, b1))) => {
            if b0 >= a1 {
                b0.saturating_sub(a1)
            } else if a0 >= b1 {
                a0.saturating_sub(b1)
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// One axis of a region: location and stored length.
type Axis = (Option<i32>, Option<i32>);

fn axes(r: &Region) -> [Axis; 2] {
    [(r.x, r.w), (r.y, r.h)]
}

/// Intersect one axis across all inputs. `None` means the overlap is empty.
fn intersect_axis(inputs: &[Axis]) -> Option<Axis> {
    let located: Vec<(i32, i32)> = inputs.iter().filter_map(|&(s, l)| span(s, l)).collect();
    if located.is_empty() {
        let len = inputs.iter().filter_map(|&(_, l)| l).min();
        return match len {
            Some(l) if l <= 0 => None,
            _ => Some((None, len)),
        };
    }
    let lo = located.iter().map(|&(s, _)| s).max()?;
    let hi = located.iter().map(|&(_, e)| e).min()?;
    if hi.saturating_sub(lo) <= 0 {
        return None;
    }
    let sized = inputs.iter().any(|&(s, l)| s.is_some() && l.is_some());
    Some((Some(lo), sized.then_some(hi - lo)))
}

/// Envelope of one axis across all inputs.
fn union_axis(inputs: &[Axis]) -> Axis {
    if inputs.iter().all(|&(s, _)| s.is_none()) {
        return (None, inputs.iter().filter_map(|&(_, l)| l).max());
    }
    if inputs.iter().any(|&(s, _)| s.is_none()) {
        return (None, None);
    }
    let spans: Vec<(i32, i32)> = inputs.iter().filter_map(|&(s, l)| span(s, l)).collect();
    let lo = spans.iter().map(|&(s, _)| s).min().unwrap_or(0);
    let hi = spans.iter().map(|&(_, e)| e).max().unwrap_or(lo);
    let sized = inputs.iter().any(|&(_, l)| l.is_some());
    let len = (sized || hi.saturating_sub(lo) != 1).then_some(hi.saturating_sub(lo));
    (Some(lo), len)
}

impl Region {
    /// Check if `other` lies completely inside this region.
    ///
    /// Axes on which this region has no location are unconstrained. If this
    /// region is located on an axis but `other` is not, `other` cannot be
    /// shown to be inside and the result is `false`.
    pub fn contains(&self, other: &Region) -> bool {
        let axis_contains = |a: Option<(i32, i32)>, b: Option<(i32, i32)>| match (a, b) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some((a0, a1)), Some((b0, b1))) => b0 >= a0 && b1 <= a1,
        };
        axis_contains(span(self.x, self.w), span(other.x, other.w))
            && axis_contains(span(self.y, self.h), span(other.y, other.h))
    }

    /// Check if the projections of the two regions overlap on both axes.
    ///
    /// An axis where either region has no location counts as overlapping.
    pub fn intersects(&self, other: &Region) -> bool {
        let axis_overlaps = |a: Option<(i32, i32)>, b: Option<(i32, i32)>| match (a, b) {
            (Some((a0, a1)), Some((b0, b1))) => a0 < b1 && b0 < a1,
            _ => true,
        };
        axis_overlaps(span(self.x, self.w), span(other.x, other.w))
            && axis_overlaps(span(self.y, self.h), span(other.y, other.h))
    }

    /// Distance between the nearest edges of two regions.
    ///
    /// Right and bottom edges are exclusive, so regions that touch have a
    /// distance of 0. When the regions are separated on both axes the two
    /// gaps are combined as a Euclidean distance; otherwise the larger gap
    /// is returned. Axes unknown on either side contribute nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use saccade_core::Region;
    ///
    /// let a = Region::new(0, 0, 10, 10);
    /// let b = Region::new(20, 0, 10, 10);
    /// assert_eq!(a.distance(&b), 10.0);
    /// ```
    pub fn distance(&self, other: &Region) -> f64 {
        let dx = gap(span(self.x, self.w), span(other.x, other.w)) as f64;
        let dy = gap(span(self.y, self.h), span(other.y, other.h)) as f64;
        if dx > 0.0 && dy > 0.0 {
            dx.hypot(dy)
        } else {
            dx.max(dy)
        }
    }

    /// Overlap of two regions; see [`Region::intersection_of`].
    pub fn intersection(&self, other: &Region) -> Option<Region> {
        Region::intersection_of(&[*self, *other])
    }

    /// Bounding envelope of two regions; see [`Region::union_of`].
    pub fn union(&self, other: &Region) -> Region {
        let [(x, w), (y, h)] = [0, 1].map(|i| union_axis(&[axes(self)[i], axes(other)[i]]));
        Region { x, y, w, h }
    }

    /// Overlap of one or more regions.
    ///
    /// Regions without a location on an axis do not constrain that axis.
    /// If no input is located on an axis, the result keeps the smallest
    /// known size there. Returns `None` for an empty input or when the
    /// overlap is empty on either axis.
    pub fn intersection_of(regions: &[Region]) -> Option<Region> {
        if regions.is_empty() {
            return None;
        }
        let xs: Vec<Axis> = regions.iter().map(|r| axes(r)[0]).collect();
        let ys: Vec<Axis> = regions.iter().map(|r| axes(r)[1]).collect();
        let (x, w) = intersect_axis(&xs)?;
        let (y, h) = intersect_axis(&ys)?;
        Some(Region { x, y, w, h })
    }

    /// Bounding envelope of one or more regions.
    ///
    /// If any input lacks a location on an axis, the envelope is unbounded
    /// there and both location and size are unknown. If no input is located
    /// on an axis, the result keeps the largest known size. Returns `None`
    /// only for an empty input.
    pub fn union_of(regions: &[Region]) -> Option<Region> {
        if regions.is_empty() {
            return None;
        }
        let xs: Vec<Axis> = regions.iter().map(|r| axes(r)[0]).collect();
        let ys: Vec<Axis> = regions.iter().map(|r| axes(r)[1]).collect();
        let (x, w) = union_axis(&xs);
        let (y, h) = union_axis(&ys);
        Some(Region { x, y, w, h })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let outer = Region::new(0, 0, 100, 100);
        assert!(outer.contains(&Region::new(10, 10, 20, 20)));
        assert!(outer.contains(&Region::new(0, 0, 100, 100)));
        assert!(!outer.contains(&Region::new(90, 90, 20, 20)));
        assert!(outer.contains(&Region::point(99, 99)));
        assert!(!outer.contains(&Region::sized(5, 5)));

        // Unbounded on y
        let band = Region {
            x: Some(0),
            w: Some(10),
            ..Default::default()
        };
        assert!(band.contains(&Region::new(2, -500, 3, 1000)));
        assert!(!band.contains(&Region::new(8, 0, 3, 1)));
        assert!(Region::default().contains(&Region::sized(1, 1)));
    }

    #[test]
    fn test_intersects() {
        let a = Region::new(0, 0, 10, 10);
        assert!(a.intersects(&Region::new(5, 5, 10, 10)));
        assert!(!a.intersects(&Region::new(10, 0, 5, 5)));
        assert!(a.intersects(&Region::sized(3, 3)));
        let column = Region {
            x: Some(20),
            w: Some(2),
            ..Default::default()
        };
        assert!(!a.intersects(&column));
    }

    #[test]
    fn test_distance_conventions() {
        let a = Region::new(0, 0, 10, 10);
        assert_eq!(a.distance(&Region::new(20, 0, 10, 10)), 10.0);
        assert_eq!(a.distance(&Region::new(10, 0, 10, 10)), 0.0);
        assert_eq!(a.distance(&Region::new(5, 5, 10, 10)), 0.0);
        assert_eq!(a.distance(&Region::new(13, 14, 1, 1)), 5.0);
        assert_eq!(a.distance(&Region::new(0, 30, 1, 1)), 20.0);
        assert_eq!(Region::new(20, 0, 10, 10).distance(&a), 10.0);
        assert_eq!(a.distance(&Region::sized(1, 1)), 0.0);
    }

    #[test]
    fn test_relations_near_coordinate_limit() {
        let a = Region::new(0, 0, 10, 10);
        let far = Region::new(i32::MAX - 2, 0, 10, 10);
        assert!(!a.intersects(&far));
        assert_eq!(a.distance(&far), (i32::MAX - 12) as f64);
        assert_eq!(a.intersection(&far), None);
        assert_eq!(a.union(&far), Region::new(0, 0, i32::MAX, 10));
    }

    #[test]
    fn test_intersection_basic() {
        let a = Region::new(60, 60, 40, 20);
        let b = Region::new(80, 70, 60, 40);
        assert_eq!(a.intersection(&b), Some(Region::new(80, 70, 20, 10)));
        assert_eq!(a.intersection(&Region::new(200, 200, 10, 10)), None);
    }

    #[test]
    fn test_intersection_partial() {
        let a = Region::new(0, 0, 10, 10);
        let size_only = Region::sized(4, 4);
        assert_eq!(a.intersection(&size_only), Some(a));

        let r = Region::intersection_of(&[Region::sized(4, 8), Region::sized(6, 2)]);
        assert_eq!(r, Some(Region::sized(4, 2)));

        assert_eq!(
            Region::point(3, 3).intersection(&a),
            Some(Region::new(3, 3, 1, 1))
        );
        assert_eq!(
            Region::point(3, 3).intersection(&Region::point(3, 3)),
            Some(Region::point(3, 3))
        );
        assert_eq!(Region::intersection_of(&[]), None);
    }

    #[test]
    fn test_union_basic() {
        let a = Region::new(60, 60, 40, 20);
        let b = Region::new(80, 70, 60, 40);
        assert_eq!(a.union(&b), Region::new(60, 60, 80, 50));

        let u = Region::union_of(&[a, b, Region::new(0, 200, 1, 1)]).unwrap();
        assert_eq!(u, Region::new(0, 60, 140, 141));
    }

    #[test]
    fn test_union_partial() {
        let a = Region::new(0, 0, 10, 10);
        let u = a.union(&Region::sized(30, 5));
        assert_eq!(u, Region::default());

        let u = Region::union_of(&[Region::sized(4, 8), Region::sized(6, 2)]).unwrap();
        assert_eq!(u, Region::sized(6, 8));

        assert_eq!(Region::point(2, 2).union(&Region::point(2, 2)), Region::point(2, 2));
        assert_eq!(
            Region::point(2, 2).union(&Region::point(4, 3)),
            Region::new(2, 2, 3, 2)
        );
        assert_eq!(Region::union_of(&[]), None);
    }
}
