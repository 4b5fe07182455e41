//! Region, Point, Size - Partially specified rectangles
//!
//! A [`Region`] describes a rectangle or a point in 2D pixel space where any
//! of the four geometric fields may be unknown. Unknown is not zero: a region
//! with `x`/`y` but no size is a point, a region with a size but no location
//! is a pure size, and queries that need a missing field return `None`.
//!
//! Derived attributes (center, area, radius) are computed on demand. Regions
//! are `Copy` values and every operation returns a new region, so a derived
//! attribute can never go stale.

mod geometry;
mod rect;

pub use rect::Rect;

/// An integer point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of an image or raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered
    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A possibly partial rectangle region
///
/// Equality compares the four stored fields exactly; two regions that only
/// differ in whether a field is absent or zero are not equal.
///
/// # Examples
///
/// ```
/// use saccade_core::{Point, Region};
///
/// let r = Region::new(10, 10, 20, 20);
/// assert_eq!(r.center(), Some(Point::new(19, 19)));
/// assert_eq!(r.area(), Some(400));
///
/// // A point has an implied extent of one pixel
/// let p = Region::point(3, 4);
/// assert_eq!(p.width(), Some(1));
/// assert_eq!(p.w, None);
///
/// // A pure size has no center
/// assert_eq!(Region::sized(8, 8).center(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Left x coordinate
    pub x: Option<i32>,
    /// Top y coordinate
    pub y: Option<i32>,
    /// Stored width
    pub w: Option<i32>,
    /// Stored height
    pub h: Option<i32>,
}

impl Region {
    /// Create a fully specified region
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            w: Some(w),
            h: Some(h),
        }
    }

    /// Create a point region (location, no size)
    pub const fn point(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            w: None,
            h: None,
        }
    }

    /// Create a pure size region (size, no location)
    pub const fn sized(w: i32, h: i32) -> Self {
        Self {
            x: None,
            y: None,
            w: Some(w),
            h: Some(h),
        }
    }

    /// Create a region from a fully specified rectangle
    pub fn from_rect(rect: &Rect) -> Self {
        Self::new(rect.x, rect.y, rect.w, rect.h)
    }

    /// Convert to a [`Rect`] when all four fields are known
    pub fn to_rect(&self) -> Option<Rect> {
        Some(Rect::new_unchecked(self.x?, self.y?, self.w?, self.h?))
    }

    /// Check if all four fields are present
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.w.is_some() && self.h.is_some()
    }

    /// Effective width.
    ///
    /// Returns the stored width, or 1 when only the x coordinate is known.
    #[inline]
    pub fn width(&self) -> Option<i32> {
        self.w.or(self.x.map(|_| 1))
    }

    /// Effective height.
    ///
    /// Returns the stored height, or 1 when only the y coordinate is known.
    #[inline]
    pub fn height(&self) -> Option<i32> {
        self.h.or(self.y.map(|_| 1))
    }

    /// Right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> Option<i32> {
        Some(self.x?.saturating_add(self.width()?))
    }

    /// Bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> Option<i32> {
        Some(self.y?.saturating_add(self.height()?))
    }

    /// Horizontal distance from the left edge to the center pixel
    #[inline]
    pub fn radius_x(&self) -> Option<i32> {
        self.width().map(|w| (w - 1) / 2)
    }

    /// Vertical distance from the top edge to the center pixel
    #[inline]
    pub fn radius_y(&self) -> Option<i32> {
        self.height().map(|h| (h - 1) / 2)
    }

    /// Center x coordinate
    #[inline]
    pub fn center_x(&self) -> Option<i32> {
        Some(self.x? + self.radius_x()?)
    }

    /// Center y coordinate
    #[inline]
    pub fn center_y(&self) -> Option<i32> {
        Some(self.y? + self.radius_y()?)
    }

    /// Center pixel: `(x + (w - 1) / 2, y + (h - 1) / 2)`
    pub fn center(&self) -> Option<Point> {
        Some(Point::new(self.center_x()?, self.center_y()?))
    }

    /// Area in pixels (`width * height`)
    pub fn area(&self) -> Option<i64> {
        Some(self.width()? as i64 * self.height()? as i64)
    }

    /// Average of the half-width and the half-height
    pub fn radius(&self) -> Option<f64> {
        let w = self.width()? as f64;
        let h = self.height()? as f64;
        Some((w / 2.0 + h / 2.0) / 2.0)
    }

    /// Check if a point lies inside the region.
    ///
    /// Axes without a known location do not constrain the point.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        let inside = |start: Option<i32>, len: Option<i32>, v: i32| match start {
            Some(s) => v >= s && v < s.saturating_add(len.unwrap_or(1)),
            None => true,
        };
        inside(self.x, self.w, x) && inside(self.y, self.h, y)
    }

    /// Shift the region by `(dx, dy)`.
    ///
    /// Either delta may be omitted. Unknown coordinates stay unknown.
    pub fn translate(&self, dx: Option<i32>, dy: Option<i32>) -> Region {
        Region {
            x: self.x.map(|x| x + dx.unwrap_or(0)),
            y: self.y.map(|y| y + dy.unwrap_or(0)),
            ..*self
        }
    }

    /// Move the top-left corner to an absolute location.
    ///
    /// Each coordinate is set independently; an omitted coordinate keeps its
    /// current value.
    pub fn translate_to(&self, x: Option<i32>, y: Option<i32>) -> Region {
        Region {
            x: x.or(self.x),
            y: y.or(self.y),
            ..*self
        }
    }

    /// Move the center to an absolute location.
    ///
    /// Axes where the radius is unknown are left untouched.
    pub fn translate_center_to(&self, x: Option<i32>, y: Option<i32>) -> Region {
        let new_x = match (x, self.radius_x()) {
            (Some(cx), Some(rx)) => Some(cx - rx),
            _ => self.x,
        };
        let new_y = match (y, self.radius_y()) {
            (Some(cy), Some(ry)) => Some(cy - ry),
            _ => self.y,
        };
        Region {
            x: new_x,
            y: new_y,
            ..*self
        }
    }

    /// Scale the stored width and height by `factor`, keeping the center fixed.
    ///
    /// Sizes are rounded to the nearest integer. A coordinate is only
    /// re-anchored when the stored size on that axis is known.
    pub fn scale(&self, factor: f64) -> Region {
        let scale_axis = |start: Option<i32>, len: Option<i32>| match len {
            Some(l) => {
                let new_len = (l as f64 * factor).round() as i32;
                let new_start = start.map(|s| s + (l - 1) / 2 - (new_len - 1) / 2);
                (new_start, Some(new_len))
            }
            None => (start, None),
        };
        let (x, w) = scale_axis(self.x, self.w);
        let (y, h) = scale_axis(self.y, self.h);
        Region { x, y, w, h }
    }

    /// Scale the region about an external anchor point.
    ///
    /// Locations move away from (or toward) `anchor` by `factor` and sizes
    /// are multiplied by `factor`; both are rounded.
    pub fn scale_about(&self, factor: f64, anchor: Point) -> Region {
        let about = |v: i32, a: i32| (a as f64 + (v - a) as f64 * factor).round() as i32;
        let len = |l: i32| (l as f64 * factor).round() as i32;
        Region {
            x: self.x.map(|x| about(x, anchor.x)),
            y: self.y.map(|y| about(y, anchor.y)),
            w: self.w.map(len),
            h: self.h.map(len),
        }
    }

    /// Clip the region to an image of the given size.
    ///
    /// Returns `None` if nothing of the region is left inside
    /// `[0, width) x [0, height)`. Axes without a known location only have
    /// their size limited to the image size.
    ///
    /// # Examples
    ///
    /// ```
    /// use saccade_core::{Region, Size};
    ///
    /// let r = Region::new(10, 10, 20, 20);
    /// assert_eq!(r.crop(Size::new(15, 15)), Some(Region::new(10, 10, 5, 5)));
    /// assert_eq!(Region::new(-15, 0, 10, 10).crop(Size::new(3, 3)), None);
    /// ```
    pub fn crop(&self, bounds: Size) -> Option<Region> {
        let (x, w) = crop_axis(self.x, self.w, bounds.width as i32)?;
        let (y, h) = crop_axis(self.y, self.h, bounds.height as i32)?;
        Some(Region { x, y, w, h })
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Region::from_rect(&rect)
    }
}

impl From<Point> for Region {
    fn from(p: Point) -> Self {
        Region::point(p.x, p.y)
    }
}

impl From<Size> for Region {
    fn from(size: Size) -> Self {
        Region::sized(size.width as i32, size.height as i32)
    }
}

/// Clip one axis to `[0, limit)`.
///
/// Returns the new `(start, stored_len)` pair, or `None` when the clipped
/// extent is not positive.
fn crop_axis(
    start: Option<i32>,
    len: Option<i32>,
    limit: i32,
) -> Option<(Option<i32>, Option<i32>)> {
    match start {
        Some(s) => {
            let lo = s.max(0);
            let hi = s.saturating_add(len.unwrap_or(1)).min(limit);
            if hi.saturating_sub(lo) <= 0 {
                return None;
            }
            Some((Some(lo), len.map(|_| hi - lo)))
        }
        None => match len {
            Some(l) => {
                let l = l.min(limit);
                if l <= 0 {
                    return None;
                }
                Some((None, Some(l)))
            }
            None => Some((None, None)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_size() {
        let p = Region::point(5, 6);
        assert_eq!(p.width(), Some(1));
        assert_eq!(p.height(), Some(1));

        let s = Region::sized(4, 3);
        assert_eq!(s.width(), Some(4));
        assert_eq!(s.height(), Some(3));

        let only_x = Region {
            x: Some(2),
            ..Default::default()
        };
        assert_eq!(only_x.width(), Some(1));
        assert_eq!(only_x.height(), None);
        assert_eq!(Region::default().width(), None);
    }

    #[test]
    fn test_center_formula() {
        for (x, y, w, h) in [(0, 0, 1, 1), (10, 20, 5, 4), (-3, 7, 10, 11), (4, 4, 2, 3)] {
            let r = Region::new(x, y, w, h);
            assert_eq!(r.center(), Some(Point::new(x + (w - 1) / 2, y + (h - 1) / 2)));
        }
        assert_eq!(Region::point(7, 8).center(), Some(Point::new(7, 8)));
    }

    #[test]
    fn test_derived_missing_fields() {
        let r = Region {
            x: Some(1),
            w: Some(5),
            ..Default::default()
        };
        assert_eq!(r.center(), None);
        assert_eq!(r.center_x(), Some(3));
        assert_eq!(r.area(), None);
        assert_eq!(r.radius(), None);
    }

    #[test]
    fn test_radius() {
        let r = Region::new(0, 0, 10, 6);
        assert!((r.radius().unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_translate_partial() {
        let r = Region {
            x: Some(3),
            w: Some(4),
            h: Some(4),
            ..Default::default()
        };
        let t = r.translate(Some(2), Some(5));
        assert_eq!(t.x, Some(5));
        assert_eq!(t.y, None);
        assert_eq!(t.w, Some(4));

        let t = r.translate(None, Some(1));
        assert_eq!(t, r);
    }

    #[test]
    fn test_translate_to_independent_axes() {
        let r = Region::new(1, 2, 3, 4);
        assert_eq!(r.translate_to(Some(10), None), Region::new(10, 2, 3, 4));
        assert_eq!(r.translate_to(None, Some(20)), Region::new(1, 20, 3, 4));
    }

    #[test]
    fn test_translate_center_to() {
        let r = Region::new(0, 0, 11, 5);
        let t = r.translate_center_to(Some(50), Some(40));
        assert_eq!(t.center(), Some(Point::new(50, 40)));
        assert_eq!(t, Region::new(45, 38, 11, 5));

        // No radius on the y axis: y is untouched
        let r = Region {
            x: Some(0),
            w: Some(3),
            ..Default::default()
        };
        let t = r.translate_center_to(Some(10), Some(10));
        assert_eq!(t.x, Some(9));
        assert_eq!(t.y, None);
    }

    #[test]
    fn test_scale_keeps_center() {
        let r = Region::new(10, 10, 21, 21);
        let s = r.scale(2.0);
        assert_eq!(s.w, Some(42));
        assert_eq!(s.h, Some(42));
        let c0 = r.center().unwrap();
        let c1 = s.center().unwrap();
        assert!((c0.x - c1.x).abs() <= 1 && (c0.y - c1.y).abs() <= 1);
    }

    #[test]
    fn test_scale_identity() {
        for r in [Region::new(3, 4, 5, 6), Region::new(-2, 0, 1, 9), Region::new(0, 0, 0, 0)] {
            assert_eq!(r.scale(1.0), r);
        }
    }

    #[test]
    fn test_scale_about() {
        let r = Region::new(10, 10, 4, 4);
        let s = r.scale_about(2.0, Point::new(0, 0));
        assert_eq!(s, Region::new(20, 20, 8, 8));
        let s = r.scale_about(0.5, Point::new(10, 10));
        assert_eq!(s, Region::new(10, 10, 2, 2));
    }

    #[test]
    fn test_crop_basic() {
        let r = Region::new(10, 10, 20, 20);
        assert_eq!(r.crop(Size::new(15, 15)), Some(Region::new(10, 10, 5, 5)));
        assert_eq!(r.crop(Size::new(100, 100)), Some(r));
    }

    #[test]
    fn test_crop_negative_origin() {
        let r = Region::new(-5, 0, 10, 10);
        assert_eq!(r.crop(Size::new(3, 3)), Some(Region::new(0, 0, 3, 3)));
        assert_eq!(Region::new(-15, 0, 10, 10).crop(Size::new(3, 3)), None);
        assert_eq!(Region::new(3, 0, 10, 10).crop(Size::new(3, 3)), None);
    }

    #[test]
    fn test_crop_partial_regions() {
        assert_eq!(Region::point(2, 2).crop(Size::new(5, 5)), Some(Region::point(2, 2)));
        assert_eq!(Region::point(5, 2).crop(Size::new(5, 5)), None);
        assert_eq!(
            Region::sized(10, 2).crop(Size::new(5, 5)),
            Some(Region::sized(5, 2))
        );
        assert_eq!(Region::sized(0, 2).crop(Size::new(5, 5)), None);
    }

    #[test]
    fn test_crop_near_coordinate_limit() {
        let far = Region::new(i32::MAX - 2, 0, 10, 10);
        assert_eq!(far.crop(Size::new(100, 100)), None);
        assert_eq!(far.right(), Some(i32::MAX));
        assert!(far.contains_point(i32::MAX - 1, 5));
        assert_eq!(Region::point(i32::MAX, 0).crop(Size::new(5, 5)), None);
    }

    #[test]
    fn test_contains_point() {
        let r = Region::new(0, 0, 10, 10);
        assert!(r.contains_point(0, 9));
        assert!(!r.contains_point(10, 0));
        let half = Region {
            x: Some(0),
            w: Some(2),
            ..Default::default()
        };
        assert!(half.contains_point(1, 1000));
    }

    #[test]
    fn test_rect_conversion() {
        let r = Region::new(1, 2, 3, 4);
        let rect = r.to_rect().unwrap();
        assert_eq!(Region::from(rect), r);
        assert!(Region::point(1, 2).to_rect().is_none());
    }
}
