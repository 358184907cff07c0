//! Core geometry types: Offset, Size, Region, Orientation.
//!
//! These are the foundational coordinate types used throughout barkit for
//! positioning and sizing widgets inside a bar. [`Orientation`] carries the
//! two coordinate transforms shared by hit testing and final image rotation.

use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D position or displacement in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Offset {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Offset {
    type Output = Offset;
    #[inline]
    fn neg(self) -> Offset {
        Offset { x: -self.x, y: -self.y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Total area (width * height).
    #[inline]
    pub const fn area(self) -> i32 {
        self.width * self.height
    }

    /// The same size with width and height exchanged.
    #[inline]
    pub const fn transposed(self) -> Size {
        Size { width: self.height, height: self.width }
    }

    /// Convert to a [`Region`] positioned at the origin.
    #[inline]
    pub const fn to_region(self) -> Region {
        Region { x: 0, y: 0, width: self.width, height: self.height }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangular region in pixels defined by position and size.
///
/// This is the most heavily-used geometry type. `contains` follows the
/// half-open convention: the right and bottom edges are exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The top-left corner as an [`Offset`].
    #[inline]
    pub const fn offset(self) -> Offset {
        Offset { x: self.x, y: self.y }
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the point (x, y) lies inside this region.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether `other` is entirely contained within this region.
    #[inline]
    pub const fn contains_region(self, other: Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Compute the intersection of two regions.
    ///
    /// Returns [`Region::EMPTY`] if the regions do not overlap.
    #[inline]
    pub const fn intersection(self, other: Region) -> Region {
        let x1 = if self.x > other.x { self.x } else { other.x };
        let y1 = if self.y > other.y { self.y } else { other.y };

        let sr = self.right();
        let or = other.right();
        let x2 = if sr < or { sr } else { or };

        let sb = self.bottom();
        let ob = other.bottom();
        let y2 = if sb < ob { sb } else { ob };

        if x2 > x1 && y2 > y1 {
            Region { x: x1, y: y1, width: x2 - x1, height: y2 - y1 }
        } else {
            Region::EMPTY
        }
    }
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Display orientation of a bar.
///
/// A bar always behaves as if laid out left-to-right ([`Horizontal`]); the
/// two rotated variants conceptually turn the finished image by 90 degrees.
/// Widget geometry, layout strategies, and widget drawing all work in the
/// *normalized* (un-rotated) space; only hit testing and the final pixel
/// rotation ever see real coordinates.
///
/// [`Horizontal`]: Orientation::Horizontal
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left-to-right, no transform.
    #[default]
    Horizontal,
    /// Rotated a quarter turn clockwise (bar reads top-to-bottom).
    RotatedCw,
    /// Rotated a quarter turn counter-clockwise (bar reads bottom-to-top).
    RotatedCcw,
}

impl Orientation {
    /// Whether this orientation exchanges the two axes.
    #[inline]
    pub const fn swaps_axes(self) -> bool {
        !matches!(self, Orientation::Horizontal)
    }

    /// The normalized (un-rotated) size for a bar of real size `size`.
    ///
    /// Layout strategies and the intermediate render canvas use this size,
    /// so they never need to reason about rotation.
    #[inline]
    pub const fn normalized_size(self, size: Size) -> Size {
        if self.swaps_axes() {
            size.transposed()
        } else {
            size
        }
    }

    /// The hit-test transform: map a point in real (on-screen) bar-local
    /// coordinates into normalized coordinates.
    ///
    /// `width` and `height` are the bar's real content dimensions.
    #[inline]
    pub const fn to_normalized(self, x: i32, y: i32, width: i32, height: i32) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (x, y),
            Orientation::RotatedCw => (y, width - x),
            Orientation::RotatedCcw => (height - y, x),
        }
    }

    /// The render transform: map a point in normalized coordinates back to
    /// real (on-screen) bar-local coordinates.
    ///
    /// Exact inverse of [`to_normalized`] for the same orientation and
    /// dimensions.
    ///
    /// [`to_normalized`]: Orientation::to_normalized
    #[inline]
    pub const fn from_normalized(self, x: i32, y: i32, width: i32, height: i32) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (x, y),
            Orientation::RotatedCw => (width - y, x),
            Orientation::RotatedCcw => (y, height - x),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Offset / Size
    // -----------------------------------------------------------------------

    #[test]
    fn offset_arithmetic() {
        let a = Offset::new(3, 4);
        let b = Offset::new(1, -2);
        assert_eq!(a + b, Offset::new(4, 2));
        assert_eq!(a - b, Offset::new(2, 6));
        assert_eq!(-a, Offset::new(-3, -4));
    }

    #[test]
    fn size_area_and_transpose() {
        let s = Size::new(10, 4);
        assert_eq!(s.area(), 40);
        assert_eq!(s.transposed(), Size::new(4, 10));
        assert_eq!(s.to_region(), Region::new(0, 0, 10, 4));
    }

    // -----------------------------------------------------------------------
    // Region
    // -----------------------------------------------------------------------

    #[test]
    fn region_edges() {
        let r = Region::new(2, 3, 10, 5);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 8);
        assert_eq!(r.offset(), Offset::new(2, 3));
        assert_eq!(r.size(), Size::new(10, 5));
    }

    #[test]
    fn region_contains_half_open() {
        let r = Region::new(5, 5, 10, 10);
        assert!(r.contains(5, 5));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 14));
        assert!(!r.contains(14, 15));
        assert!(!r.contains(4, 5));
    }

    #[test]
    fn region_contains_region() {
        let outer = Region::new(0, 0, 100, 20);
        assert!(outer.contains_region(Region::new(10, 5, 20, 10)));
        assert!(outer.contains_region(outer));
        assert!(!outer.contains_region(Region::new(90, 0, 20, 10)));
    }

    #[test]
    fn region_intersection() {
        let a = Region::new(0, 0, 10, 10);
        let b = Region::new(5, 5, 10, 10);
        assert_eq!(a.intersection(b), Region::new(5, 5, 5, 5));

        let c = Region::new(20, 20, 5, 5);
        assert_eq!(a.intersection(c), Region::EMPTY);
    }

    #[test]
    fn zero_size_region_contains_nothing() {
        let r = Region::new(5, 5, 0, 0);
        assert!(!r.contains(5, 5));
    }

    // -----------------------------------------------------------------------
    // Orientation
    // -----------------------------------------------------------------------

    #[test]
    fn horizontal_is_identity() {
        let o = Orientation::Horizontal;
        assert!(!o.swaps_axes());
        assert_eq!(o.normalized_size(Size::new(100, 20)), Size::new(100, 20));
        assert_eq!(o.to_normalized(7, 3, 100, 20), (7, 3));
        assert_eq!(o.from_normalized(7, 3, 100, 20), (7, 3));
    }

    #[test]
    fn rotated_swaps_axes() {
        assert!(Orientation::RotatedCw.swaps_axes());
        assert!(Orientation::RotatedCcw.swaps_axes());
        assert_eq!(
            Orientation::RotatedCw.normalized_size(Size::new(100, 20)),
            Size::new(20, 100)
        );
    }

    #[test]
    fn hit_transform_rotated_cw() {
        // Bar 100 wide: real point (5, 3) lands at normalized (3, 95).
        let (nx, ny) = Orientation::RotatedCw.to_normalized(5, 3, 100, 20);
        assert_eq!((nx, ny), (3, 95));
    }

    #[test]
    fn hit_transform_rotated_ccw() {
        // y' = x, x' = height - y.
        let (nx, ny) = Orientation::RotatedCcw.to_normalized(5, 3, 100, 20);
        assert_eq!((nx, ny), (17, 5));
    }

    #[test]
    fn transforms_round_trip() {
        let orientations = [
            Orientation::Horizontal,
            Orientation::RotatedCw,
            Orientation::RotatedCcw,
        ];
        let (w, h) = (100, 20);
        for o in orientations {
            for (x, y) in [(0, 0), (5, 3), (99, 19), (42, 7)] {
                let (nx, ny) = o.to_normalized(x, y, w, h);
                assert_eq!(
                    o.from_normalized(nx, ny, w, h),
                    (x, y),
                    "round trip failed for {o:?} at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn transforms_round_trip_reversed() {
        // The other direction: render transform first, then hit transform.
        let (w, h) = (64, 16);
        for o in [Orientation::RotatedCw, Orientation::RotatedCcw] {
            for (x, y) in [(0, 0), (10, 12), (63, 15)] {
                let (rx, ry) = o.from_normalized(x, y, w, h);
                assert_eq!(o.to_normalized(rx, ry, w, h), (x, y));
            }
        }
    }
}
