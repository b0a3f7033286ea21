// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, Sub};

use crate::Vec2;

/// An axis-aligned rectangle described by its bottom-left and top-right
/// corners.
///
/// The invariants `right >= left` and `top >= bottom` are expected but not
/// enforced; a degenerate rectangle with zero size is valid and represents
/// "empty" (for example the not-found placement in a glyph cache). Equality is
/// exact component-wise comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Rect<T> {
    bottom_left: Vec2<T>,
    top_right: Vec2<T>,
}

/// A [`Rect`] of `i32`, used for pixel placements.
pub type RectI = Rect<i32>;

/// A [`Rect`] of `f32`.
pub type RectF = Rect<f32>;

impl<T> Rect<T> {
    /// Creates a rectangle from its bottom-left and top-right corners.
    #[inline]
    pub const fn new(bottom_left: Vec2<T>, top_right: Vec2<T>) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }
}

impl<T: Copy> Rect<T> {
    /// The bottom-left corner.
    #[inline]
    pub fn bottom_left(&self) -> Vec2<T> {
        self.bottom_left
    }

    /// The top-right corner.
    #[inline]
    pub fn top_right(&self) -> Vec2<T> {
        self.top_right
    }

    /// The left edge.
    #[inline]
    pub fn left(&self) -> T {
        self.bottom_left.x
    }

    /// The right edge.
    #[inline]
    pub fn right(&self) -> T {
        self.top_right.x
    }

    /// The bottom edge.
    #[inline]
    pub fn bottom(&self) -> T {
        self.bottom_left.y
    }

    /// The top edge.
    #[inline]
    pub fn top(&self) -> T {
        self.top_right.y
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    /// Creates a rectangle from its bottom-left origin and size.
    ///
    /// `Rect::from_size(origin, size)` equals
    /// `Rect::new(origin, origin + size)` exactly, for all origin/size pairs.
    #[inline]
    pub fn from_size(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self::new(origin, origin + size)
    }
}

impl<T: Copy + Sub<Output = T>> Rect<T> {
    /// The size vector, `top_right - bottom_left`.
    #[inline]
    pub fn size(&self) -> Vec2<T> {
        self.top_right - self.bottom_left
    }

    /// The width, `right - left`.
    #[inline]
    pub fn width(&self) -> T {
        self.top_right.x - self.bottom_left.x
    }

    /// The height, `top - bottom`.
    #[inline]
    pub fn height(&self) -> T {
        self.top_right.y - self.bottom_left.y
    }
}

impl<T: Copy + Add<Output = T> + Sub<Output = T>> Rect<T> {
    /// Moves all four edges outward by the given margin.
    ///
    /// A positive margin grows the rectangle, a negative margin shrinks it.
    /// Used when placing regions with spacing around them.
    #[inline]
    pub fn padded(&self, margin: Vec2<T>) -> Self {
        Self::new(self.bottom_left - margin, self.top_right + margin)
    }
}

impl<T: Copy + PartialOrd> Rect<T> {
    /// Whether `other` lies fully inside `self` (edges may touch).
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        other.bottom_left.x >= self.bottom_left.x
            && other.bottom_left.y >= self.bottom_left.y
            && other.top_right.x <= self.top_right.x
            && other.top_right.y <= self.top_right.y
    }

    /// Whether `self` and `other` share interior area.
    ///
    /// Rectangles that merely touch along an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.bottom_left.x < other.top_right.x
            && other.bottom_left.x < self.top_right.x
            && self.bottom_left.y < other.top_right.y
            && other.bottom_left.y < self.top_right.y
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, RectI};
    use crate::Vec2;

    #[test]
    fn access() {
        let rect = RectI::new(Vec2::new(34, 23), Vec2::new(47, 30));
        assert_eq!(rect.bottom_left(), Vec2::new(34, 23));
        assert_eq!(rect.top_right(), Vec2::new(47, 30));
        assert_eq!(rect.bottom(), 23);
        assert_eq!(rect.top(), 30);
        assert_eq!(rect.left(), 34);
        assert_eq!(rect.right(), 47);
    }

    #[test]
    fn compare() {
        let rect = RectI::new(Vec2::new(34, 23), Vec2::new(47, 30));
        assert_eq!(rect, RectI::new(Vec2::new(34, 23), Vec2::new(47, 30)));
        assert_ne!(rect, RectI::new(Vec2::new(34, 23), Vec2::new(48, 30)));
        assert_ne!(rect, RectI::new(Vec2::new(35, 23), Vec2::new(47, 30)));
    }

    #[test]
    fn construct() {
        assert_eq!(
            RectI::default(),
            RectI::new(Vec2::new(0, 0), Vec2::new(0, 0))
        );
        assert_eq!(
            RectI::from_size(Vec2::new(3, 5), Vec2::new(23, 78)),
            RectI::new(Vec2::new(3, 5), Vec2::new(26, 83))
        );
    }

    #[test]
    fn size() {
        let rect = RectI::new(Vec2::new(34, 23), Vec2::new(47, 30));
        assert_eq!(rect.size(), Vec2::new(13, 7));
        assert_eq!(rect.width(), 13);
        assert_eq!(rect.height(), 7);
    }

    #[test]
    fn float_semantics_match_integer() {
        let rect = Rect::<f32>::from_size(Vec2::new(1.5, 2.5), Vec2::new(4.0, 8.0));
        assert_eq!(rect, Rect::new(Vec2::new(1.5, 2.5), Vec2::new(5.5, 10.5)));
        assert_eq!(rect.size(), Vec2::new(4.0, 8.0));
    }

    #[test]
    fn padded_grows_and_shrinks() {
        let rect = RectI::new(Vec2::new(10, 10), Vec2::new(20, 20));
        assert_eq!(
            rect.padded(Vec2::new(1, 2)),
            RectI::new(Vec2::new(9, 8), Vec2::new(21, 22))
        );
        assert_eq!(rect.padded(Vec2::new(1, 2)).padded(Vec2::new(-1, -2)), rect);
    }

    #[test]
    fn containment_and_intersection() {
        let outer = RectI::new(Vec2::new(0, 0), Vec2::new(10, 10));
        let inner = RectI::new(Vec2::new(2, 2), Vec2::new(8, 8));
        let touching = RectI::new(Vec2::new(10, 0), Vec2::new(12, 10));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.intersects(&inner));
        assert!(!outer.intersects(&touching));
    }
}
