// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A two-component vector with exact component-wise semantics.
///
/// Arithmetic is component-wise and never reorders or widens, so integer and
/// floating-point instantiations behave identically apart from the element
/// type. Equality is exact component comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Vec2<T> {
    /// The horizontal component.
    pub x: T,
    /// The vertical component.
    pub y: T,
}

/// A [`Vec2`] of `i32`, used for pixel coordinates and extents.
pub type Vec2I = Vec2<i32>;

/// A [`Vec2`] of `f32`.
pub type Vec2F = Vec2<f32>;

impl<T> Vec2<T> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vec2<T> {
    /// Creates a vector with both components set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Vec2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Neg<Output = T>> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// A three-component vector with exact component-wise semantics.
///
/// Used for vertex positions and normals. Follows the same exactness rules as
/// [`Vec2`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Vec3<T> {
    /// The first component.
    pub x: T,
    /// The second component.
    pub y: T,
    /// The third component.
    pub z: T,
}

/// A [`Vec3`] of `f32`.
pub type Vec3F = Vec3<f32>;

impl<T> Vec3<T> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vec3<T> {
    /// Creates a vector with all three components set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Vec3<f32> {
    /// The cross product of `self` and `rhs`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// The dot product of `self` and `rhs`.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// The Euclidean length of the vector.
    #[cfg(feature = "std")]
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A zero vector is returned unchanged rather than producing NaNs.
    #[cfg(feature = "std")]
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 { self } else { self * (1.0 / len) }
    }
}

#[cfg(test)]
mod tests {
    use super::{Vec2, Vec2I, Vec3F};

    #[test]
    fn component_wise_arithmetic() {
        let a = Vec2I::new(3, 5);
        let b = Vec2I::new(10, -2);
        assert_eq!(a + b, Vec2::new(13, 3));
        assert_eq!(a - b, Vec2::new(-7, 7));
        assert_eq!(-a, Vec2::new(-3, -5));
        assert_eq!(a * 2, Vec2::new(6, 10));
    }

    #[test]
    fn splat_and_default() {
        assert_eq!(Vec2I::splat(4), Vec2::new(4, 4));
        assert_eq!(Vec2I::default(), Vec2::new(0, 0));
    }

    #[test]
    fn cross_product_is_perpendicular() {
        let x = Vec3F::new(1.0, 0.0, 0.0);
        let y = Vec3F::new(0.0, 1.0, 0.0);
        let z = x.cross(y);
        assert_eq!(z, Vec3F::new(0.0, 0.0, 1.0));
        assert_eq!(z.dot(x), 0.0);
        assert_eq!(z.dot(y), 0.0);
    }

    #[test]
    fn normalized_unit_and_zero() {
        let v = Vec3F::new(0.0, 3.0, 4.0);
        let n = v.normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec3F::default().normalized(), Vec3F::default());
    }
}
