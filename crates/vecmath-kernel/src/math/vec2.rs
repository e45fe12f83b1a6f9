// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::MathResult;
use crate::math::norm::{checked_unit, norm, unit};
use crate::math::tolerance::checked_div_in;
use crate::math::{Scalar, Tolerance, Vec3};

/// Two-component vector.
///
/// * Pure methods take `&self` and return a new value; the `_mut` forms write
///   the result back into the receiver and return it for chaining.
/// * Operators (`+ - * /`, unary `-`) are the raw path: division by a zero
///   component yields IEEE infinities. Use the `checked_*` methods to fail
///   with [`MathError::DivisionByZero`](crate::MathError::DivisionByZero)
///   instead.
/// * `PartialEq` is exact; use [`Vec2::approx_eq`] or the `approx` macros for
///   tolerant comparison.
///
/// # Examples
/// ```
/// use vecmath_kernel::math::Vec2f;
/// let v = Vec2f::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v.normalize().map(Vec2f::to_array), Ok([0.6, 0.8]));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec2<S = f32> {
    data: [S; 2],
}

/// Single-precision [`Vec2`].
pub type Vec2f = Vec2<f32>;
/// Double-precision [`Vec2`].
pub type Vec2d = Vec2<f64>;

impl_tuple_common!(Vec2, 2);
impl_vector_componentwise!(Vec2, 2);

impl<S: Scalar> Vec2<S> {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(S::ZERO, S::ZERO);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(S::ONE, S::ONE);
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(S::ONE, S::ZERO);
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(S::ZERO, S::ONE);

    /// Creates a vector from components.
    pub const fn new(x: S, y: S) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Appends `z`, producing a [`Vec3`].
    pub fn extend(&self, z: S) -> Vec3<S> {
        Vec3::new(self.x(), self.y(), z)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> S {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Z component of the 3D cross product of `(self, 0)` and `(other, 0)`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    pub fn perp_dot(&self, other: &Self) -> S {
        self.x() * other.y() - self.y() * other.x()
    }

    /// `self` rotated 90° counter-clockwise.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Vector length (magnitude).
    ///
    /// Computed without intermediate underflow or overflow, so `(1e-30, 0)`
    /// has length `1e-30` rather than zero.
    pub fn length(&self) -> S {
        norm(&self.data)
    }

    /// Squared magnitude. Never tolerance gated.
    pub fn length_squared(&self) -> S {
        self.dot(self)
    }

    /// Length, snapped to exactly zero when it lies within `tolerance`.
    pub fn length_within(&self, tolerance: Tolerance<S>) -> S {
        let len = self.length();
        if tolerance.contains(len) {
            return S::ZERO;
        }
        len
    }

    /// `1 / length`; fails with
    /// [`MathError::DivisionByZero`](crate::MathError::DivisionByZero) when
    /// the length is exactly zero.
    pub fn reciprocal_length(&self) -> MathResult<S> {
        checked_div_in("reciprocal_length", S::ONE, self.length())
    }

    /// Distance to `other`.
    pub fn distance(&self, other: &Self) -> S {
        (*other - *self).length()
    }

    /// Squared distance to `other`.
    pub fn distance_squared(&self, other: &Self) -> S {
        (*other - *self).length_squared()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// Fails with [`MathError::DivisionByZero`](crate::MathError::DivisionByZero)
    /// for the zero vector and
    /// [`MathError::InvalidArgument`](crate::MathError::InvalidArgument) when
    /// a component is not finite. See [`Vec2::normalize_or_zero`] for a
    /// non-failing variant.
    pub fn normalize(&self) -> MathResult<Self> {
        checked_unit("normalize", self.data).map(Self::from_array)
    }

    /// Unit vector in the direction of `self`, or the zero vector when the
    /// length lies within `tolerance`.
    pub fn normalize_or_zero(&self, tolerance: Tolerance<S>) -> Self {
        if tolerance.contains(self.length()) {
            return Self::ZERO;
        }
        Self::from_array(unit(self.data))
    }

    /// Divides by the length without checks; a zero vector yields NaNs.
    pub fn normalize_unchecked(&self) -> Self {
        let len = self.length();
        self.map(|c| c / len)
    }

    /// Angle of the vector from +X in radians, in `(-π, π]`.
    pub fn angle(&self) -> S {
        self.y().atan2(self.x())
    }

    /// Rotates counter-clockwise by `angle` radians.
    pub fn rotate(&self, angle: S) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    /// Projection of `self` onto `target`: `target * dot(self, target)`.
    ///
    /// `target` must be unit length; it is not normalised here and a
    /// non-unit target produces a scaled result.
    pub fn project(&self, target: &Self) -> Self {
        target.scale(self.dot(target))
    }

    /// Reflection of `self` about the line with unit `normal`:
    /// `self - 2 * dot(self, normal) * normal`.
    ///
    /// `normal` must be unit length; it is not normalised here.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - normal.scale(S::TWO * self.dot(normal))
    }

    /// Linear interpolation `self + (other - self) * alpha`. Unclamped.
    pub fn lerp(&self, other: &Self, alpha: S) -> Self {
        *self + (*other - *self) * alpha
    }

    /// Linear integration step `self + other * alpha`.
    pub fn integrate(&self, other: &Self, alpha: S) -> Self {
        *self + *other * alpha
    }

    /// Picks components by index: `swizzle([1, 0])` yields `(y, x)`.
    ///
    /// # Errors
    /// [`MathError::IndexOutOfRange`](crate::MathError::IndexOutOfRange) for an
    /// index `>= 2`.
    pub fn swizzle(&self, indices: [usize; 2]) -> MathResult<Self> {
        Ok(Self::new(self.get(indices[0])?, self.get(indices[1])?))
    }

    try_in_place!(
        /// In-place [`Vec2::normalize`].
        normalize_mut => normalize()
    );
    in_place!(
        /// In-place [`Vec2::normalize_or_zero`].
        normalize_or_zero_mut => normalize_or_zero(tolerance: Tolerance<S>)
    );
    in_place!(
        /// In-place [`Vec2::rotate`].
        rotate_mut => rotate(angle: S)
    );
    in_place!(
        /// In-place [`Vec2::project`].
        project_mut => project(target: &Self)
    );
    in_place!(
        /// In-place [`Vec2::reflect`].
        reflect_mut => reflect(normal: &Self)
    );
    in_place!(
        /// In-place [`Vec2::lerp`].
        lerp_mut => lerp(other: &Self, alpha: S)
    );
    in_place!(
        /// In-place [`Vec2::integrate`].
        integrate_mut => integrate(other: &Self, alpha: S)
    );
    try_in_place!(
        /// In-place [`Vec2::swizzle`].
        swizzle_mut => swizzle(indices: [usize; 2])
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn in_place_forms_mutate_and_chain() {
        let mut v = Vec2f::new(3.0, 4.0);
        v.scale_mut(2.0).negate_mut();
        assert_eq!(v.to_array(), [-6.0, -8.0]);

        let before = v;
        assert!(v.checked_div_mut(&Vec2f::new(1.0, 0.0)).is_err());
        assert_eq!(v, before, "failed in-place op must not touch the receiver");
    }

    #[test]
    fn rotate_quarter_turn() {
        let r = Vec2f::UNIT_X.rotate(FRAC_PI_2);
        assert!(r.approx_eq(&Vec2f::UNIT_Y, Tolerance::default()));
        assert_eq!(Vec2f::UNIT_X.perpendicular(), Vec2f::UNIT_Y);
    }

    #[test]
    fn set_rejects_out_of_range() {
        let mut v = Vec2f::ZERO;
        assert_eq!(v.set(1, 7.0).map(|v| v.y()), Ok(7.0));
        assert_eq!(
            v.set(2, 1.0).map(|_| ()),
            Err(MathError::IndexOutOfRange {
                index: 2,
                dimension: 2
            })
        );
    }
}
