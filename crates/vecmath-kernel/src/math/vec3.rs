// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::config::Handedness;
use crate::error::MathResult;
use crate::math::norm::{checked_unit, norm, unit};
use crate::math::tolerance::checked_div_in;
use crate::math::{Scalar, Tolerance, Vec2};

/// Three-component vector.
///
/// * Components may represent points or directions depending on the calling
///   context; the type does not distinguish them.
/// * Pure methods return a new value; `_mut` forms write back into the
///   receiver and return it for chaining.
/// * Operators are the raw IEEE path, `checked_*` methods the failing path.
/// * [`Vec3::cross`] is right-handed. Use [`Vec3::cross_with`] (or
///   [`crate::MathConfig::cross`]) where the handedness is a configured
///   convention.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec3<S = f32> {
    data: [S; 3],
}

/// Single-precision [`Vec3`].
pub type Vec3f = Vec3<f32>;
/// Double-precision [`Vec3`].
pub type Vec3d = Vec3<f64>;

impl_tuple_common!(Vec3, 3);
impl_vector_componentwise!(Vec3, 3);

impl<S: Scalar> Vec3<S> {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(S::ZERO, S::ZERO, S::ZERO);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(S::ONE, S::ONE, S::ONE);
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(S::ONE, S::ZERO, S::ZERO);
    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(S::ZERO, S::ONE, S::ZERO);
    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(S::ZERO, S::ZERO, S::ONE);

    /// Creates a vector from components.
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// Drops the Z component.
    pub fn xy(&self) -> Vec2<S> {
        Vec2::new(self.x(), self.y())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> S {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Right-handed cross product. `a.cross(&b) == -b.cross(&a)`.
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.x();
        let ay = self.y();
        let az = self.z();
        let bx = other.x();
        let by = other.y();
        let bz = other.z();
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Cross product under the given coordinate-system handedness.
    ///
    /// `UNIT_X × UNIT_Y` is `UNIT_Z` for [`Handedness::Right`] and `-UNIT_Z`
    /// for [`Handedness::Left`].
    pub fn cross_with(&self, other: &Self, handedness: Handedness) -> Self {
        let c = self.cross(other);
        match handedness {
            Handedness::Right => c,
            Handedness::Left => c.negate(),
        }
    }

    /// Vector length (magnitude).
    ///
    /// Computed without intermediate underflow or overflow, so `(1e-30, 0)`
    /// has length `1e-30` rather than zero.
    pub fn length(&self) -> S {
        norm(&self.data)
    }

    /// Squared magnitude of the vector. Never tolerance gated.
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
    /// a component is not finite. [`Vec3::normalize_or_zero`] treats near-zero
    /// input as degenerate and returns the zero vector instead.
    pub fn normalize(&self) -> MathResult<Self> {
        checked_unit("normalize", self.data).map(Self::from_array)
    }

    /// Normalises the vector, returning the zero vector if length ≤ `tolerance`.
    ///
    /// The tolerance is a degeneracy threshold (not numeric precision):
    /// vectors at or below it normalise to zero so callers can detect them.
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

    /// Rotates `self` by `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// `axis` must be unit length; it is not normalised here. Positive angles
    /// rotate counter-clockwise when looking down the axis toward the origin.
    pub fn rotate_axis_angle(&self, axis: &Self, angle: S) -> Self {
        let (sin, cos) = angle.sin_cos();
        let parallel = axis.scale(axis.dot(self) * (S::ONE - cos));
        self.scale(cos) + axis.cross(self).scale(sin) + parallel
    }

    /// Projection of `self` onto unit `target`: `target * dot(self, target)`.
    ///
    /// A non-unit `target` is not normalised and produces a scaled result.
    pub fn project(&self, target: &Self) -> Self {
        target.scale(self.dot(target))
    }

    /// Reflection about the plane with unit `normal`.
    ///
    /// `normal` must be unit length; it is not normalised here.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - normal.scale(S::TWO * self.dot(normal))
    }

    /// Linear interpolation `self + (other - self) * alpha`. Unclamped.
    pub fn lerp(&self, other: &Self, alpha: S) -> Self {
        *self + (*other - *self) * alpha
    }

    /// Linear integration step `self + other * alpha`, e.g. position plus
    /// velocity times timestep.
    pub fn integrate(&self, other: &Self, alpha: S) -> Self {
        *self + *other * alpha
    }

    /// Picks components by index: `swizzle([2, 1, 0])` yields `(z, y, x)`.
    ///
    /// # Errors
    /// [`MathError::IndexOutOfRange`](crate::MathError::IndexOutOfRange) for an
    /// index `>= 3`.
    pub fn swizzle(&self, indices: [usize; 3]) -> MathResult<Self> {
        Ok(Self::new(
            self.get(indices[0])?,
            self.get(indices[1])?,
            self.get(indices[2])?,
        ))
    }

    /// Picks two components by index into a [`Vec2`].
    ///
    /// # Errors
    /// [`MathError::IndexOutOfRange`](crate::MathError::IndexOutOfRange) for an
    /// index `>= 3`.
    pub fn swizzle2(&self, indices: [usize; 2]) -> MathResult<Vec2<S>> {
        Ok(Vec2::new(self.get(indices[0])?, self.get(indices[1])?))
    }

    in_place!(
        /// In-place [`Vec3::cross`].
        cross_mut => cross(other: &Self)
    );
    in_place!(
        /// In-place [`Vec3::cross_with`].
        cross_with_mut => cross_with(other: &Self, handedness: Handedness)
    );
    try_in_place!(
        /// In-place [`Vec3::normalize`].
        normalize_mut => normalize()
    );
    in_place!(
        /// In-place [`Vec3::normalize_or_zero`].
        normalize_or_zero_mut => normalize_or_zero(tolerance: Tolerance<S>)
    );
    in_place!(
        /// In-place [`Vec3::rotate_axis_angle`].
        rotate_axis_angle_mut => rotate_axis_angle(axis: &Self, angle: S)
    );
    in_place!(
        /// In-place [`Vec3::project`].
        project_mut => project(target: &Self)
    );
    in_place!(
        /// In-place [`Vec3::reflect`].
        reflect_mut => reflect(normal: &Self)
    );
    in_place!(
        /// In-place [`Vec3::lerp`].
        lerp_mut => lerp(other: &Self, alpha: S)
    );
    in_place!(
        /// In-place [`Vec3::integrate`].
        integrate_mut => integrate(other: &Self, alpha: S)
    );
    try_in_place!(
        /// In-place [`Vec3::swizzle`].
        swizzle_mut => swizzle(indices: [usize; 3])
    );
}
