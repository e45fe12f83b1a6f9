// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::{MathError, MathResult};
use crate::math::norm::{checked_unit, norm, unit};
use crate::math::{Scalar, Tolerance, Vec3};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All angles are expressed in radians.
/// * Rotation quaternions are unit length. Constructors that take an axis
///   expect a unit axis; they do not normalise it.
/// * [`Quat::multiply`] does not renormalise. Call [`Quat::normalize`]
///   periodically over long composition chains, or use
///   [`Quat::multiply_normalized`] to renormalise every product.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Quat<S = f32> {
    data: [S; 4],
}

/// Single-precision [`Quat`].
pub type Quatf = Quat<f32>;
/// Double-precision [`Quat`].
pub type Quatd = Quat<f64>;

impl_tuple_common!(Quat, 4);

impl<S: Scalar> Quat<S> {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE);

    /// Creates a quaternion from components.
    ///
    /// Components are taken verbatim; use [`Quat::from_axis_angle`] or
    /// [`Quat::from_vectors`] to build rotations.
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// X component of the vector part.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component of the vector part.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z component of the vector part.
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// Scalar part.
    pub fn w(&self) -> S {
        self.data[3]
    }

    /// Vector part `(x, y, z)`.
    pub fn vector_part(&self) -> Vec3<S> {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Rotation of `angle` radians about unit `axis`:
    /// `(axis * sin(angle / 2), cos(angle / 2))`.
    ///
    /// The axis is not normalised; a non-unit axis yields a non-unit
    /// quaternion.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use vecmath_kernel::math::{Quatf, Tolerance, Vec3f};
    /// let q = Quatf::from_axis_angle(&Vec3f::UNIT_Z, FRAC_PI_2);
    /// let v = q.transform_vector(&Vec3f::UNIT_X);
    /// assert!(v.approx_eq(&Vec3f::UNIT_Y, Tolerance::default()));
    /// ```
    pub fn from_axis_angle(axis: &Vec3<S>, angle: S) -> Self {
        let (sin_half, cos_half) = (angle * S::HALF).sin_cos();
        let scaled = axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Rotation built from two directions.
    ///
    /// With `a` and `b` the normalised inputs, returns
    /// `normalize((normalize(a × b), 1 + a · b))`. Because the axis term is
    /// unit length the rotation angle matches the angle between the inputs
    /// only when they are perpendicular; [`Quat::shortest_arc`] yields the
    /// exact rotation taking `from` onto `to`.
    ///
    /// # Errors
    /// [`MathError::DivisionByZero`] when either input has zero length or the
    /// inputs are parallel or antiparallel (zero cross product), and
    /// [`MathError::InvalidArgument`] for non-finite components.
    pub fn from_vectors(from: &Vec3<S>, to: &Vec3<S>) -> MathResult<Self> {
        let a = from.normalize()?;
        let b = to.normalize()?;
        let axis = a.cross(&b).normalize()?;
        Self::new(axis.x(), axis.y(), axis.z(), S::ONE + a.dot(&b)).normalize()
    }

    /// Shortest-arc rotation taking the direction of `from` onto the
    /// direction of `to`.
    ///
    /// Both inputs are normalised first. Parallel inputs yield the identity;
    /// antiparallel inputs yield a half turn about an axis orthogonal to
    /// `from`.
    ///
    /// # Errors
    /// [`MathError::DivisionByZero`] when either input has zero length, and
    /// [`MathError::InvalidArgument`] for non-finite components.
    pub fn shortest_arc(from: &Vec3<S>, to: &Vec3<S>) -> MathResult<Self> {
        let a = from.normalize()?;
        let b = to.normalize()?;
        let cos = a.dot(&b);
        if cos <= S::DEFAULT_TOLERANCE - S::ONE {
            let helper = if a.x().abs() < S::HALF {
                Vec3::UNIT_X
            } else {
                Vec3::UNIT_Y
            };
            let axis = a.cross(&helper).normalize()?;
            return Ok(Self::new(axis.x(), axis.y(), axis.z(), S::ZERO));
        }
        let axis = a.cross(&b);
        Self::new(axis.x(), axis.y(), axis.z(), S::ONE + cos).normalize()
    }

    /// Hamilton product `self * other`.
    ///
    /// Operand order matters: applied to a vector, the product rotates by
    /// `other` first and then by `self`. The result is not renormalised.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use vecmath_kernel::math::{Quatf, Vec3f};
    /// let yaw = Quatf::from_axis_angle(&Vec3f::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quatf::from_axis_angle(&Vec3f::UNIT_X, FRAC_PI_2);
    /// // Non-commutative: pitch * yaw differs from yaw * pitch.
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.x();
        let ay = self.y();
        let az = self.z();
        let aw = self.w();

        let bx = other.x();
        let by = other.y();
        let bz = other.z();
        let bw = other.w();

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Hamilton product followed by normalisation.
    ///
    /// # Errors
    /// [`MathError::DivisionByZero`] when the product is the zero quaternion.
    pub fn multiply_normalized(&self, other: &Self) -> MathResult<Self> {
        self.multiply(other).normalize()
    }

    /// Negates the vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Multiplicative inverse `conjugate / |q|²`, dividing by `|q|` twice so
    /// small quaternions do not underflow.
    ///
    /// # Errors
    /// [`MathError::DivisionByZero`] for the zero quaternion.
    pub fn inverse(&self) -> MathResult<Self> {
        let len = self.length();
        if len == S::ZERO {
            return Err(MathError::div_by_zero("inverse"));
        }
        Ok(Self::from_array(self.conjugate().data.map(|c| c / len / len)))
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: S) -> Self {
        Self {
            data: self.data.map(|c| c * scalar),
        }
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> S {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Norm `sqrt(x² + y² + z² + w²)`, free of intermediate underflow or
    /// overflow.
    pub fn length(&self) -> S {
        norm(&self.data)
    }

    /// Squared norm.
    pub fn length_squared(&self) -> S {
        self.dot(self)
    }

    /// Unit quaternion in the direction of `self`.
    ///
    /// # Errors
    /// [`MathError::DivisionByZero`] for the zero quaternion and
    /// [`MathError::InvalidArgument`] for non-finite components.
    pub fn normalize(&self) -> MathResult<Self> {
        checked_unit("normalize", self.data).map(Self::from_array)
    }

    /// Normalises the quaternion; returns identity when the norm lies within
    /// `tolerance`.
    pub fn normalize_or_identity(&self, tolerance: Tolerance<S>) -> Self {
        if tolerance.contains(self.length()) {
            return Self::IDENTITY;
        }
        Self::from_array(unit(self.data))
    }

    /// Rotates `v` by this quaternion: `(q * (v, 0) * conjugate(q)).xyz`.
    ///
    /// Exact for unit quaternions; a non-unit quaternion also scales `v` by
    /// `|q|²`.
    pub fn transform_vector(&self, v: &Vec3<S>) -> Vec3<S> {
        let p = Self::new(v.x(), v.y(), v.z(), S::ZERO);
        self.multiply(&p).multiply(&self.conjugate()).vector_part()
    }

    in_place!(
        /// In-place [`Quat::conjugate`].
        conjugate_mut => conjugate()
    );
    try_in_place!(
        /// In-place [`Quat::inverse`].
        inverse_mut => inverse()
    );
    try_in_place!(
        /// In-place [`Quat::normalize`].
        normalize_mut => normalize()
    );
    in_place!(
        /// In-place [`Quat::normalize_or_identity`].
        normalize_or_identity_mut => normalize_or_identity(tolerance: Tolerance<S>)
    );
    in_place!(
        /// Replaces `self` with `self * other`.
        multiply_mut => multiply(other: &Self)
    );
    try_in_place!(
        /// In-place [`Quat::multiply_normalized`].
        multiply_normalized_mut => multiply_normalized(other: &Self)
    );
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<S: Scalar> core::ops::Mul for Quat<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<S: Scalar> core::ops::MulAssign for Quat<S> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<S: Scalar> core::ops::Mul<Vec3<S>> for Quat<S> {
    type Output = Vec3<S>;
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.transform_vector(&rhs)
    }
}

impl<S: Scalar> core::ops::Neg for Quat<S> {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-S::ONE)
    }
}
