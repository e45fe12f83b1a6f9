// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar abstraction shared by every vector and quaternion type.
//!
//! The kernel ships both single- and double-precision families. Rather than
//! duplicating each type per precision, the value types are generic over
//! [`Scalar`], which is implemented for `f32` and `f64` only.
//!
//! Contract:
//! - Operations are pure and follow IEEE-754 for the underlying float type;
//!   no canonicalization or flushing is performed here.
//! - Trigonometric functions interpret arguments as radians.
//! - [`Scalar::DEFAULT_TOLERANCE`] is a degeneracy threshold used when a
//!   caller does not supply an explicit tolerance. It is not machine epsilon.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::RelativeEq;

use crate::math::RoundingMode;

/// Floating-point scalar usable as the component type of the kernel's values.
///
/// Arithmetic is required via the standard operator traits so generic code can
/// use `+`, `-`, `*`, `/`, and unary `-` directly. Approximate comparison
/// comes from the `approx` traits, which lets the vector types implement
/// [`approx::AbsDiffEq`] and [`approx::RelativeEq`] componentwise.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RelativeEq<Epsilon = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `2`.
    const TWO: Self;
    /// `0.5`.
    const HALF: Self;
    /// Degeneracy threshold applied when no explicit tolerance is given.
    const DEFAULT_TOLERANCE: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;

    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;

    /// Returns both sine and cosine of `self` (radians).
    ///
    /// Default implementation computes `sin` and `cos` separately; concrete
    /// implementations may override for shared range reduction.
    fn sin_cos(self) -> (Self, Self) {
        (Self::sin(self), Self::cos(self))
    }

    /// Largest integer less than or equal to `self`.
    fn floor(self) -> Self;

    /// Smallest integer greater than or equal to `self`.
    fn ceil(self) -> Self;

    /// Nearest integer, ties away from zero.
    fn round(self) -> Self;

    /// Integer part, rounding toward zero.
    fn trunc(self) -> Self;

    /// Minimum of two values; a NaN operand yields the other operand.
    fn min(self, other: Self) -> Self;

    /// Maximum of two values; a NaN operand yields the other operand.
    fn max(self, other: Self) -> Self;

    /// `true` when neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// `true` for NaN.
    fn is_nan(self) -> bool;

    /// `-1`, `0`, or `+1` according to the sign of `self`.
    ///
    /// Unlike `f32::signum`, both zeros map to `0`. NaN is returned unchanged.
    fn sign(self) -> Self {
        if self.is_nan() {
            self
        } else if self > Self::ZERO {
            Self::ONE
        } else if self < Self::ZERO {
            -Self::ONE
        } else {
            Self::ZERO
        }
    }

    /// Rounds to an integral value using `mode`.
    fn round_with(self, mode: RoundingMode) -> Self {
        mode.apply(self)
    }
}

macro_rules! impl_scalar {
    ($t:ident, $tolerance:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const DEFAULT_TOLERANCE: Self = $tolerance;
            const INFINITY: Self = $t::INFINITY;
            const MIN_POSITIVE: Self = $t::MIN_POSITIVE;

            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            fn abs(self) -> Self {
                $t::abs(self)
            }

            fn sin(self) -> Self {
                $t::sin(self)
            }

            fn cos(self) -> Self {
                $t::cos(self)
            }

            fn atan2(self, other: Self) -> Self {
                $t::atan2(self, other)
            }

            fn sin_cos(self) -> (Self, Self) {
                $t::sin_cos(self)
            }

            fn floor(self) -> Self {
                $t::floor(self)
            }

            fn ceil(self) -> Self {
                $t::ceil(self)
            }

            fn round(self) -> Self {
                $t::round(self)
            }

            fn trunc(self) -> Self {
                $t::trunc(self)
            }

            fn min(self, other: Self) -> Self {
                $t::min(self, other)
            }

            fn max(self, other: Self) -> Self {
                $t::max(self, other)
            }

            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }

            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }
        }
    };
}

impl_scalar!(f32, 1e-6);
impl_scalar!(f64, 1e-12);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_maps_both_zeros_to_zero() {
        assert_eq!(Scalar::sign(0.0_f32).to_bits(), 0.0_f32.to_bits());
        assert_eq!(Scalar::sign(-0.0_f32).to_bits(), 0.0_f32.to_bits());
        assert_eq!(Scalar::sign(-3.5_f64), -1.0);
        assert_eq!(Scalar::sign(1e-30_f64), 1.0);
        assert!(Scalar::sign(f32::NAN).is_nan());
    }

    #[test]
    fn conversions_round_trip_through_f64() {
        assert_eq!(<f32 as Scalar>::from_f64(0.5), 0.5_f32);
        assert_eq!(Scalar::to_f64(0.25_f32), 0.25);
        assert_eq!(<f64 as Scalar>::from_f64(1e-300), 1e-300);
    }
}
