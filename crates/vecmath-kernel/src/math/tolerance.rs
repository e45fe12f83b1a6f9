// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Zero tests and guarded division shared by the vector and quaternion code.

use crate::error::{MathError, MathResult};
use crate::math::Scalar;

/// Non-negative absolute tolerance.
///
/// Constructed through [`Tolerance::new`], so a value of this type is always
/// `>= 0` and never NaN. Operations that accept a `Tolerance` therefore
/// cannot fail on it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance<S = f32>(S);

impl<S: Scalar> Tolerance<S> {
    /// Zero tolerance: only an exact zero counts as zero.
    pub const EXACT: Self = Self(S::ZERO);

    /// Validates and wraps `epsilon`.
    ///
    /// Fails with [`MathError::InvalidArgument`] for negative or NaN input.
    pub fn new(epsilon: S) -> MathResult<Self> {
        if epsilon.is_nan() || epsilon < S::ZERO {
            return Err(MathError::invalid(format!(
                "tolerance must be >= 0, got {epsilon}"
            )));
        }
        Ok(Self(epsilon))
    }

    /// Wraps a value the caller has already validated.
    pub(crate) const fn from_validated(epsilon: S) -> Self {
        Self(epsilon)
    }

    /// The wrapped epsilon.
    pub fn value(self) -> S {
        self.0
    }

    /// `true` iff `|value| <= epsilon`.
    pub fn contains(self, value: S) -> bool {
        value.abs() <= self.0
    }
}

impl<S: Scalar> Default for Tolerance<S> {
    fn default() -> Self {
        Self(S::DEFAULT_TOLERANCE)
    }
}

/// Returns `true` iff `|value| <= tolerance`.
///
/// # Errors
/// [`MathError::InvalidArgument`] when `tolerance` is negative or NaN.
///
/// # Examples
/// ```
/// use vecmath_kernel::math::is_zero;
/// assert_eq!(is_zero(1e-3_f32, 5e-4), Ok(true));
/// assert!(is_zero(-1.0_f32, 0.0).is_err());
/// ```
pub fn is_zero<S: Scalar>(tolerance: S, value: S) -> MathResult<bool> {
    Ok(Tolerance::new(tolerance)?.contains(value))
}

/// Returns `1 / value`, failing with [`MathError::DivisionByZero`] on zero.
pub fn safe_reciprocal<S: Scalar>(value: S) -> MathResult<S> {
    checked_div_in("safe_reciprocal", S::ONE, value)
}

/// Returns `numerator / denominator`, failing with
/// [`MathError::DivisionByZero`] when the denominator is exactly zero.
pub fn checked_div<S: Scalar>(numerator: S, denominator: S) -> MathResult<S> {
    checked_div_in("checked_div", numerator, denominator)
}

pub(crate) fn checked_div_in<S: Scalar>(
    operation: &'static str,
    numerator: S,
    denominator: S,
) -> MathResult<S> {
    if denominator == S::ZERO {
        return Err(MathError::div_by_zero(operation));
    }
    Ok(numerator / denominator)
}
