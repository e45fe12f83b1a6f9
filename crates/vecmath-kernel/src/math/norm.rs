// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Euclidean norms that survive underflow and overflow of the squared sum.

use crate::error::{MathError, MathResult};
use crate::math::Scalar;

fn max_abs<S: Scalar>(components: &[S]) -> S {
    components.iter().fold(S::ZERO, |max, &c| {
        let a = c.abs();
        if a > max {
            a
        } else {
            max
        }
    })
}

/// `sqrt(Σ c²)` without spurious underflow or overflow.
///
/// The plain sum of squares is used while it stays in the normal range.
/// Otherwise the components are divided by the largest magnitude first, so
/// `(1e-30, 0)` has length `1e-30` and `(1e20, 0, 0)` has length `1e20`.
pub(crate) fn norm<S: Scalar>(components: &[S]) -> S {
    let sum = components.iter().fold(S::ZERO, |acc, &c| acc + c * c);
    if sum.is_nan() || (sum.is_finite() && sum >= S::MIN_POSITIVE) {
        return sum.sqrt();
    }
    let scale = max_abs(components);
    if scale == S::ZERO || !scale.is_finite() {
        return scale;
    }
    let scaled = components.iter().fold(S::ZERO, |acc, &c| {
        let u = c / scale;
        acc + u * u
    });
    scale * scaled.sqrt()
}

/// Divides every component by the norm.
///
/// When the norm itself overflows the components are pre-divided by the
/// largest magnitude. A zero or non-finite input yields NaNs.
pub(crate) fn unit<S: Scalar, const N: usize>(data: [S; N]) -> [S; N] {
    let len = norm(&data);
    if len.is_finite() {
        return data.map(|c| c / len);
    }
    let scale = max_abs(&data);
    let scaled = data.map(|c| c / scale);
    let len = norm(&scaled);
    scaled.map(|c| c / len)
}

/// Checked [`unit`].
///
/// # Errors
/// [`MathError::InvalidArgument`] for a non-finite component and
/// [`MathError::DivisionByZero`] (tagged with `operation`) for the zero
/// value.
pub(crate) fn checked_unit<S: Scalar, const N: usize>(
    operation: &'static str,
    data: [S; N],
) -> MathResult<[S; N]> {
    if data.iter().any(|c| !c.is_finite()) {
        return Err(MathError::invalid(format!(
            "{operation} requires finite components"
        )));
    }
    if data.iter().all(|&c| c == S::ZERO) {
        return Err(MathError::div_by_zero(operation));
    }
    Ok(unit(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_and_huge_components_keep_their_length() {
        assert_eq!(norm(&[1e-30_f32, 0.0]), 1e-30);
        assert_eq!(norm(&[1e20_f32, 0.0, 0.0]), 1e20);
        assert_eq!(norm(&[3.0_f32, 4.0]), 5.0);
        assert_eq!(norm(&[0.0_f32; 3]), 0.0);
        assert_eq!(norm(&[f32::INFINITY, 1.0]), f32::INFINITY);
        assert!(norm(&[f32::NAN, 1.0]).is_nan());
    }

    #[test]
    fn unit_handles_overflowing_norm() {
        let u = unit([f32::MAX, f32::MAX]);
        let half_sqrt2 = core::f32::consts::FRAC_1_SQRT_2;
        assert!((u[0] - half_sqrt2).abs() < 1e-6, "{u:?}");
        assert!((u[1] - half_sqrt2).abs() < 1e-6, "{u:?}");
    }

    #[test]
    fn checked_unit_rejects_zero_and_non_finite() {
        assert_eq!(
            checked_unit("normalize", [0.0_f64; 2]),
            Err(MathError::div_by_zero("normalize"))
        );
        assert!(matches!(
            checked_unit("normalize", [f64::NAN, 1.0]),
            Err(MathError::InvalidArgument { .. })
        ));
    }
}
