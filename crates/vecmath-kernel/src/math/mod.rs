// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vector, quaternion, and tolerance math over `f32` / `f64`.
//!
//! Every value type is a small `Copy` struct generic over [`Scalar`]. Each
//! operation comes in a pure form returning a new value and, where it makes
//! sense, an in-place `_mut` form that mutates the receiver.
//!
//! Degenerate input policy:
//! - "Safe" operations (`normalize`, `checked_*`, `reciprocal_length`, and
//!   the quaternion `inverse`/`normalize`) fail with
//!   [`MathError::DivisionByZero`](crate::MathError::DivisionByZero) on an
//!   exact zero. `normalize` additionally rejects non-finite components
//!   with [`MathError::InvalidArgument`](crate::MathError::InvalidArgument).
//! - Lengths are computed without intermediate underflow or overflow.
//! - Raw operations (operators, `recip`, `normalize_unchecked`) follow
//!   IEEE-754 and may produce infinities or NaN.
//! - Tolerance-gated operations take an explicit [`Tolerance`].

use core::f64::consts::TAU;

#[macro_use]
mod macros;

mod index_value;
mod norm;
mod quat;
mod rounding;
mod scalar;
pub(crate) mod tolerance;
mod vec2;
mod vec3;

pub use index_value::IndexValue;
pub use quat::{Quat, Quatd, Quatf};
pub use rounding::RoundingMode;
pub use scalar::Scalar;
pub use tolerance::{checked_div, is_zero, safe_reciprocal, Tolerance};
pub use vec2::{Vec2, Vec2d, Vec2f};
pub use vec3::{Vec3, Vec3d, Vec3f};

/// Converts degrees to radians.
pub fn deg_to_rad<S: Scalar>(value: S) -> S {
    value * S::from_f64(TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg<S: Scalar>(value: S) -> S {
    value * S::from_f64(360.0 / TAU)
}
