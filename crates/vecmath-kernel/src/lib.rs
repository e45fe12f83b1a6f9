// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! vecmath-kernel: 2D/3D vectors, quaternions, and tolerance helpers.
//!
//! The kernel is a set of small `Copy` value types ([`math::Vec2`],
//! [`math::Vec3`], [`math::Quat`]) generic over `f32`/`f64`, plus the shared
//! numeric helpers they rely on. Operations are synchronous and pure apart
//! from the explicit in-place `_mut` forms; there is no global state.
//! Conventions that must be consistent across call sites live in an explicit
//! [`MathConfig`] value.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::float_cmp
)]

/// Explicit configuration (handedness, tolerance, rounding policy).
pub mod config;
mod error;
/// Scalar trait, tolerance helpers, vectors, and quaternions.
pub mod math;

pub use config::{Handedness, MathConfig};
pub use error::{MathError, MathResult};
pub use math::{
    IndexValue, Quat, Quatd, Quatf, RoundingMode, Scalar, Tolerance, Vec2, Vec2d, Vec2f, Vec3,
    Vec3d, Vec3f,
};
