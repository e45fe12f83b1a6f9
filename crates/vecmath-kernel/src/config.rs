// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Explicit math configuration threaded through call sites.
//!
//! There is no process-wide configuration. Code that needs a consistent
//! convention (cross-product handedness, default tolerance, rounding policy)
//! takes a [`MathConfig`] by reference.

use crate::error::MathResult;
use crate::math::{RoundingMode, Scalar, Tolerance, Vec2, Vec3};

/// Orientation convention of the 3D coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Handedness {
    /// `X × Y = Z`.
    #[default]
    Right,
    /// `X × Y = -Z`.
    Left,
}

impl Handedness {
    /// `+1` for right-handed, `-1` for left-handed systems.
    pub fn cross_sign<S: Scalar>(self) -> S {
        match self {
            Self::Right => S::ONE,
            Self::Left => -S::ONE,
        }
    }
}

/// Conventions shared by a group of call sites.
///
/// Built with the `with_*` methods; the tolerance is validated on the way in
/// so a `MathConfig` value is always usable.
///
/// # Examples
/// ```
/// use vecmath_kernel::{Handedness, MathConfig};
/// use vecmath_kernel::math::Vec3f;
///
/// let config = MathConfig::new().with_handedness(Handedness::Left);
/// assert_eq!(config.cross(&Vec3f::UNIT_X, &Vec3f::UNIT_Y), -Vec3f::UNIT_Z);
/// assert!(MathConfig::new().with_tolerance(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct MathConfig {
    handedness: Handedness,
    tolerance: f64,
    rounding: RoundingMode,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            handedness: Handedness::Right,
            tolerance: 1e-6,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl MathConfig {
    /// Right-handed, tolerance `1e-6`, [`RoundingMode::HalfUp`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cross-product handedness.
    pub fn with_handedness(mut self, handedness: Handedness) -> Self {
        self.handedness = handedness;
        self
    }

    /// Sets the rounding policy used by [`MathConfig::round2`] / [`MathConfig::round3`].
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets the default zero tolerance.
    ///
    /// # Errors
    /// [`MathError::InvalidArgument`](crate::MathError::InvalidArgument) for a
    /// negative or NaN tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> MathResult<Self> {
        self.tolerance = Tolerance::new(tolerance)?.value();
        Ok(self)
    }

    /// Configured handedness.
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Configured rounding policy.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Configured tolerance converted to the scalar type `S`.
    pub fn tolerance<S: Scalar>(&self) -> Tolerance<S> {
        Tolerance::from_validated(S::from_f64(self.tolerance))
    }

    /// Checks the invariants enforced by the builder.
    ///
    /// Only needed for values that bypassed the builder, such as
    /// deserialized configurations.
    pub fn validate(&self) -> MathResult<()> {
        Tolerance::new(self.tolerance).map(|_| ())
    }

    /// Cross product under the configured handedness.
    pub fn cross<S: Scalar>(&self, a: &Vec3<S>, b: &Vec3<S>) -> Vec3<S> {
        a.cross_with(b, self.handedness)
    }

    /// Rounds `v` with the configured policy.
    pub fn round2<S: Scalar>(&self, v: &Vec2<S>) -> Vec2<S> {
        v.round(self.rounding)
    }

    /// Rounds `v` with the configured policy.
    pub fn round3<S: Scalar>(&self, v: &Vec3<S>) -> Vec3<S> {
        v.round(self.rounding)
    }

    /// `true` when `|value|` is within the configured tolerance.
    pub fn is_zero<S: Scalar>(&self, value: S) -> bool {
        self.tolerance::<S>().contains(value)
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// Missing fields fall back to [`MathConfig::default`]; unknown fields are
    /// rejected.
    ///
    /// # Errors
    /// [`MathError::Config`](crate::MathError::Config) when the JSON is
    /// malformed, or the validation error when a field value is out of range.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> MathResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| crate::error::MathError::Config(err.to_string()))?;
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejecting math config");
            return Err(err);
        }
        tracing::debug!(
            handedness = ?config.handedness,
            tolerance = config.tolerance,
            rounding = ?config.rounding,
            "loaded math config"
        );
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// [`MathError::Config`](crate::MathError::Config) if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> MathResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| crate::error::MathError::Config(err.to_string()))
    }
}
