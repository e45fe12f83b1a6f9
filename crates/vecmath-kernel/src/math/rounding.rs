// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Scalar;

/// Policy used by `round` on the vector types.
///
/// Non-finite inputs are returned unchanged by every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RoundingMode {
    /// Nearest integer; ties toward positive infinity (`2.5 → 3`, `-2.5 → -2`).
    Nearest,
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Nearest integer; ties away from zero.
    #[default]
    HalfUp,
    /// Nearest integer; ties toward zero.
    HalfDown,
    /// Nearest integer; ties to the even neighbour.
    HalfEven,
}

impl RoundingMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Nearest,
        Self::Up,
        Self::Down,
        Self::Ceiling,
        Self::Floor,
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfEven,
    ];

    /// Rounds `value` to an integral value according to this mode.
    pub fn apply<S: Scalar>(self, value: S) -> S {
        if !value.is_finite() {
            return value;
        }
        // `value - floor` is exact for every float with a fractional part.
        let floor = value.floor();
        let frac = value - floor;
        match self {
            Self::Nearest => {
                if frac >= S::HALF {
                    floor + S::ONE
                } else {
                    floor
                }
            }
            Self::Up => {
                if value >= S::ZERO {
                    value.ceil()
                } else {
                    floor
                }
            }
            Self::Down => value.trunc(),
            Self::Ceiling => value.ceil(),
            Self::Floor => floor,
            Self::HalfUp => value.round(),
            Self::HalfDown => {
                if frac == S::HALF {
                    value.trunc()
                } else {
                    value.round()
                }
            }
            Self::HalfEven => {
                if frac < S::HALF {
                    floor
                } else if frac > S::HALF || !is_even(floor) {
                    floor + S::ONE
                } else {
                    floor
                }
            }
        }
    }
}

fn is_even<S: Scalar>(value: S) -> bool {
    (value * S::HALF).floor() * S::TWO == value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(mode: RoundingMode) -> [f32; 6] {
        [2.5_f32, -2.5, 3.5, 2.4, -2.6, 0.499_999_97].map(|v| mode.apply(v))
    }

    #[test]
    fn modes_resolve_ties_as_documented() {
        assert_eq!(table(RoundingMode::Nearest), [3.0, -2.0, 4.0, 2.0, -3.0, 0.0]);
        assert_eq!(table(RoundingMode::Up), [3.0, -3.0, 4.0, 3.0, -3.0, 1.0]);
        assert_eq!(table(RoundingMode::Down), [2.0, -2.0, 3.0, 2.0, -2.0, 0.0]);
        assert_eq!(table(RoundingMode::Ceiling), [3.0, -2.0, 4.0, 3.0, -2.0, 1.0]);
        assert_eq!(table(RoundingMode::Floor), [2.0, -3.0, 3.0, 2.0, -3.0, 0.0]);
        assert_eq!(table(RoundingMode::HalfUp), [3.0, -3.0, 4.0, 2.0, -3.0, 0.0]);
        assert_eq!(table(RoundingMode::HalfDown), [2.0, -2.0, 3.0, 2.0, -3.0, 0.0]);
        assert_eq!(table(RoundingMode::HalfEven), [2.0, -2.0, 4.0, 2.0, -3.0, 0.0]);
    }

    #[test]
    fn non_finite_passes_through() {
        for mode in RoundingMode::ALL {
            assert!(mode.apply(f64::NAN).is_nan());
            assert_eq!(mode.apply(f64::INFINITY), f64::INFINITY);
            assert_eq!(mode.apply(f64::NEG_INFINITY), f64::NEG_INFINITY);
        }
    }
}
