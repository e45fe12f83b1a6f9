// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Derivation macros shared by `Vec2`, `Vec3`, and `Quat`.
//!
//! Each value type hand-writes its geometric operations. Everything that is
//! purely per-component (or purely mechanical, such as the in-place `_mut`
//! forms) is generated here so the types cannot drift apart.

/// Generates `fn $name(&mut self, ..) -> &mut Self` from an infallible pure
/// method of the same arguments.
macro_rules! in_place {
    ($(#[$meta:meta])* $name:ident => $pure:ident($($arg:ident: $ty:ty),* $(,)?)) => {
        $(#[$meta])*
        pub fn $name(&mut self $(, $arg: $ty)*) -> &mut Self {
            *self = self.$pure($($arg),*);
            self
        }
    };
}

/// Like [`in_place!`] for pure methods returning `MathResult<Self>`. The
/// receiver is left untouched when the operation fails.
macro_rules! try_in_place {
    ($(#[$meta:meta])* $name:ident => $pure:ident($($arg:ident: $ty:ty),* $(,)?)) => {
        $(#[$meta])*
        pub fn $name(&mut self $(, $arg: $ty)*) -> $crate::error::MathResult<&mut Self> {
            *self = self.$pure($($arg),*)?;
            Ok(self)
        }
    };
}

/// Array interop, component access, `Display`, and the `approx` traits.
macro_rules! impl_tuple_common {
    ($T:ident, $N:literal) => {
        impl<S: $crate::math::Scalar> $T<S> {
            /// Number of components.
            pub const DIM: usize = $N;

            /// Creates a value from its component array.
            pub const fn from_array(data: [S; $N]) -> Self {
                Self { data }
            }

            /// Returns the components as an array.
            pub fn to_array(self) -> [S; $N] {
                self.data
            }

            /// Borrows the components as an array.
            pub fn as_array(&self) -> &[S; $N] {
                &self.data
            }

            /// Reads component `index`.
            ///
            /// # Errors
            /// [`MathError::IndexOutOfRange`](crate::MathError::IndexOutOfRange)
            /// when `index >= DIM`.
            pub fn get(&self, index: usize) -> $crate::error::MathResult<S> {
                self.data
                    .get(index)
                    .copied()
                    .ok_or_else(|| $crate::error::MathError::out_of_range(index, $N))
            }

            /// Writes component `index` and returns the receiver.
            ///
            /// # Errors
            /// [`MathError::IndexOutOfRange`](crate::MathError::IndexOutOfRange)
            /// when `index >= DIM`.
            pub fn set(&mut self, index: usize, value: S) -> $crate::error::MathResult<&mut Self> {
                let slot = self
                    .data
                    .get_mut(index)
                    .ok_or_else(|| $crate::error::MathError::out_of_range(index, $N))?;
                *slot = value;
                Ok(self)
            }

            /// `true` when every component is finite.
            pub fn is_finite(&self) -> bool {
                self.data.iter().all(|c| c.is_finite())
            }

            /// Componentwise comparison within `tolerance`.
            pub fn approx_eq(&self, other: &Self, tolerance: $crate::math::Tolerance<S>) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(&a, &b)| tolerance.contains(a - b))
            }
        }

        impl<S: $crate::math::Scalar> From<[S; $N]> for $T<S> {
            fn from(data: [S; $N]) -> Self {
                Self { data }
            }
        }

        impl<S: $crate::math::Scalar> From<$T<S>> for [S; $N] {
            fn from(value: $T<S>) -> Self {
                value.data
            }
        }

        impl<S: $crate::math::Scalar> TryFrom<&[S]> for $T<S> {
            type Error = $crate::error::MathError;

            fn try_from(values: &[S]) -> Result<Self, Self::Error> {
                <[S; $N]>::try_from(values).map(Self::from_array).map_err(|_| {
                    $crate::error::MathError::invalid(format!(
                        "{} expects {} components, got {}",
                        stringify!($T),
                        $N,
                        values.len()
                    ))
                })
            }
        }

        impl<S: $crate::math::Scalar> core::fmt::Display for $T<S> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("(")?;
                for (i, c) in self.data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str(")")
            }
        }

        impl<S: $crate::math::Scalar> approx::AbsDiffEq for $T<S> {
            type Epsilon = S;

            fn default_epsilon() -> S {
                S::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: S) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(a, b)| S::abs_diff_eq(a, b, epsilon))
            }
        }

        impl<S: $crate::math::Scalar> approx::RelativeEq for $T<S> {
            fn default_max_relative() -> S {
                S::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: S, max_relative: S) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(a, b)| S::relative_eq(a, b, epsilon, max_relative))
            }
        }
    };
}

/// Per-component vector operations and the raw (IEEE) operator set.
macro_rules! impl_vector_componentwise {
    ($T:ident, $N:literal) => {
        impl<S: $crate::math::Scalar> $T<S> {
            /// Creates a vector with every component set to `value`.
            pub fn splat(value: S) -> Self {
                Self { data: [value; $N] }
            }

            pub(crate) fn map(&self, f: impl Fn(S) -> S) -> Self {
                Self {
                    data: self.data.map(f),
                }
            }

            pub(crate) fn zip_with(&self, other: &Self, f: impl Fn(S, S) -> S) -> Self {
                Self {
                    data: core::array::from_fn(|i| f(self.data[i], other.data[i])),
                }
            }

            /// Multiplies every component by `scalar`.
            pub fn scale(&self, scalar: S) -> Self {
                self.map(|c| c * scalar)
            }

            /// Componentwise product.
            pub fn mul_elem(&self, other: &Self) -> Self {
                self.zip_with(other, |a, b| a * b)
            }

            /// Componentwise quotient; fails if any component of `other` is zero.
            pub fn checked_div(&self, other: &Self) -> $crate::error::MathResult<Self> {
                if other.data.iter().any(|&c| c == S::ZERO) {
                    return Err($crate::error::MathError::div_by_zero("checked_div"));
                }
                Ok(self.zip_with(other, |a, b| a / b))
            }

            /// Divides every component by `scalar`; fails when `scalar` is zero.
            pub fn checked_div_scalar(&self, scalar: S) -> $crate::error::MathResult<Self> {
                if scalar == S::ZERO {
                    return Err($crate::error::MathError::div_by_zero("checked_div_scalar"));
                }
                Ok(self.map(|c| c / scalar))
            }

            /// `other - self`.
            pub fn reverse_sub(&self, other: &Self) -> Self {
                other.zip_with(self, |a, b| a - b)
            }

            /// `other / self` componentwise, IEEE semantics on zero components.
            pub fn reverse_div(&self, other: &Self) -> Self {
                other.zip_with(self, |a, b| a / b)
            }

            /// `other / self` componentwise; fails if any component of `self` is zero.
            pub fn checked_reverse_div(&self, other: &Self) -> $crate::error::MathResult<Self> {
                if self.data.iter().any(|&c| c == S::ZERO) {
                    return Err($crate::error::MathError::div_by_zero("checked_reverse_div"));
                }
                Ok(self.reverse_div(other))
            }

            /// Negates every component.
            pub fn negate(&self) -> Self {
                self.map(|c| -c)
            }

            /// `1 / c` per component with IEEE semantics (`1/0 = inf`).
            pub fn recip(&self) -> Self {
                self.map(|c| S::ONE / c)
            }

            /// `1 / c` per component; fails if any component is zero.
            pub fn checked_recip(&self) -> $crate::error::MathResult<Self> {
                if self.data.iter().any(|&c| c == S::ZERO) {
                    return Err($crate::error::MathError::div_by_zero("checked_recip"));
                }
                Ok(self.recip())
            }

            /// Componentwise minimum.
            pub fn min(&self, other: &Self) -> Self {
                self.zip_with(other, S::min)
            }

            /// Componentwise maximum.
            pub fn max(&self, other: &Self) -> Self {
                self.zip_with(other, S::max)
            }

            fn entry_by(&self, better: impl Fn(S, S) -> bool) -> $crate::math::IndexValue<S> {
                let mut best = $crate::math::IndexValue::new(0, self.data[0]);
                for (index, &value) in self.data.iter().enumerate().skip(1) {
                    if better(value, best.value) {
                        best = $crate::math::IndexValue::new(index, value);
                    }
                }
                best
            }

            /// Smallest component and its axis; ties resolve to the lowest index.
            pub fn min_entry(&self) -> $crate::math::IndexValue<S> {
                self.entry_by(|candidate, best| candidate < best)
            }

            /// Largest component and its axis; ties resolve to the lowest index.
            pub fn max_entry(&self) -> $crate::math::IndexValue<S> {
                self.entry_by(|candidate, best| candidate > best)
            }

            /// Absolute value per component.
            pub fn abs(&self) -> Self {
                self.map(S::abs)
            }

            /// Sign per component (`-1`, `0`, `+1`).
            pub fn sign(&self) -> Self {
                self.map(S::sign)
            }

            /// Rounds every component toward positive infinity.
            pub fn ceil(&self) -> Self {
                self.map(S::ceil)
            }

            /// Rounds every component toward negative infinity.
            pub fn floor(&self) -> Self {
                self.map(S::floor)
            }

            /// Rounds every component toward zero.
            pub fn trunc(&self) -> Self {
                self.map(S::trunc)
            }

            /// Rounds every component with `mode`.
            pub fn round(&self, mode: $crate::math::RoundingMode) -> Self {
                self.map(|c| mode.apply(c))
            }

            /// `true` when every component is within `tolerance` of zero.
            pub fn is_zero(&self, tolerance: $crate::math::Tolerance<S>) -> bool {
                self.data.iter().all(|&c| tolerance.contains(c))
            }

            /// `true` when component `index` is within `tolerance` of zero.
            pub fn is_axis_zero(
                &self,
                index: usize,
                tolerance: $crate::math::Tolerance<S>,
            ) -> $crate::error::MathResult<bool> {
                Ok(tolerance.contains(self.get(index)?))
            }

            /// `true` when component `index` is finite.
            pub fn is_axis_finite(&self, index: usize) -> $crate::error::MathResult<bool> {
                Ok(self.get(index)?.is_finite())
            }

            in_place!(
                /// In-place [`Self::scale`].
                scale_mut => scale(scalar: S)
            );
            in_place!(
                /// In-place [`Self::mul_elem`].
                mul_elem_mut => mul_elem(other: &Self)
            );
            try_in_place!(
                /// In-place [`Self::checked_div`].
                checked_div_mut => checked_div(other: &Self)
            );
            try_in_place!(
                /// In-place [`Self::checked_div_scalar`].
                checked_div_scalar_mut => checked_div_scalar(scalar: S)
            );
            in_place!(
                /// In-place [`Self::reverse_sub`].
                reverse_sub_mut => reverse_sub(other: &Self)
            );
            in_place!(
                /// In-place [`Self::reverse_div`].
                reverse_div_mut => reverse_div(other: &Self)
            );
            try_in_place!(
                /// In-place [`Self::checked_reverse_div`].
                checked_reverse_div_mut => checked_reverse_div(other: &Self)
            );
            in_place!(
                /// In-place [`Self::negate`].
                negate_mut => negate()
            );
            in_place!(
                /// In-place [`Self::recip`].
                recip_mut => recip()
            );
            try_in_place!(
                /// In-place [`Self::checked_recip`].
                checked_recip_mut => checked_recip()
            );
            in_place!(
                /// In-place [`Self::min`].
                min_mut => min(other: &Self)
            );
            in_place!(
                /// In-place [`Self::max`].
                max_mut => max(other: &Self)
            );
            in_place!(
                /// In-place [`Self::abs`].
                abs_mut => abs()
            );
            in_place!(
                /// In-place [`Self::sign`].
                sign_mut => sign()
            );
            in_place!(
                /// In-place [`Self::ceil`].
                ceil_mut => ceil()
            );
            in_place!(
                /// In-place [`Self::floor`].
                floor_mut => floor()
            );
            in_place!(
                /// In-place [`Self::trunc`].
                trunc_mut => trunc()
            );
            in_place!(
                /// In-place [`Self::round`].
                round_mut => round(mode: $crate::math::RoundingMode)
            );
        }

        impl<S: $crate::math::Scalar> core::ops::Add for $T<S> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a + b)
            }
        }

        impl<S: $crate::math::Scalar> core::ops::Sub for $T<S> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a - b)
            }
        }

        impl<S: $crate::math::Scalar> core::ops::Mul for $T<S> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                self.mul_elem(&rhs)
            }
        }

        impl<S: $crate::math::Scalar> core::ops::Mul<S> for $T<S> {
            type Output = Self;
            fn mul(self, rhs: S) -> Self {
                self.scale(rhs)
            }
        }

        impl<S: $crate::math::Scalar> core::ops::Div for $T<S> {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a / b)
            }
        }

        impl<S: $crate::math::Scalar> core::ops::Div<S> for $T<S> {
            type Output = Self;
            fn div(self, rhs: S) -> Self {
                self.map(|c| c / rhs)
            }
        }

        impl<S: $crate::math::Scalar> core::ops::Neg for $T<S> {
            type Output = Self;
            fn neg(self) -> Self {
                self.negate()
            }
        }

        impl<S: $crate::math::Scalar> core::ops::AddAssign for $T<S> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<S: $crate::math::Scalar> core::ops::SubAssign for $T<S> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<S: $crate::math::Scalar> core::ops::MulAssign for $T<S> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<S: $crate::math::Scalar> core::ops::MulAssign<S> for $T<S> {
            fn mul_assign(&mut self, rhs: S) {
                *self = *self * rhs;
            }
        }

        impl<S: $crate::math::Scalar> core::ops::DivAssign for $T<S> {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl<S: $crate::math::Scalar> core::ops::DivAssign<S> for $T<S> {
            fn div_assign(&mut self, rhs: S) {
                *self = *self / rhs;
            }
        }

        impl core::ops::Mul<$T<f32>> for f32 {
            type Output = $T<f32>;
            fn mul(self, rhs: $T<f32>) -> $T<f32> {
                rhs.scale(self)
            }
        }

        impl core::ops::Mul<$T<f64>> for f64 {
            type Output = $T<f64>;
            fn mul(self, rhs: $T<f64>) -> $T<f64> {
                rhs.scale(self)
            }
        }
    };
}
