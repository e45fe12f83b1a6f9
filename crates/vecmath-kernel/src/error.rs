// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by every fallible kernel operation.

use thiserror::Error;

/// Result alias used across the crate.
pub type MathResult<T> = Result<T, MathError>;

/// Failures raised synchronously at the point of detection.
///
/// Only the checked ("safe") operations return these. Raw operations and
/// operators follow IEEE-754 and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Malformed input: negative tolerance, wrong slice length, and similar.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the offending input.
        reason: String,
    },
    /// A reciprocal, division, or normalisation hit an exact zero.
    #[error("division by zero in {operation}")]
    DivisionByZero {
        /// Name of the operation that detected the zero divisor.
        operation: &'static str,
    },
    /// Component index outside `0..dimension`.
    #[error("index {index} out of range for dimension {dimension}")]
    IndexOutOfRange {
        /// Requested component index.
        index: usize,
        /// Number of components of the value being indexed.
        dimension: usize,
    },
    /// A serialized configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl MathError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) const fn div_by_zero(operation: &'static str) -> Self {
        Self::DivisionByZero { operation }
    }

    pub(crate) const fn out_of_range(index: usize, dimension: usize) -> Self {
        Self::IndexOutOfRange { index, dimension }
    }
}
