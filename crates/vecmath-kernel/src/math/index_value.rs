// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Component index paired with the component's value.
///
/// Returned by `min_entry` / `max_entry` on the vector types.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexValue<S = f32> {
    /// Axis index (`0 = x`, `1 = y`, `2 = z`).
    pub index: usize,
    /// Value stored on that axis.
    pub value: S,
}

impl<S> IndexValue<S> {
    /// Pairs `index` with `value`.
    pub const fn new(index: usize, value: S) -> Self {
        Self { index, value }
    }
}
