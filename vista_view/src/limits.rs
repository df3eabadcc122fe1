// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Closed range of zoom factors a [`crate::Transform`] is kept inside.
///
/// The defaults are `0.3` and `1.0`: content may shrink to 30% of its native
/// size but never grows beyond it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleLimits {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl ScaleLimits {
    /// Default lower bound.
    pub const DEFAULT_MIN: f64 = 0.3;
    /// Default upper bound.
    pub const DEFAULT_MAX: f64 = 1.0;

    /// Creates a new range.
    ///
    /// The bounds are normalized so that `min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Lower and upper bound, in order even if the fields were set reversed
    /// (struct literal or deserialization).
    fn ordered(&self) -> (f64, f64) {
        (self.min.min(self.max), self.max.max(self.min))
    }

    /// Clamps `scale` into this range.
    ///
    /// A NaN scale maps to the upper bound, the native size.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        let (lo, hi) = self.ordered();
        if scale.is_nan() {
            return hi;
        }
        scale.max(lo).min(hi)
    }

    /// Returns `true` if `scale` lies inside the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        let (lo, hi) = self.ordered();
        lo <= scale && scale <= hi
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}
