use crate::search::Bound;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A weight that grows linearly with depth up to a limit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename = "weight")]
pub struct Weight {
    /// The weight at depth zero.
    #[cfg_attr(test, strategy(0i32..=16))]
    pub base: i32,

    /// The increase per unit of depth.
    #[cfg_attr(test, strategy(0i32..=16))]
    pub slope: i32,

    /// The largest weight.
    #[cfg_attr(test, strategy(0i32..=512))]
    pub limit: i32,
}

impl Weight {
    /// Constructs a [`Weight`].
    pub const fn new(base: i32, slope: i32, limit: i32) -> Self {
        Weight { base, slope, limit }
    }

    /// The weight at `depth`.
    #[inline(always)]
    pub fn at(&self, depth: i32) -> i32 {
        self.slope
            .saturating_mul(depth)
            .saturating_add(self.base)
            .min(self.limit)
    }
}

/// Configuration for [`Heuristics`](crate::search::Heuristics).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename = "options", default)]
pub struct Options {
    /// How far an evaluation must fall outside the window to fail very low or very high.
    #[cfg_attr(test, strategy(0i32..=1000))]
    pub margin: i32,

    /// The correction weight of the [`Bound`] an observation is classified as.
    pub exact: Weight,

    /// The correction weight of the [`Bound`]s adjacent to it.
    pub adjacent: Weight,
}

impl Options {
    /// The default configuration.
    pub const DEFAULT: Self = Options {
        margin: Bound::MARGIN,
        exact: Weight::new(3, 3, 48),
        adjacent: Weight::new(2, 2, 32),
    };
}

impl Default for Options {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Options`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display("failed to parse heuristics configuration")]
pub struct ParseOptionsError(ron::de::SpannedError);

impl FromStr for Options {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
