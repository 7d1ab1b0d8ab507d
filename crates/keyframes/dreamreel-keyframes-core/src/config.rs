//! Construction policy for [`Interpolator`](crate::Interpolator).

use serde::{Deserialize, Serialize};

/// How the builder treats keyframes whose timestamps are not ascending.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderPolicy {
    /// Input must already be sorted; a decreasing timestamp is an error.
    #[default]
    Require,
    /// Stable-sort by timestamp before resolving. Equal timestamps keep their
    /// input order.
    Sort,
}

/// Keep this minimal; new knobs get a serde default so older JSON configs
/// keep deserializing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub order: OrderPolicy,
    /// Equal consecutive timestamps describe an instantaneous jump. When false
    /// they are rejected instead.
    pub allow_equal_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            order: OrderPolicy::Require,
            allow_equal_timestamps: true,
        }
    }
}

impl Config {
    /// Default config with defensive sorting turned on.
    pub fn sorted() -> Self {
        Self {
            order: OrderPolicy::Sort,
            ..Self::default()
        }
    }
}
