//! Dreamreel keyframe core (engine-agnostic).
//!
//! Builds a pure, piecewise-linear sampling function from a sparse list of
//! keyframes. Each keyframe sets only the fields it cares about; missing
//! fields are forward-filled, fields introduced later are backfilled from
//! their first value, and time outside the keyframe range holds the nearest
//! boundary frame.
//!
//! Rendering hosts typically build once and call [`Interpolator::sample`] (or
//! the allocation-free [`Interpolator::sample_into`]) every displayed frame.

pub mod baking;
pub mod config;
pub mod data;
pub mod error;
mod resolve;
pub mod sampling;
pub mod stored_keyframes;

// Re-exports for consumers (hosts and bindings)
pub use baking::{
    bake, export_baked_json, BakedField, BakedKeyframes, BakingConfig, MAX_BAKED_FRAMES,
};
pub use config::{Config, OrderPolicy};
pub use data::{Fields, Keyframe, TIMESTAMP_KEY};
pub use error::KeyframeError;
pub use sampling::{build, Interpolator};
pub use stored_keyframes::{keyframes_from_json, load_keyframes_json, parse_keyframes_json};
