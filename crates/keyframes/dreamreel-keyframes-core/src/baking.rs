//! Baking API: pre-sample an interpolator at a fixed rate over a time window.

use serde::{Deserialize, Serialize};

use crate::sampling::Interpolator;

const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Upper bound on frames per bake. Windows needing more are truncated at the
/// end: `end_time` is pulled in so exactly this many frames are produced.
pub const MAX_BAKED_FRAMES: usize = 1 << 20;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BakingConfig {
    /// Samples per unit of keyframe time.
    pub frame_rate: f64,
    /// Window start; defaults to the first keyframe timestamp.
    pub start_time: Option<f64>,
    /// Window end; defaults to the last keyframe timestamp.
    pub end_time: Option<f64>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            start_time: None,
            end_time: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedField {
    pub name: String,
    /// One value per baked frame.
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedKeyframes {
    pub frame_rate: f64,
    pub start_time: f64,
    pub end_time: f64,
    pub tracks: Vec<BakedField>,
}

impl BakedKeyframes {
    pub fn frame_count(&self) -> usize {
        self.tracks.first().map_or(0, |t| t.values.len())
    }
}

/// Bake every field of `interp` using `cfg`. Frames are spaced `1 / frame_rate`
/// apart from `start_time`, with the final frame landing exactly on `end_time`.
/// At most [`MAX_BAKED_FRAMES`] frames are produced; see there for truncation.
pub fn bake(interp: &Interpolator, cfg: &BakingConfig) -> BakedKeyframes {
    let sr = if cfg.frame_rate.is_finite() && cfg.frame_rate > 0.0 {
        cfg.frame_rate
    } else {
        DEFAULT_FRAME_RATE
    };
    let start = cfg
        .start_time
        .filter(|t| t.is_finite())
        .unwrap_or_else(|| interp.start());
    let mut end = cfg
        .end_time
        .filter(|t| t.is_finite())
        .unwrap_or_else(|| interp.end())
        .max(start);

    let span = end - start;
    let steps = (span * sr).ceil();
    let frame_count = if steps.is_finite() && steps < (MAX_BAKED_FRAMES - 1) as f64 {
        steps as usize + 1 // inclusive of end
    } else {
        let truncated = start + (MAX_BAKED_FRAMES - 1) as f64 / sr;
        log::warn!(
            "bake window {start}..{end} at {sr} Hz exceeds {MAX_BAKED_FRAMES} frames; ending at {truncated}"
        );
        end = truncated.min(end);
        MAX_BAKED_FRAMES
    };

    let mut tracks: Vec<BakedField> = interp
        .field_names()
        .map(|name| BakedField {
            name: name.to_string(),
            values: Vec::with_capacity(frame_count),
        })
        .collect();

    let mut row = Vec::with_capacity(tracks.len());
    for f in 0..frame_count {
        let t = (start + f as f64 / sr).min(end);
        interp.sample_into(t, &mut row);
        for (track, value) in tracks.iter_mut().zip(&row) {
            track.values.push(*value);
        }
    }

    BakedKeyframes {
        frame_rate: sr,
        start_time: start,
        end_time: end,
        tracks,
    }
}

/// Export baked data as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json(baked: &BakedKeyframes) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
