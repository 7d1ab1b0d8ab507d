//! The sampling function over resolved frames.
//!
//! Model:
//! - `t` before (or at) the first timestamp holds the first frame.
//! - `t` at or after the last timestamp holds the last frame.
//! - Otherwise the segment is `[lo, hi]` with `stamps[lo] < t <= stamps[hi]` and
//!   every field is lerped independently by `(t - stamps[lo]) / (stamps[hi] - stamps[lo])`.
//! - `t` exactly on a timestamp returns that frame's stored row, no arithmetic.
//!
//! Sampling never fails and never allocates beyond the returned map.

use std::sync::Arc;

use crate::config::Config;
use crate::data::{Fields, Keyframe};
use crate::error::KeyframeError;
use crate::resolve::{resolve, ResolvedFrames};

/// Where a sample time falls relative to the frame table.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Segment {
    /// Return row `index` as is.
    Hold(usize),
    /// Lerp row `lo` towards row `lo + 1` by `lerp` in (0, 1).
    Between { lo: usize, lerp: f64 },
}

fn find_segment(stamps: &[f64], t: f64) -> Segment {
    // First frame with stamp >= t. NaN compares false, so it lands on frame 0.
    let hi = stamps.partition_point(|s| *s < t);
    if hi == 0 {
        return Segment::Hold(0);
    }
    if hi == stamps.len() {
        return Segment::Hold(stamps.len() - 1);
    }
    if stamps[hi] == t {
        return Segment::Hold(hi);
    }
    let lo = hi - 1;
    let lerp = (t - stamps[lo]) / (stamps[hi] - stamps[lo]);
    Segment::Between { lo, lerp }
}

/// Piecewise-linear sampler built from sparse keyframes.
///
/// Cloning is cheap: the resolved frames are shared and never mutated, so
/// clones can be handed to other threads freely.
#[derive(Clone, Debug)]
pub struct Interpolator {
    frames: Arc<ResolvedFrames>,
}

impl Interpolator {
    /// Build with the default [`Config`] (input must be sorted).
    pub fn new(keyframes: &[Keyframe]) -> Result<Self, KeyframeError> {
        Self::with_config(keyframes, &Config::default())
    }

    pub fn with_config(keyframes: &[Keyframe], cfg: &Config) -> Result<Self, KeyframeError> {
        let frames = resolve(keyframes, cfg)?;
        Ok(Self {
            frames: Arc::new(frames),
        })
    }

    /// Every field name, in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.frames.schema.iter().map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.frames.width()
    }

    /// Number of keyframes (always at least one).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when there are no keyframes.
    pub fn is_empty(&self) -> bool {
        self.frames.len() == 0
    }

    /// Timestamp of the first keyframe.
    pub fn start(&self) -> f64 {
        self.frames.stamps[0]
    }

    /// Timestamp of the last keyframe.
    pub fn end(&self) -> f64 {
        self.frames.stamps[self.frames.len() - 1]
    }

    pub fn duration(&self) -> f64 {
        self.end() - self.start()
    }

    /// Fully resolved fields of keyframe `index` (after ordering).
    pub fn resolved_frame(&self, index: usize) -> Option<Fields> {
        (index < self.frames.len()).then(|| self.to_fields(self.frames.row(index)))
    }

    /// Sample every field at time `t`.
    pub fn sample(&self, t: f64) -> Fields {
        let mut out = Vec::with_capacity(self.frames.width());
        self.sample_into(t, &mut out);
        self.to_fields(&out)
    }

    /// Allocation-free form of [`sample`](Self::sample) for per-frame use:
    /// clears `out` and writes one value per field in schema order.
    pub fn sample_into(&self, t: f64, out: &mut Vec<f64>) {
        out.clear();
        match find_segment(&self.frames.stamps, t) {
            Segment::Hold(index) => out.extend_from_slice(self.frames.row(index)),
            Segment::Between { lo, lerp } => {
                let before = self.frames.row(lo);
                let after = self.frames.row(lo + 1);
                out.extend(
                    before
                        .iter()
                        .zip(after)
                        .map(|(a, b)| a + (b - a) * lerp),
                );
            }
        }
    }

    /// Sample a single field; `None` if the name is not in the schema.
    pub fn sample_field(&self, name: &str, t: f64) -> Option<f64> {
        let col = self.frames.schema.get_index_of(name)?;
        let value = match find_segment(&self.frames.stamps, t) {
            Segment::Hold(index) => self.frames.row(index)[col],
            Segment::Between { lo, lerp } => {
                let a = self.frames.row(lo)[col];
                let b = self.frames.row(lo + 1)[col];
                a + (b - a) * lerp
            }
        };
        Some(value)
    }

    /// Rate of change of every field at `t`: the slope of the segment
    /// `stamps[lo] < t <= stamps[hi]`, so a keyframe time reports its incoming
    /// slope. Zero at or before the first keyframe and after the last.
    pub fn velocity(&self, t: f64) -> Fields {
        let stamps = &self.frames.stamps;
        let hi = stamps.partition_point(|s| *s < t);
        if hi == 0 || hi == stamps.len() {
            return self.to_fields(&vec![0.0; self.frames.width()]);
        }
        let lo = hi - 1;
        let inv_dt = (stamps[hi] - stamps[lo]).recip();
        let slopes: Vec<f64> = self
            .frames
            .row(lo)
            .iter()
            .zip(self.frames.row(hi))
            .map(|(a, b)| (b - a) * inv_dt)
            .collect();
        self.to_fields(&slopes)
    }

    /// Turn this interpolator into a plain sampling closure.
    pub fn into_fn(self) -> impl Fn(f64) -> Fields + Clone + Send + Sync {
        move |t| self.sample(t)
    }

    fn to_fields(&self, values: &[f64]) -> Fields {
        self.frames
            .schema
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect()
    }
}

/// Build a sampling function from sparse keyframes using the default
/// [`Config`].
///
/// ```
/// use dreamreel_keyframes_core::{build, Keyframe};
///
/// let scene = build(&[
///     Keyframe::new(1.0).with("x", 5.0),
///     Keyframe::new(2.0).with("x", 10.0),
/// ])
/// .unwrap();
/// assert_eq!(scene(1.5)["x"], 7.5);
/// assert_eq!(scene(-3.0)["x"], 5.0);
/// ```
pub fn build(
    keyframes: &[Keyframe],
) -> Result<impl Fn(f64) -> Fields + Clone + Send + Sync, KeyframeError> {
    Interpolator::new(keyframes).map(Interpolator::into_fn)
}
