//! Schema discovery and forward-fill.
//!
//! Turns sparse keyframes into dense resolved frames:
//! - The schema is every field name seen anywhere, in order of first appearance.
//! - Each field's default is the first value it is ever given. Fields introduced
//!   late in the timeline are therefore present from the very first frame.
//! - Frame 0 = defaults overlaid with keyframe 0; frame i = frame i-1 overlaid
//!   with keyframe i.

use std::cmp::Ordering;

use indexmap::{IndexMap, IndexSet};

use crate::config::{Config, OrderPolicy};
use crate::data::Keyframe;
use crate::error::KeyframeError;

/// Dense, immutable frame table. Row `i` holds every schema field for
/// keyframe `i` (after ordering), columns in schema order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedFrames {
    pub(crate) schema: IndexSet<String>,
    pub(crate) stamps: Vec<f64>,
    values: Vec<f64>,
}

impl ResolvedFrames {
    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.schema.len()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.stamps.len()
    }

    #[inline]
    pub(crate) fn row(&self, index: usize) -> &[f64] {
        let w = self.width();
        &self.values[index * w..(index + 1) * w]
    }
}

/// Validate, order and forward-fill `keyframes`.
pub(crate) fn resolve(
    keyframes: &[Keyframe],
    cfg: &Config,
) -> Result<ResolvedFrames, KeyframeError> {
    if keyframes.is_empty() {
        return Err(KeyframeError::Empty);
    }
    for (index, kf) in keyframes.iter().enumerate() {
        kf.validate(index)?;
    }

    let ordered = order(keyframes, cfg)?;

    let mut defaults: IndexMap<&str, f64> = IndexMap::new();
    for (_, kf) in &ordered {
        for (name, value) in &kf.fields {
            defaults.entry(name.as_str()).or_insert(*value);
        }
    }

    let width = defaults.len();
    let mut current: Vec<f64> = defaults.values().copied().collect();
    let mut values = Vec::with_capacity(width * ordered.len());
    let mut stamps = Vec::with_capacity(ordered.len());
    for (_, kf) in &ordered {
        for (name, value) in &kf.fields {
            if let Some(col) = defaults.get_index_of(name.as_str()) {
                current[col] = *value;
            }
        }
        values.extend_from_slice(&current);
        stamps.push(kf.timestamp);
    }

    log::debug!(
        "resolved {} keyframes over {} fields ({}..{})",
        stamps.len(),
        width,
        stamps[0],
        stamps[stamps.len() - 1]
    );

    Ok(ResolvedFrames {
        schema: defaults.keys().map(|name| name.to_string()).collect(),
        stamps,
        values,
    })
}

/// Apply the ordering policy. Returned pairs keep the caller's index so
/// errors point at the keyframe as it was supplied.
fn order<'a>(
    keyframes: &'a [Keyframe],
    cfg: &Config,
) -> Result<Vec<(usize, &'a Keyframe)>, KeyframeError> {
    let mut ordered: Vec<(usize, &Keyframe)> = keyframes.iter().enumerate().collect();

    if cfg.order == OrderPolicy::Sort {
        let already_sorted = ordered
            .windows(2)
            .all(|w| w[0].1.timestamp <= w[1].1.timestamp);
        if !already_sorted {
            // Stable, so equal timestamps keep input order.
            ordered.sort_by(|a, b| {
                a.1.timestamp
                    .partial_cmp(&b.1.timestamp)
                    .unwrap_or(Ordering::Equal)
            });
            log::debug!("sorted {} keyframes by timestamp", ordered.len());
        }
    }

    for pair in ordered.windows(2) {
        let (_, prev) = pair[0];
        let (index, kf) = pair[1];
        if kf.timestamp < prev.timestamp {
            return Err(KeyframeError::OutOfOrder {
                index,
                previous: prev.timestamp,
                timestamp: kf.timestamp,
            });
        }
        if kf.timestamp == prev.timestamp && !cfg.allow_equal_timestamps {
            return Err(KeyframeError::DuplicateTimestamp {
                index,
                timestamp: kf.timestamp,
            });
        }
    }

    Ok(ordered)
}
