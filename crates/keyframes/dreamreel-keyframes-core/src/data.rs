//! Keyframe records as authored by the host.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::KeyframeError;

/// Reserved member name carrying the keyframe time in serialized form.
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Field name -> value mapping. Iteration order is insertion order, which for
/// sampled output is the schema order (first appearance across the sequence).
pub type Fields = IndexMap<String, f64>;

/// One point on the timeline. Only the fields this keyframe explicitly sets
/// are stored; anything missing is forward-filled when an
/// [`Interpolator`](crate::Interpolator) is built.
///
/// Serializes flat, e.g. `{ "timestamp": 1.0, "x": 5.0 }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    pub timestamp: f64,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Keyframe {
    pub fn new(timestamp: f64) -> Self {
        Self {
            timestamp,
            fields: Fields::new(),
        }
    }

    /// Builder form of [`Keyframe::set`].
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Set (or overwrite) an explicit field value.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied()
    }

    /// Per-record checks: finite timestamp, non-empty non-reserved names and
    /// finite values. `index` is only used to label the error.
    pub fn validate(&self, index: usize) -> Result<(), KeyframeError> {
        if !self.timestamp.is_finite() {
            return Err(KeyframeError::NonFiniteTimestamp {
                index,
                timestamp: self.timestamp,
            });
        }
        for (name, value) in &self.fields {
            if name.is_empty() {
                return Err(KeyframeError::EmptyFieldName { index });
            }
            if name == TIMESTAMP_KEY {
                return Err(KeyframeError::ReservedField { index });
            }
            if !value.is_finite() {
                return Err(KeyframeError::NonFiniteField {
                    index,
                    field: name.clone(),
                    value: *value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat() {
        let kf = Keyframe::new(1.0).with("x", 5.0).with("y", -2.5);
        let json = serde_json::to_value(&kf).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "timestamp": 1.0, "x": 5.0, "y": -2.5 })
        );
        let back: Keyframe = serde_json::from_value(json).unwrap();
        assert_eq!(back, kf);
    }

    #[test]
    fn validate_rejects_bad_records() {
        assert!(Keyframe::new(0.0).with("x", 1.0).validate(0).is_ok());
        assert_eq!(
            Keyframe::new(f64::INFINITY).validate(2),
            Err(KeyframeError::NonFiniteTimestamp {
                index: 2,
                timestamp: f64::INFINITY
            })
        );
        assert_eq!(
            Keyframe::new(0.0).with("timestamp", 1.0).validate(1),
            Err(KeyframeError::ReservedField { index: 1 })
        );
        assert_eq!(
            Keyframe::new(0.0).with("", 1.0).validate(4),
            Err(KeyframeError::EmptyFieldName { index: 4 })
        );
        assert!(matches!(
            Keyframe::new(0.0).with("x", f64::NAN).validate(0),
            Err(KeyframeError::NonFiniteField { index: 0, ref field, .. }) if field == "x"
        ));
    }
}
