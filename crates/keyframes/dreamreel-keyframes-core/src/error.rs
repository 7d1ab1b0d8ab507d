//! Error types for keyframe construction and loading.

/// Everything that can go wrong while turning keyframe data into an
/// [`Interpolator`](crate::Interpolator).
///
/// Sampling never fails, so every variant is raised at construction or
/// parse time and names the offending keyframe index where one exists.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KeyframeError {
    /// No keyframes were supplied.
    #[error("keyframe sequence is empty")]
    Empty,

    #[error("keyframe {index}: timestamp {timestamp} is not finite")]
    NonFiniteTimestamp { index: usize, timestamp: f64 },

    #[error("keyframe {index}: field '{field}' has non-finite value {value}")]
    NonFiniteField {
        index: usize,
        field: String,
        value: f64,
    },

    /// `timestamp` is reserved for the keyframe time and cannot be animated.
    #[error("keyframe {index}: 'timestamp' cannot be used as a field name")]
    ReservedField { index: usize },

    #[error("keyframe {index}: field name must not be empty")]
    EmptyFieldName { index: usize },

    #[error("keyframe {index}: timestamp {timestamp} precedes previous timestamp {previous}")]
    OutOfOrder {
        index: usize,
        previous: f64,
        timestamp: f64,
    },

    #[error("keyframe {index}: timestamp {timestamp} repeats the previous keyframe")]
    DuplicateTimestamp { index: usize, timestamp: f64 },

    /// The JSON document could not be parsed at all.
    #[error("keyframe json parse error: {0}")]
    Json(String),

    #[error("keyframe json must be an array of objects")]
    NotAnArray,

    #[error("keyframe {index}: expected a JSON object")]
    NotAnObject { index: usize },

    #[error("keyframe {index}: missing numeric 'timestamp'")]
    MissingTimestamp { index: usize },

    #[error("keyframe {index}: field '{field}' is not a number")]
    NonNumericField { index: usize, field: String },
}

impl KeyframeError {
    /// Index of the keyframe the error refers to, when it refers to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::NonFiniteTimestamp { index, .. }
            | Self::NonFiniteField { index, .. }
            | Self::ReservedField { index }
            | Self::EmptyFieldName { index }
            | Self::OutOfOrder { index, .. }
            | Self::DuplicateTimestamp { index, .. }
            | Self::NotAnObject { index }
            | Self::MissingTimestamp { index }
            | Self::NonNumericField { index, .. } => Some(*index),
            Self::Empty | Self::Json(_) | Self::NotAnArray => None,
        }
    }
}

impl From<serde_json::Error> for KeyframeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_index_and_field() {
        let err = KeyframeError::NonFiniteField {
            index: 3,
            field: "opacity".into(),
            value: f64::NAN,
        };
        assert_eq!(err.index(), Some(3));
        assert_eq!(
            err.to_string(),
            "keyframe 3: field 'opacity' has non-finite value NaN"
        );
        assert_eq!(KeyframeError::Empty.index(), None);
    }
}
