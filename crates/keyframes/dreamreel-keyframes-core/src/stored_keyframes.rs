use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::data::{Fields, Keyframe, TIMESTAMP_KEY};
use crate::error::KeyframeError;
use crate::sampling::Interpolator;

/// Public API: parse a keyframe document (a JSON array of flat objects such as
/// `[{ "timestamp": 0, "opacity": 0 }, { "timestamp": 1, "opacity": 1 }]`)
/// into [`Keyframe`]s.
///
/// Notes:
/// - Every object needs a numeric `timestamp`; all other members must be numbers.
/// - Member order inside each object is preserved, so the schema order of the
///   built interpolator follows the document.
/// - Errors name the offending keyframe index and field instead of bubbling up
///   a generic serde message.
pub fn parse_keyframes_json(s: &str) -> Result<Vec<Keyframe>, KeyframeError> {
    let doc: JsonValue = serde_json::from_str(s)?;
    keyframes_from_json(&doc)
}

/// Same as [`parse_keyframes_json`] for an already parsed document.
pub fn keyframes_from_json(doc: &JsonValue) -> Result<Vec<Keyframe>, KeyframeError> {
    let items = doc.as_array().ok_or(KeyframeError::NotAnArray)?;

    let mut keyframes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let obj = item
            .as_object()
            .ok_or(KeyframeError::NotAnObject { index })?;

        let timestamp = obj
            .get(TIMESTAMP_KEY)
            .and_then(JsonValue::as_f64)
            .ok_or(KeyframeError::MissingTimestamp { index })?;

        let mut fields = Fields::with_capacity(obj.len().saturating_sub(1));
        for (name, value) in obj {
            if name == TIMESTAMP_KEY {
                continue;
            }
            let value = value
                .as_f64()
                .ok_or_else(|| KeyframeError::NonNumericField {
                    index,
                    field: name.clone(),
                })?;
            fields.insert(name.clone(), value);
        }

        keyframes.push(Keyframe { timestamp, fields });
    }
    Ok(keyframes)
}

/// Parse and build in one step.
pub fn load_keyframes_json(s: &str, cfg: &Config) -> Result<Interpolator, KeyframeError> {
    let keyframes = parse_keyframes_json(s)?;
    Interpolator::with_config(&keyframes, cfg)
}
