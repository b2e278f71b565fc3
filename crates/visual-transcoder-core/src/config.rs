//! Configuration for the JSON-facing transcoding entry points.

use serde::{Deserialize, Serialize};

/// How much the boundary checks input before expanding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// No validation. Malformed fields are dropped silently.
    #[default]
    Lenient,
    /// Validate, log every warning, and expand anyway.
    Warn,
    /// Validate and refuse input with any warning.
    Strict,
}

/// Options for [`expand`](crate::expand) and [`roundtrip`](crate::roundtrip).
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `max-visuals`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TranscodeOptions {
    /// Validation mode. Default: lenient.
    pub mode: ValidationMode,
    /// Maximum visuals accepted in one call (one sheet's worth). Default: 50.
    pub max_visuals: usize,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Lenient,
            max_visuals: crate::nodes::VISUALS_MAX_ITEMS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcode_options_serde_round_trip() {
        let opts = TranscodeOptions {
            mode: ValidationMode::Strict,
            max_visuals: 10,
        };

        let json = serde_json::to_string(&opts).unwrap();
        assert!(json.contains("\"max-visuals\""));
        assert!(json.contains("\"strict\""));

        let deserialized: TranscodeOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, opts);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let opts: TranscodeOptions = serde_json::from_str(r#"{"mode": "warn"}"#).unwrap();
        assert_eq!(opts.mode, ValidationMode::Warn);
        assert_eq!(opts.max_visuals, 50);
    }
}
