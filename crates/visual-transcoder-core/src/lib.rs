//! # visual-transcoder-core
//!
//! Bidirectional transcoder between a dynamic attribute tree and the typed
//! visual definitions of a BI dashboard API.
//!
//! The dynamic side is what a declarative configuration engine hands over:
//! snake_case records where every nested block is a sequence of records. The
//! typed side is an owned object graph with optional scalars, vectors for
//! repeated blocks, and enums for tagged unions.
//!
//! ## Transcoding contract
//!
//! - **Total.** Expand never fails as a whole. Absent or malformed fields
//!   stay at their zero value and malformed sequence elements are skipped.
//! - **Presence-preserving.** Flatten writes a key only when the typed value
//!   is set, so `flatten(expand(t))` equals `t` once omitted, empty and
//!   zero-valued fields are treated alike (see [`Value::normalized`]).
//! - **Validation is separate.** [`validate_visual`] reports every schema
//!   mismatch as a [`Warning`]. The JSON-boundary [`expand`] runs it
//!   according to [`ValidationMode`].
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use visual_transcoder_core::{expand, flatten, SchemaRegistry, TranscodeOptions};
//!
//! let input = json!({
//!     "bar_chart_visual": [{ "visual_id": "sales-by-region" }]
//! });
//! let registry = SchemaRegistry::new();
//! let result = expand(&input, &registry, &TranscodeOptions::default()).unwrap();
//! assert_eq!(result.visuals[0].visual_id(), Some("sales-by-region"));
//!
//! let output = flatten(&result.visuals);
//! assert_eq!(output, json!([input]));
//! ```

pub mod coercion;
pub mod config;
pub mod container;
pub mod error;
pub mod nodes;
pub mod oneof;
pub mod schema;
pub mod value;
pub mod warning;

pub use coercion::StringEnum;
pub use config::{TranscodeOptions, ValidationMode};
pub use container::Transcode;
pub use error::TranscodeError;
pub use nodes::Visual;
pub use schema::{validate_node, validate_visual, SchemaRegistry};
pub use value::{Record, Value};
pub use warning::{Warning, WarningKind};

use serde::{Deserialize, Serialize};

/// Expand one visual record. `None` when the record holds no visual kind.
pub fn expand_visual(record: &Record) -> Option<Visual> {
    Visual::expand(record)
}

/// Flatten one visual to its cardinality-normalized sequence form: `[]` for
/// `None`, a single record otherwise.
pub fn flatten_visual(visual: Option<&Visual>) -> Vec<Value> {
    container::flatten_node(visual)
}

/// Expand a sheet's visual list, skipping elements that are not records or
/// hold no visual kind.
pub fn expand_visuals(seq: &[Value]) -> Vec<Visual> {
    container::expand_repeated::<Visual>(seq)
}

pub fn flatten_visuals(visuals: &[Visual]) -> Value {
    Value::List(container::flatten_repeated(visuals))
}

/// Output of [`expand`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandResult {
    pub visuals: Vec<Visual>,
    /// Validation warnings. Always empty in lenient mode.
    pub warnings: Vec<Warning>,
}

/// Output of [`roundtrip`].
#[derive(Debug, Clone, PartialEq)]
pub struct RoundtripResult {
    /// The flattened tree, shaped like the input: an object for an object,
    /// an array for an array.
    pub output: serde_json::Value,
    pub warnings: Vec<Warning>,
    /// True when the output equals the input after presence normalization.
    pub lossless: bool,
}

/// Expand JSON input holding either one visual record or an array of them.
///
/// # Errors
///
/// - [`TranscodeError::NotARecord`] if the input, or an array element, is
///   not a JSON object.
/// - [`TranscodeError::TooManyVisuals`] if the array exceeds
///   `options.max_visuals`.
/// - [`TranscodeError::Shape`] in strict mode when validation reports any
///   warning.
pub fn expand(
    input: &serde_json::Value,
    registry: &SchemaRegistry,
    options: &TranscodeOptions,
) -> Result<ExpandResult, TranscodeError> {
    let (records, is_array) = read_records(input)?;
    if records.len() > options.max_visuals {
        return Err(TranscodeError::TooManyVisuals {
            max: options.max_visuals,
            actual: records.len(),
        });
    }

    let warnings = match options.mode {
        ValidationMode::Lenient => Vec::new(),
        ValidationMode::Warn | ValidationMode::Strict => {
            collect_warnings(&records, is_array, registry)
        }
    };

    match options.mode {
        ValidationMode::Strict if !warnings.is_empty() => {
            return Err(TranscodeError::Shape { warnings });
        }
        ValidationMode::Warn => {
            for w in &warnings {
                tracing::warn!(
                    data_path = %w.data_path,
                    schema_path = %w.schema_path,
                    "{}",
                    w.message
                );
            }
        }
        _ => {}
    }

    let visuals: Vec<Visual> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let visual = expand_visual(record);
            if visual.is_none() {
                tracing::debug!(index, "skipping record without a visual kind");
            }
            visual
        })
        .collect();

    tracing::debug!(
        visuals = visuals.len(),
        warnings = warnings.len(),
        "expansion complete"
    );
    Ok(ExpandResult { visuals, warnings })
}

/// [`expand`] for raw JSON text.
///
/// # Errors
///
/// [`TranscodeError::Json`] if `input` is not valid JSON, otherwise the
/// errors of [`expand`].
pub fn expand_str(
    input: &str,
    registry: &SchemaRegistry,
    options: &TranscodeOptions,
) -> Result<ExpandResult, TranscodeError> {
    let tree: serde_json::Value = serde_json::from_str(input)?;
    expand(&tree, registry, options)
}

/// Validate JSON input holding one visual record or an array of them,
/// without expanding it. Warning paths of array elements start with the
/// element index.
///
/// # Errors
///
/// [`TranscodeError::NotARecord`] if the input, or an array element, is not
/// a JSON object.
pub fn validate(
    input: &serde_json::Value,
    registry: &SchemaRegistry,
) -> Result<Vec<Warning>, TranscodeError> {
    let (records, is_array) = read_records(input)?;
    Ok(collect_warnings(&records, is_array, registry))
}

/// Flatten visuals to a JSON array of dynamic-tree records.
pub fn flatten(visuals: &[Visual]) -> serde_json::Value {
    flatten_visuals(visuals).to_json()
}

/// Expand then flatten, reporting whether anything was lost on the way.
///
/// # Errors
///
/// Same as [`expand`].
pub fn roundtrip(
    input: &serde_json::Value,
    registry: &SchemaRegistry,
    options: &TranscodeOptions,
) -> Result<RoundtripResult, TranscodeError> {
    let ExpandResult { visuals, warnings } = expand(input, registry, options)?;

    let output = match (input.is_array(), visuals.as_slice()) {
        (true, _) => flatten(&visuals),
        (false, [visual]) => Value::Record(visual.flatten()).to_json(),
        (false, _) => serde_json::Value::Object(serde_json::Map::new()),
    };

    let lossless = normalized(input) == normalized(&output);
    if !lossless {
        tracing::debug!("roundtrip output differs from input");
    }
    Ok(RoundtripResult {
        output,
        warnings,
        lossless,
    })
}

fn read_records(input: &serde_json::Value) -> Result<(Vec<Record>, bool), TranscodeError> {
    match input {
        serde_json::Value::Array(items) => {
            let records = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Record::from_json(item).ok_or_else(|| TranscodeError::NotARecord {
                        path: format!("/{index}"),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok((records, true))
        }
        other => {
            let record = Record::from_json(other).ok_or_else(|| TranscodeError::NotARecord {
                path: String::new(),
            })?;
            Ok((vec![record], false))
        }
    }
}

fn collect_warnings(records: &[Record], is_array: bool, registry: &SchemaRegistry) -> Vec<Warning> {
    records
        .iter()
        .enumerate()
        .flat_map(|(index, record)| {
            validate_visual(record, registry)
                .into_iter()
                .map(move |mut w| {
                    if is_array {
                        w.data_path = format!("/{index}{}", w.data_path);
                    }
                    w
                })
        })
        .collect()
}

fn normalized(json: &serde_json::Value) -> Option<Value> {
    Value::from_json(json).map(|v| v.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_input_is_rejected() {
        let registry = SchemaRegistry::new();
        let err = expand(&json!("bar"), &registry, &TranscodeOptions::default()).unwrap_err();
        assert!(matches!(err, TranscodeError::NotARecord { ref path } if path.is_empty()));

        let err = expand(&json!([{}, 3]), &registry, &TranscodeOptions::default()).unwrap_err();
        assert!(matches!(err, TranscodeError::NotARecord { ref path } if path == "/1"));
    }

    #[test]
    fn test_expand_str_reports_malformed_json() {
        let registry = SchemaRegistry::new();
        let err = expand_str("{\"bar_chart_visual\": [", &registry, &TranscodeOptions::default())
            .unwrap_err();
        assert!(matches!(err, TranscodeError::Json(_)));
        assert!(err.to_string().starts_with("JSON parsing error"));

        let result = expand_str(
            r#"{"empty_visual": [{"visual_id": "e"}]}"#,
            &registry,
            &TranscodeOptions::default(),
        )
        .unwrap();
        assert_eq!(result.visuals[0].visual_id(), Some("e"));
    }

    #[test]
    fn test_visual_limit_is_enforced() {
        let registry = SchemaRegistry::new();
        let options = TranscodeOptions {
            max_visuals: 1,
            ..TranscodeOptions::default()
        };
        let err = expand(&json!([{}, {}]), &registry, &options).unwrap_err();
        assert!(matches!(
            err,
            TranscodeError::TooManyVisuals { max: 1, actual: 2 }
        ));
    }

    #[test]
    fn test_record_without_kind_is_skipped() {
        let registry = SchemaRegistry::new();
        let input = json!([{}, { "empty_visual": [{ "visual_id": "e" }] }]);
        let result = expand(&input, &registry, &TranscodeOptions::default()).unwrap();
        assert_eq!(result.visuals.len(), 1);
        assert_eq!(result.visuals[0].kind(), "empty_visual");
    }

    #[test]
    fn test_array_warnings_are_prefixed_with_index() {
        let registry = SchemaRegistry::new();
        let options = TranscodeOptions {
            mode: ValidationMode::Warn,
            ..TranscodeOptions::default()
        };
        let input = json!([{ "empty_visual": [{ "visual_id": "e", "bogus": "x" }] }]);
        let result = expand(&input, &registry, &options).unwrap();
        assert_eq!(result.visuals.len(), 1);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.data_path == "/0/empty_visual/0/bogus"));
    }

    #[test]
    fn test_validate_matches_warn_mode() {
        let registry = SchemaRegistry::new();
        let options = TranscodeOptions {
            mode: ValidationMode::Warn,
            ..TranscodeOptions::default()
        };
        let input = json!([
            { "empty_visual": [{ "visual_id": "e", "data_set_identifier": "d" }] },
            { "empty_visual": [{ "visual_id": "f", "data_set_identifier": "d", "bogus": 1 }] }
        ]);
        let warnings = validate(&input, &registry).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].data_path, "/1/empty_visual/0/bogus");
        assert_eq!(warnings, expand(&input, &registry, &options).unwrap().warnings);
    }
}
