//! Negative tests for malformed dynamic trees.
//!
//! Expand is total: it must **never panic** on any JSON input, whatever shape
//! a field holds. Malformed fields read as absent. Validation, run on the
//! same input, must also finish without panicking and report the problems.
//!
//! Inputs are structure-aware: every key is one the visual model declares,
//! but the value under it has the wrong shape.

use proptest::prelude::*;
use serde_json::json;
use visual_transcoder_core::nodes::visuals::{BarChartVisual, HistogramBinOptions};
use visual_transcoder_core::{
    expand, expand_visual, roundtrip, validate_visual, Record, SchemaRegistry, TranscodeOptions,
    Transcode, ValidationMode,
};

fn record(json: serde_json::Value) -> Record {
    Record::from_json(&json).expect("fixture must be a JSON object")
}

// ===========================================================================
// 1. Deterministic negative tests: known malformed shapes
// ===========================================================================

/// A singular block given as a bare record instead of a sequence.
#[test]
fn malformed_block_as_record() {
    let input = record(json!({ "visual_id": "v", "title": { "visibility": "VISIBLE" } }));
    let visual = BarChartVisual::expand(&input).unwrap();
    assert_eq!(visual.title, None);
    assert_eq!(visual.visual_id.as_deref(), Some("v"));
}

/// A repeated block whose elements are scalars.
#[test]
fn malformed_sequence_of_scalars() {
    let input = record(json!({ "visual_id": "v", "actions": [1, "two", true, null] }));
    let visual = BarChartVisual::expand(&input).unwrap();
    assert!(visual.actions.is_empty());
}

/// Well-formed elements survive next to malformed ones.
#[test]
fn malformed_elements_are_skipped_individually() {
    let input = record(json!({
        "visual_id": "v",
        "column_hierarchies": [
            "junk",
            { "explicit_hierarchy": [{ "hierarchy_id": "h" }] },
            42
        ]
    }));
    let visual = BarChartVisual::expand(&input).unwrap();
    assert_eq!(visual.column_hierarchies.len(), 1);
}

/// Scalars of the wrong type read as absent.
#[test]
fn malformed_scalar_types() {
    let input = record(json!({
        "bin_count": [{ "value": "ten" }],
        "start_value": "zero",
        "selected_bin_type": 7
    }));
    let options = HistogramBinOptions::expand(&input).unwrap();
    assert_eq!(options.bin_count.and_then(|c| c.value), None);
    assert_eq!(options.start_value, None);
    assert_eq!(options.selected_bin_type, None);
}

/// A float field holding an integer is widened, not dropped.
#[test]
fn integer_in_float_field_is_widened() {
    let input = record(json!({ "start_value": 3 }));
    let options = HistogramBinOptions::expand(&input).unwrap();
    assert_eq!(options.start_value, Some(3.0));
}

/// Nulls have no dynamic counterpart and vanish at the JSON boundary.
#[test]
fn nulls_are_absent() {
    let input = record(json!({ "visual_id": null, "title": [null] }));
    let visual = BarChartVisual::expand(&input).unwrap();
    assert_eq!(visual.visual_id, None);
    assert_eq!(visual.title, None);
}

/// An unparseable timestamp reads as absent.
#[test]
fn malformed_timestamp() {
    let input = record(json!({
        "line_chart_visual": [{
            "visual_id": "v",
            "chart_configuration": [{
                "forecast_configurations": [{
                    "scenario": [{ "what_if_range_scenario": [{
                        "start_date": "yesterday",
                        "end_date": "2024-02-30T00:00:00Z",
                        "value": 1.5
                    }] }]
                }]
            }]
        }]
    }));
    let visual = expand_visual(&input).unwrap();
    let flattened = visual.flatten().to_json();
    assert_eq!(
        flattened["line_chart_visual"][0]["chart_configuration"][0]["forecast_configurations"][0]
            ["scenario"][0]["what_if_range_scenario"][0],
        json!({ "value": 1.5 })
    );
}

/// Roundtrip over a malformed record reports drift instead of failing.
#[test]
fn malformed_input_roundtrip_reports_drift() {
    let registry = SchemaRegistry::new();
    let input = json!({ "bar_chart_visual": [{ "visual_id": "v", "title": "oops" }] });
    let result = roundtrip(&input, &registry, &TranscodeOptions::default()).unwrap();
    assert!(!result.lossless);
    assert_eq!(result.output, json!({ "bar_chart_visual": [{ "visual_id": "v" }] }));
}

// ===========================================================================
// 2. Property-based negative tests: proptest strategies
// ===========================================================================

/// Strategy: a JSON value of arbitrary shape, depth-limited.
fn arb_json() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        (-1.0e12f64..1.0e12).prop_map(serde_json::Value::from),
        "[a-zA-Z0-9 _#-]{0,12}".prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::from),
            proptest::collection::btree_map(arb_key(), inner, 0..4)
                .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Strategy: keys the model declares at various depths.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("visual_id"),
        Just("title"),
        Just("actions"),
        Just("chart_configuration"),
        Just("field_wells"),
        Just("bar_chart_aggregated_field_wells"),
        Just("category"),
        Just("values"),
        Just("categorical_dimension_field"),
        Just("numerical_measure_field"),
        Just("column"),
        Just("field_id"),
        Just("reference_lines"),
        Just("data_configuration"),
        Just("static_configuration"),
        Just("value"),
        Just("sort_configuration"),
        Just("category_sort"),
        Just("field_sort"),
        Just("column_sort"),
    ]
    .prop_map(str::to_string)
}

/// Strategy: a visual record with one kind and an arbitrary body.
fn arb_malformed_visual() -> impl Strategy<Value = serde_json::Value> {
    let kind = prop_oneof![
        Just("bar_chart_visual"),
        Just("line_chart_visual"),
        Just("pivot_table_visual"),
        Just("table_visual"),
        Just("kpi_visual"),
    ];
    (kind, arb_json()).prop_map(|(kind, body)| json!({ kind: body }))
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..Default::default() })]

    /// Property: expand NEVER panics, whatever a field holds.
    #[test]
    fn expand_never_panics_on_malformed(input in arb_malformed_visual()) {
        let record = Record::from_json(&input).unwrap();
        let _ = expand_visual(&record);
    }

    /// Property: a flattened malformed input is itself well-formed, so a
    /// second pass changes nothing.
    #[test]
    fn flatten_output_is_a_fixed_point(input in arb_malformed_visual()) {
        let record = Record::from_json(&input).unwrap();
        if let Some(visual) = expand_visual(&record) {
            let once = visual.flatten();
            let again = expand_visual(&once).map(|v| v.flatten());
            prop_assert_eq!(again, Some(once));
        }
    }

    /// Property: validation terminates and every warning has a message.
    #[test]
    fn validation_never_panics(input in arb_malformed_visual()) {
        let registry = SchemaRegistry::new();
        let record = Record::from_json(&input).unwrap();
        for warning in validate_visual(&record, &registry) {
            prop_assert!(!warning.message.is_empty());
            prop_assert!(warning.data_path.starts_with('/'));
        }
    }

    /// Property: strict mode either expands or returns a shape error with a
    /// non-empty message.
    #[test]
    fn strict_errors_have_messages(input in arb_malformed_visual()) {
        let registry = SchemaRegistry::new();
        let options = TranscodeOptions { mode: ValidationMode::Strict, ..Default::default() };
        if let Err(e) = expand(&input, &registry, &options) {
            prop_assert!(!e.to_string().is_empty());
        }
    }
}
