//! Acceptance scenarios for the presence invariant and the known
//! contribution-analysis key asymmetry.

use pretty_assertions::assert_eq;
use serde_json::json;
use visual_transcoder_core::container::{expand_node, flatten_node};
use visual_transcoder_core::nodes::chart::{
    ContributionAnalysisDefault, ReferenceLine, ReferenceLineSource,
    ReferenceLineStaticDataConfiguration,
};
use visual_transcoder_core::nodes::visuals::{BarChartVisual, BinCountOptions, HistogramBinOptions};
use visual_transcoder_core::{Record, Transcode, Value};

fn record(json: serde_json::Value) -> Record {
    Record::from_json(&json).expect("fixture must be a JSON object")
}

// ── Scenario A: empty sequence reads as absent and is omitted ──────────────

#[test]
fn scenario_a_empty_title_is_absent() {
    let input = record(json!({ "visual_id": "v1", "title": [] }));

    let visual = BarChartVisual::expand(&input).unwrap();
    assert_eq!(visual.visual_id.as_deref(), Some("v1"));
    assert_eq!(visual.title, None);

    let output = visual.flatten();
    assert_eq!(output, record(json!({ "visual_id": "v1" })));
    assert!(!output.contains_key("title"));
}

#[test]
fn scenario_a_through_nil_safe_entry_points() {
    let input = Value::Record(record(json!({ "visual_id": "v1", "title": [] })));
    let visual = expand_node::<BarChartVisual>(Some(&input));
    let seq = flatten_node(visual.as_ref());
    assert_eq!(
        Value::list(seq).to_json(),
        json!([{ "visual_id": "v1" }])
    );
}

// ── Scenario B: required non-pointer float survives the nested path ───────

#[test]
fn scenario_b_static_reference_line_value() {
    let input = record(json!({
        "data_configuration": [{
            "static_configuration": [{ "value": 42.0 }]
        }]
    }));

    let line = ReferenceLine::expand(&input).unwrap();
    let source = line
        .data_configuration
        .as_ref()
        .and_then(|c| c.source.as_ref());
    assert_eq!(
        source,
        Some(&ReferenceLineSource::Static(
            ReferenceLineStaticDataConfiguration { value: 42.0 }
        ))
    );

    assert_eq!(line.flatten(), input);
}

#[test]
fn scenario_b_integer_value_widens_to_float() {
    let input = record(json!({
        "data_configuration": [{
            "static_configuration": [{ "value": 42 }]
        }]
    }));
    let line = ReferenceLine::expand(&input).unwrap();
    assert_eq!(
        line.flatten().to_json(),
        json!({
            "data_configuration": [{
                "static_configuration": [{ "value": 42.0 }]
            }]
        })
    );
}

// ── Scenario C: only the populated bin option is written back ─────────────

#[test]
fn scenario_c_bin_count_without_bin_width() {
    let input = record(json!({ "bin_count": [{ "value": 10 }] }));

    let options = HistogramBinOptions::expand(&input).unwrap();
    assert_eq!(options.bin_count, Some(BinCountOptions { value: Some(10) }));
    assert_eq!(options.bin_width, None);

    let output = options.flatten();
    assert_eq!(output.to_json(), json!({ "bin_count": [{ "value": 10 }] }));
    assert!(!output.contains_key("bin_width"));
}

// ── Scenario D: contribution analysis key asymmetry (regression) ──────────

#[test]
fn scenario_d_contributor_dimensions_flatten_to_contribution_dimensions() {
    let input = record(json!({
        "contributor_dimensions": [
            { "data_set_identifier": "sales", "column_name": "region" }
        ],
        "measure_field_id": "revenue"
    }));

    let default = ContributionAnalysisDefault::expand(&input).unwrap();
    assert_eq!(default.contributor_dimensions.len(), 1);
    assert_eq!(default.measure_field_id.as_deref(), Some("revenue"));

    let output = default.flatten();
    assert_eq!(
        output.to_json(),
        json!({
            "contribution_dimensions": [
                { "data_set_identifier": "sales", "column_name": "region" }
            ],
            "measure_field_id": "revenue"
        })
    );
    assert!(!output.contains_key("contributor_dimensions"));
}

#[test]
fn scenario_d_flattened_key_is_not_read_back() {
    let flattened = record(json!({
        "contribution_dimensions": [
            { "data_set_identifier": "sales", "column_name": "region" }
        ],
        "measure_field_id": "revenue"
    }));
    let default = ContributionAnalysisDefault::expand(&flattened).unwrap();
    assert!(default.contributor_dimensions.is_empty());
}
