//! Property-based tests for the presence invariant.
//!
//! Generates dynamic trees for a bar-chart visual with every block and scalar
//! independently present, absent or zero-valued, plus typed values built
//! from non-empty parts.
//!
//! Invariants:
//! - `normalize(flatten(expand(t))) == normalize(t)` for well-formed `t`
//! - `expand(flatten(o)) == o` for typed `o` without zero-valued leaves

use proptest::prelude::*;
use serde_json::{json, Map, Value as Json};
use visual_transcoder_core::nodes::common::{ColumnIdentifier, ItemsLimitConfiguration};
use visual_transcoder_core::nodes::enums::OtherCategories;
use visual_transcoder_core::nodes::visuals::{BinCountOptions, HistogramBinOptions};
use visual_transcoder_core::{expand_visual, Record, Transcode, Value};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Identifier-like text, sometimes empty (the zero value).
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        6 => "[a-z][a-z0-9_-]{0,11}",
    ]
}

fn arb_visibility() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("VISIBLE".to_string()),
        Just("HIDDEN".to_string()),
        Just(String::new()),
    ]
}

/// Insert `value` under `key` when generated.
fn put(map: &mut Map<String, Json>, key: &str, value: Option<Json>) {
    if let Some(v) = value {
        map.insert(key.to_string(), v);
    }
}

fn arb_column() -> impl Strategy<Value = Json> {
    (arb_text(), arb_text()).prop_map(|(data_set, column)| {
        json!({ "data_set_identifier": data_set, "column_name": column })
    })
}

fn arb_dimension() -> impl Strategy<Value = Json> {
    (arb_text(), arb_column(), proptest::option::of(arb_text())).prop_map(
        |(field_id, column, hierarchy_id)| {
            let mut field = Map::new();
            field.insert("field_id".into(), json!(field_id));
            field.insert("column".into(), json!([column]));
            put(&mut field, "hierarchy_id", hierarchy_id.map(Json::from));
            json!({ "categorical_dimension_field": [field] })
        },
    )
}

fn arb_measure() -> impl Strategy<Value = Json> {
    prop_oneof![
        (arb_text(), arb_column()).prop_map(|(field_id, column)| json!({
            "numerical_measure_field": [{
                "field_id": field_id,
                "column": [column],
                "aggregation_function": [{ "simple_numerical_aggregation": "SUM" }]
            }]
        })),
        (arb_text(), 0.0f64..100.0).prop_map(|(field_id, p)| json!({
            "numerical_measure_field": [{
                "field_id": field_id,
                "aggregation_function": [{ "percentile_aggregation": [{ "percentile_value": p }] }]
            }]
        })),
        (arb_text(), "[a-z ({})]{1,20}").prop_map(|(field_id, expression)| json!({
            "calculated_measure_field": [{ "field_id": field_id, "expression": expression }]
        })),
    ]
}

fn arb_items_limit() -> impl Strategy<Value = Json> {
    (proptest::option::of(any::<i64>()), proptest::option::of(arb_visibility())).prop_map(
        |(limit, other)| {
            let mut map = Map::new();
            put(&mut map, "items_limit", limit.map(Json::from));
            put(
                &mut map,
                "other_categories",
                other.map(|o| json!(o.replace("VISIBLE", "INCLUDE").replace("HIDDEN", "EXCLUDE"))),
            );
            Json::Object(map)
        },
    )
}

fn arb_title() -> impl Strategy<Value = Json> {
    (arb_text(), arb_visibility()).prop_map(|(text, visibility)| {
        json!({ "format_text": [{ "plain_text": text }], "visibility": visibility })
    })
}

fn arb_reference_line() -> impl Strategy<Value = Json> {
    (-1.0e9f64..1.0e9).prop_map(|value| {
        json!({
            "data_configuration": [{ "static_configuration": [{ "value": value }] }],
            "status": "ENABLED"
        })
    })
}

/// A block that is absent, an empty sequence, or one record.
fn arb_block<S>(inner: S) -> impl Strategy<Value = Option<Json>>
where
    S: Strategy<Value = Json>,
{
    prop_oneof![
        1 => Just(None),
        1 => Just(Some(json!([]))),
        3 => inner.prop_map(|v| Some(json!([v]))),
    ]
}

fn arb_bar_chart() -> impl Strategy<Value = Json> {
    (
        arb_text(),
        arb_block(arb_title()),
        proptest::collection::vec(arb_dimension(), 0..4),
        proptest::collection::vec(arb_measure(), 0..4),
        arb_block(arb_items_limit()),
        proptest::collection::vec(arb_reference_line(), 0..3),
        proptest::option::of(prop_oneof![Just("HORIZONTAL"), Just("VERTICAL")]),
    )
        .prop_map(
            |(visual_id, title, category, values, limit, lines, orientation)| {
                let mut sort = Map::new();
                put(&mut sort, "category_items_limit", limit);

                let mut config = Map::new();
                config.insert(
                    "field_wells".into(),
                    json!([{ "bar_chart_aggregated_field_wells": [{
                        "category": category,
                        "values": values
                    }] }]),
                );
                config.insert("sort_configuration".into(), json!([sort]));
                config.insert("reference_lines".into(), json!(lines));
                put(&mut config, "orientation", orientation.map(Json::from));

                let mut visual = Map::new();
                visual.insert("visual_id".into(), json!(visual_id));
                put(&mut visual, "title", title);
                visual.insert("chart_configuration".into(), json!([config]));
                json!({ "bar_chart_visual": [visual] })
            },
        )
}

fn arb_column_identifier() -> impl Strategy<Value = ColumnIdentifier> {
    (
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(data_set_identifier, column_name)| ColumnIdentifier {
            data_set_identifier,
            column_name,
        })
}

fn normalized(json: &Json) -> Value {
    Value::from_json(json).unwrap().normalized()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn bar_chart_roundtrip_is_lossless(input in arb_bar_chart()) {
        let record = Record::from_json(&input).unwrap();
        let visual = expand_visual(&record).unwrap();
        let output = visual.flatten().to_json();
        prop_assert_eq!(normalized(&output), normalized(&input));
    }

    #[test]
    fn flatten_is_idempotent_after_one_pass(input in arb_bar_chart()) {
        let record = Record::from_json(&input).unwrap();
        let once = expand_visual(&record).unwrap().flatten();
        let twice = expand_visual(&once).unwrap().flatten();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn typed_column_identifier_survives(column in arb_column_identifier()) {
        let back = ColumnIdentifier::expand(&column.flatten()).unwrap();
        prop_assert_eq!(back, column);
    }

    #[test]
    fn typed_items_limit_survives(
        items_limit in proptest::option::of(any::<i64>()),
        include in proptest::option::of(any::<bool>()),
    ) {
        let limit = ItemsLimitConfiguration {
            items_limit,
            other_categories: include.map(|i| if i {
                OtherCategories::Include
            } else {
                OtherCategories::Exclude
            }),
        };
        let back = ItemsLimitConfiguration::expand(&limit.flatten()).unwrap();
        prop_assert_eq!(back, limit);
    }

    #[test]
    fn typed_bin_options_survive(
        count in proptest::option::of(any::<i64>()),
        start in proptest::option::of(-1.0e6f64..1.0e6),
    ) {
        let options = HistogramBinOptions {
            bin_count: count.map(|value| BinCountOptions { value: Some(value) }),
            start_value: start,
            ..HistogramBinOptions::default()
        };
        let back = HistogramBinOptions::expand(&options.flatten()).unwrap();
        prop_assert_eq!(back, options);
    }
}
