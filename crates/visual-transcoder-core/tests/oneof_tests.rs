//! Tagged-union dispatch: first populated alternative wins, the typed form
//! holds exactly one, and flatten writes only that key.

use pretty_assertions::assert_eq;
use serde_json::json;
use visual_transcoder_core::nodes::common::AggregationFunction;
use visual_transcoder_core::nodes::fields::{DimensionField, FieldSortOptions};
use visual_transcoder_core::nodes::visuals::{
    BarChartAggregatedFieldWells, PivotTableSortBy, ScatterPlotFieldWells,
};
use visual_transcoder_core::oneof::populated;
use visual_transcoder_core::{
    validate_node, validate_visual, Record, SchemaRegistry, Transcode, Visual, WarningKind,
};

fn record(json: serde_json::Value) -> Record {
    Record::from_json(&json).expect("fixture must be a JSON object")
}

#[test]
fn test_single_alternative_selects_variant() {
    let input = record(json!({
        "field_sort": [{ "field_id": "revenue", "direction": "ASC" }]
    }));
    let sort = FieldSortOptions::expand(&input).unwrap();
    assert!(matches!(sort, FieldSortOptions::FieldSort(ref f) if f.field_id.as_deref() == Some("revenue")));
    assert_eq!(sort.flatten(), input);
}

#[test]
fn test_no_alternative_yields_none() {
    assert_eq!(FieldSortOptions::expand(&Record::new()), None);
    assert_eq!(DimensionField::expand(&record(json!({ "unrelated": "x" }))), None);
    assert_eq!(Visual::expand(&record(json!({ "bar_chart_visual": [] }))), None);
}

#[test]
fn test_first_declared_alternative_wins() {
    let input = record(json!({
        "numerical_dimension_field": [{ "field_id": "n" }],
        "categorical_dimension_field": [{ "field_id": "c" }]
    }));
    let field = DimensionField::expand(&input).unwrap();
    assert!(matches!(field, DimensionField::Categorical(ref f) if f.field_id.as_deref() == Some("c")));

    let output = field.flatten();
    assert_eq!(output.keys().collect::<Vec<_>>(), vec!["categorical_dimension_field"]);
}

#[test]
fn test_scalar_alternatives_dispatch() {
    let input = record(json!({ "date_aggregation_function": "MAX" }));
    let function = AggregationFunction::expand(&input).unwrap();
    assert!(matches!(function, AggregationFunction::Date(_)));
    assert_eq!(function.flatten(), input);

    let empty = record(json!({ "date_aggregation_function": "" }));
    assert_eq!(AggregationFunction::expand(&empty), None);
}

#[test]
fn test_empty_block_is_not_a_populated_alternative() {
    let input = record(json!({
        "scatter_plot_categorically_aggregated_field_wells": [],
        "scatter_plot_unaggregated_field_wells": [{}]
    }));
    assert_eq!(
        populated(&input, &["scatter_plot_categorically_aggregated_field_wells", "scatter_plot_unaggregated_field_wells"]),
        vec!["scatter_plot_unaggregated_field_wells"]
    );
    let wells = ScatterPlotFieldWells::expand(&input).unwrap();
    assert!(matches!(wells, ScatterPlotFieldWells::Unaggregated(_)));
}

#[test]
fn test_pivot_sort_by_alternatives() {
    let input = record(json!({
        "column": [{ "direction": "DESC", "sort_by": [{ "data_set_identifier": "d", "column_name": "c" }] }]
    }));
    let sort_by = PivotTableSortBy::expand(&input).unwrap();
    assert!(matches!(sort_by, PivotTableSortBy::Column(_)));
    assert_eq!(sort_by.flatten(), input);
}

#[test]
fn test_visual_with_two_kinds_keeps_first_and_warns() {
    let input = record(json!({
        "table_visual": [{ "visual_id": "t" }],
        "bar_chart_visual": [{ "visual_id": "b" }]
    }));
    let visual = Visual::expand(&input).unwrap();
    assert_eq!(visual.kind(), "bar_chart_visual");
    assert_eq!(visual.flatten().keys().collect::<Vec<_>>(), vec!["bar_chart_visual"]);

    let registry = SchemaRegistry::new();
    let warnings = validate_visual(&input, &registry);
    let ambiguous: Vec<_> = warnings
        .iter()
        .filter_map(|w| match &w.kind {
            WarningKind::AmbiguousOneof { populated } => Some(populated.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        ambiguous,
        vec![vec!["bar_chart_visual".to_string(), "table_visual".to_string()]]
    );
}

#[test]
fn test_nested_ambiguity_is_reported_with_its_path() {
    let registry = SchemaRegistry::new();
    let input = record(json!({
        "column_sort": [{ "direction": "ASC", "sort_by": [{ "data_set_identifier": "d", "column_name": "c" }] }],
        "field_sort": [{ "direction": "ASC", "field_id": "f" }]
    }));
    let warnings = validate_node(&input, "FieldSortOptions", &registry);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].data_path, "/");
    assert_eq!(warnings[0].schema_path, "FieldSortOptions");
}

#[test]
fn test_wrongly_typed_alternative_is_not_counted() {
    let registry = SchemaRegistry::new();
    let input = record(json!({
        "categorical_aggregation_function": "COUNT",
        "numerical_aggregation_function": "SUM"
    }));
    let function = AggregationFunction::expand(&input).unwrap();
    assert!(matches!(function, AggregationFunction::Categorical(_)));

    let warnings = validate_node(&input, "AggregationFunction", &registry);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].data_path, "/numerical_aggregation_function");
    assert!(matches!(warnings[0].kind, WarningKind::TypeMismatch { .. }));
}

#[test]
fn test_zero_scalars_do_not_populate_an_alternative() {
    let input = record(json!({ "flag": false, "count": 0, "label": "" }));
    assert!(populated(&input, &["flag", "count", "label"]).is_empty());
}

#[test]
fn test_empty_union_element_is_dropped_and_reported() {
    let input = record(json!({
        "category": [{}, { "categorical_dimension_field": [{ "field_id": "c" }] }]
    }));
    let wells = BarChartAggregatedFieldWells::expand(&input).unwrap();
    assert_eq!(wells.category.len(), 1);

    let registry = SchemaRegistry::new();
    let warnings = validate_node(&input, "BarChartAggregatedFieldWells", &registry);
    let empty: Vec<_> = warnings
        .iter()
        .filter(|w| matches!(w.kind, WarningKind::EmptyOneof { .. }))
        .collect();
    assert_eq!(empty.len(), 1);
    assert_eq!(empty[0].data_path, "/category/0");
    assert_eq!(empty[0].schema_path, "DimensionField");
}
