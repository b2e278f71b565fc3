//! Round-trip tests over hand-built dynamic-tree fixtures.
//!
//! Each fixture is expanded into the typed graph and flattened back; the
//! result must equal the input once presence is normalized.

use pretty_assertions::assert_eq;
use serde_json::{json, Value as Json};
use std::fs;
use std::path::Path;
use visual_transcoder_core::nodes::chart::{AxisDataOptions, AxisDisplayRange};
use visual_transcoder_core::nodes::fields::{DimensionField, MeasureField};
use visual_transcoder_core::nodes::hierarchy::{ColumnHierarchy, DrillDownFilter};
use visual_transcoder_core::nodes::visuals::{
    ForecastScenario, LineSeriesAxisDisplayOptions, TableFieldWells,
};
use visual_transcoder_core::{
    expand_visual, expand_visuals, flatten_visual, flatten_visuals, roundtrip, validate, Record,
    validate_node, SchemaRegistry, TranscodeOptions, Transcode, Value, Visual,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/fixtures");

fn load_fixture(name: &str) -> Json {
    let path = Path::new(FIXTURES_DIR).join(format!("{name}.json"));
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {name}.json: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {name}.json: {e}"))
}

fn normalized(json: &Json) -> Value {
    Value::from_json(json)
        .expect("fixture is not null")
        .normalized()
}

fn assert_lossless(input: &Json, output: &Json) {
    assert_eq!(normalized(output), normalized(input), "roundtrip drifted");
}

fn expand_one(json: &Json) -> Visual {
    let record = Record::from_json(json).expect("fixture must be an object");
    expand_visual(&record).expect("fixture must hold a visual kind")
}

// ── Bar chart ───────────────────────────────────────────────────────────────

#[test]
fn test_bar_chart_fixture_roundtrips() {
    let input = load_fixture("bar_chart");
    let visual = expand_one(&input);
    assert_eq!(visual.kind(), "bar_chart_visual");
    assert_eq!(visual.visual_id(), Some("sales-by-region"));

    let output = visual.flatten().to_json();
    assert_lossless(&input, &output);
}

#[test]
fn test_bar_chart_typed_shape() {
    let Visual::BarChart(bar) = expand_one(&load_fixture("bar_chart")) else {
        panic!("expected a bar chart");
    };

    let title = bar.title.as_ref().and_then(|t| t.format_text.as_ref());
    assert_eq!(
        title.and_then(|t| t.plain_text.as_deref()),
        Some("Sales by region")
    );

    let [ColumnHierarchy::Explicit(hierarchy)] = bar.column_hierarchies.as_slice() else {
        panic!("expected one explicit hierarchy");
    };
    assert_eq!(hierarchy.columns.len(), 2);
    assert!(matches!(
        hierarchy.drill_down_filters.as_slice(),
        [DrillDownFilter::Category(f)] if f.category_values == ["EMEA", "APAC"]
    ));

    let config = bar.chart_configuration.as_ref().unwrap();
    let wells = config
        .field_wells
        .as_ref()
        .and_then(|w| w.bar_chart_aggregated_field_wells.as_ref())
        .unwrap();
    assert!(matches!(wells.category.as_slice(), [DimensionField::Categorical(_)]));
    assert!(matches!(
        wells.values.as_slice(),
        [MeasureField::Numerical(_), MeasureField::Numerical(_)]
    ));

    let range = config
        .value_axis
        .as_ref()
        .and_then(|a| a.data_options.as_ref());
    let Some(AxisDataOptions::Numeric(numeric)) = range else {
        panic!("expected numeric axis options");
    };
    assert!(matches!(
        numeric.range,
        Some(AxisDisplayRange::MinMax(ref r)) if r.maximum == Some(1_000_000.0)
    ));

    assert_eq!(config.reference_lines.len(), 1);
}

// ── Sheet of mixed kinds ────────────────────────────────────────────────────

#[test]
fn test_sheet_fixture_roundtrips_every_kind() {
    let input = load_fixture("sheet");
    let items: Vec<Value> = input
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::from_json)
        .collect();

    let visuals = expand_visuals(&items);
    assert_eq!(visuals.len(), items.len());

    let kinds: Vec<&str> = visuals.iter().map(Visual::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "line_chart_visual",
            "kpi_visual",
            "gauge_chart_visual",
            "histogram_visual",
            "pivot_table_visual",
            "table_visual",
            "scatter_plot_visual",
            "custom_content_visual",
            "word_cloud_visual",
        ]
    );

    let output = flatten_visuals(&visuals).to_json();
    assert_lossless(&input, &output);
}

#[test]
fn test_map_and_flow_kinds_roundtrip() {
    let input = load_fixture("maps_and_flows");
    let items: Vec<Value> = input
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::from_json)
        .collect();

    let visuals = expand_visuals(&items);
    let kinds: Vec<&str> = visuals.iter().map(Visual::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "box_plot_visual",
            "filled_map_visual",
            "geospatial_map_visual",
            "insight_visual",
            "radar_chart_visual",
            "sankey_diagram_visual",
            "waterfall_visual",
        ]
    );

    let output = flatten_visuals(&visuals).to_json();
    assert_lossless(&input, &output);

    let registry = SchemaRegistry::new();
    assert_eq!(validate(&input, &registry).unwrap(), vec![]);
}

#[test]
fn test_filled_map_typed_shape() {
    let input = load_fixture("maps_and_flows");
    let Visual::FilledMap(map) = expand_one(&input[1]) else {
        panic!("expected a filled map");
    };
    let bounds = map
        .chart_configuration
        .as_ref()
        .and_then(|c| c.window_options.as_ref())
        .and_then(|w| w.bounds.as_ref())
        .expect("bounds are set");
    assert_eq!((bounds.north, bounds.west), (49.5, -124.5));

    let typed = serde_json::to_value(Visual::FilledMap(map)).unwrap();
    assert_eq!(typed["FilledMapVisual"]["VisualId"], json!("revenue-by-state"));
}

#[test]
fn test_sheet_roundtrip_reports_lossless() {
    let registry = SchemaRegistry::new();
    let input = load_fixture("sheet");
    let result = roundtrip(&input, &registry, &TranscodeOptions::default()).unwrap();
    assert!(result.lossless);
    assert!(result.output.is_array());
}

#[test]
fn test_line_chart_forecast_and_type_key() {
    let sheet = load_fixture("sheet");
    let Visual::LineChart(line) = expand_one(&sheet[0]) else {
        panic!("expected a line chart");
    };
    let config = line.chart_configuration.as_ref().unwrap();
    assert_eq!(config.chart_type.as_ref().map(|t| t.to_string()).as_deref(), Some("AREA"));

    let forecast = &config.forecast_configurations[0];
    let Some(ForecastScenario::Point(point)) = &forecast.scenario else {
        panic!("expected a what-if point scenario");
    };
    assert_eq!(point.value, 1_200_000.0);
    assert_eq!(
        point.date.map(|d| d.to_rfc3339()),
        Some("2024-12-01T00:00:00+00:00".to_string())
    );

    let flattened = line.flatten().to_json();
    assert_eq!(flattened["chart_configuration"][0]["type"], json!("AREA"));
    assert_eq!(
        flattened["chart_configuration"][0]["forecast_configurations"][0]["scenario"][0]
            ["what_if_point_scenario"][0]["date"],
        json!("2024-12-01T00:00:00Z")
    );
}

#[test]
fn test_table_unaggregated_wells() {
    let sheet = load_fixture("sheet");
    let Visual::Table(table) = expand_one(&sheet[5]) else {
        panic!("expected a table");
    };
    let wells = table
        .chart_configuration
        .as_ref()
        .and_then(|c| c.field_wells.as_ref());
    let Some(TableFieldWells::Unaggregated(w)) = wells else {
        panic!("expected unaggregated wells");
    };
    assert_eq!(w.values[0].field_id.as_deref(), Some("order-link"));
}

#[test]
fn test_line_series_missing_data_uses_declared_key() {
    let input = Record::from_json(&json!({
        "axis_options": [{ "grid_line_visibility": "VISIBLE" }],
        "missing_data_configuration": [{ "treatment_option": "INTERPOLATE" }]
    }))
    .unwrap();
    let options = LineSeriesAxisDisplayOptions::expand(&input).unwrap();
    assert_eq!(options.missing_data_configurations.len(), 1);
    assert_eq!(options.flatten(), input);

    let registry = SchemaRegistry::new();
    let warnings = validate_node(&input, "LineSeriesAxisDisplayOptions", &registry);
    assert_eq!(warnings, vec![]);
}

// ── Nil safety and presence ─────────────────────────────────────────────────

#[test]
fn test_absent_visual_flattens_to_empty_sequence() {
    assert!(flatten_visual(None).is_empty());
}

#[test]
fn test_flatten_visual_wraps_single_record() {
    let visual = expand_one(&load_fixture("empty_visual"));
    let seq = flatten_visual(Some(&visual));
    assert_eq!(seq.len(), 1);
    assert_eq!(
        Value::list(seq).to_json(),
        json!([load_fixture("empty_visual")])
    );
}

#[test]
fn test_zero_valued_fields_are_interchangeable_with_absent() {
    let input = json!({
        "gauge_chart_visual": [{
            "visual_id": "g",
            "title": [],
            "subtitle": [{}],
            "actions": [],
            "chart_configuration": [{ "gauge_chart_options": [{ "primary_value_display_type": "" }] }]
        }]
    });
    let output = expand_one(&input).flatten().to_json();
    assert_lossless(&input, &output);
    assert!(output["gauge_chart_visual"][0].get("title").is_none());
    assert!(output["gauge_chart_visual"][0].get("actions").is_none());
}

#[test]
fn test_typed_json_is_pascal_case() {
    let visual = expand_one(&load_fixture("empty_visual"));
    let typed = serde_json::to_value(&visual).unwrap();
    assert_eq!(typed["EmptyVisual"]["VisualId"], json!("placeholder-1"));
    assert_eq!(typed["EmptyVisual"]["DataSetIdentifier"], json!("sales"));

    let back: Visual = serde_json::from_value(typed).unwrap();
    assert_eq!(back, visual);
}
