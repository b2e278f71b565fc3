//! Schema validation and the validation modes of the JSON boundary.

use pretty_assertions::assert_eq;
use serde_json::{json, Value as Json};
use std::fs;
use std::path::Path;
use visual_transcoder_core::{
    expand, validate_node, validate_visual, Record, SchemaRegistry, TranscodeError,
    TranscodeOptions, ValidationMode, Warning, WarningKind,
};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/fixtures");

fn load_fixture(name: &str) -> Json {
    let path = Path::new(FIXTURES_DIR).join(format!("{name}.json"));
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {name}.json: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {name}.json: {e}"))
}

fn record(json: Json) -> Record {
    Record::from_json(&json).expect("fixture must be a JSON object")
}

fn find<'a>(warnings: &'a [Warning], data_path: &str) -> &'a Warning {
    warnings
        .iter()
        .find(|w| w.data_path == data_path)
        .unwrap_or_else(|| panic!("no warning at {data_path}; got {warnings:#?}"))
}

fn options(mode: ValidationMode) -> TranscodeOptions {
    TranscodeOptions {
        mode,
        ..TranscodeOptions::default()
    }
}

// ── Registry ────────────────────────────────────────────────────────────────

#[test]
fn test_registry_reaches_every_visual_kind() {
    let registry = SchemaRegistry::new();
    assert_eq!(registry.root(), "Visual");
    for name in [
        "BarChartVisual",
        "BoxPlotVisual",
        "ComboChartVisual",
        "CustomContentVisual",
        "EmptyVisual",
        "FilledMapVisual",
        "FunnelChartVisual",
        "GaugeChartVisual",
        "GeospatialMapVisual",
        "HeatMapVisual",
        "HistogramVisual",
        "InsightVisual",
        "KPIVisual",
        "LineChartVisual",
        "PieChartVisual",
        "PivotTableVisual",
        "RadarChartVisual",
        "SankeyDiagramVisual",
        "ScatterPlotVisual",
        "TableVisual",
        "TreeMapVisual",
        "WaterfallVisual",
        "WordCloudVisual",
    ] {
        assert!(registry.node(name).is_some(), "{name} not registered");
    }
    assert!(registry.node("ColumnIdentifier").is_some());
    assert!(registry.node("TimeBasedForecastProperties").is_some());
    assert!(registry.node("GeospatialCoordinateBounds").is_some());
}

#[test]
fn test_map_bounds_and_narrative_constraints() {
    let registry = SchemaRegistry::new();
    let warnings = validate_node(
        &record(json!({ "east": 10.5, "north": 95.5, "south": 0.0 })),
        "GeospatialCoordinateBounds",
        &registry,
    );
    let paths: Vec<&str> = warnings.iter().map(|w| w.data_path.as_str()).collect();
    assert_eq!(paths, vec!["/north", "/west"]);
    assert_eq!(warnings[1].kind, WarningKind::MissingRequired);

    let warnings = validate_node(&record(json!({})), "CustomNarrativeOptions", &registry);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::MissingRequired);
}

// ── Individual checks ───────────────────────────────────────────────────────

#[test]
fn test_clean_fixture_has_no_warnings() {
    let registry = SchemaRegistry::new();
    let warnings = validate_visual(&record(load_fixture("empty_visual")), &registry);
    assert_eq!(warnings, vec![]);
}

#[test]
fn test_invalid_fixture_reports_every_problem() {
    let registry = SchemaRegistry::new();
    let warnings = validate_visual(&record(load_fixture("invalid_visual")), &registry);

    let root = find(&warnings, "/");
    assert!(matches!(root.kind, WarningKind::AmbiguousOneof { .. }));

    let id = find(&warnings, "/bar_chart_visual/0/visual_id");
    assert_eq!(
        id.kind,
        WarningKind::ConstraintViolation {
            constraint: "pattern".to_string()
        }
    );
    assert_eq!(id.schema_path, "BarChartVisual.visual_id");

    let orientation = find(&warnings, "/bar_chart_visual/0/chart_configuration/0/orientation");
    assert_eq!(
        orientation.kind,
        WarningKind::ConstraintViolation {
            constraint: "enum".to_string()
        }
    );

    let legend = find(&warnings, "/bar_chart_visual/0/chart_configuration/0/legend");
    assert_eq!(
        legend.kind,
        WarningKind::TypeMismatch {
            expected: "list of records".to_string(),
            found: "string".to_string()
        }
    );
}

#[test]
fn test_unknown_field() {
    let registry = SchemaRegistry::new();
    let input = record(json!({ "data_set_identifier": "d", "column_name": "c", "colour": "red" }));
    let warnings = validate_node(&input, "ColumnIdentifier", &registry);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::UnknownField);
    assert_eq!(warnings[0].data_path, "/colour");
}

#[test]
fn test_missing_required_scalar_and_block() {
    let registry = SchemaRegistry::new();
    let input = record(json!({ "field_id": "region" }));
    let warnings = validate_node(&input, "CategoricalDimensionField", &registry);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::MissingRequired);
    assert_eq!(warnings[0].data_path, "/column");

    let empty_id = record(json!({
        "field_id": "",
        "column": [{ "data_set_identifier": "d", "column_name": "c" }]
    }));
    let warnings = validate_node(&empty_id, "CategoricalDimensionField", &registry);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::MissingRequired);
}

#[test]
fn test_cardinality_upper_bound() {
    let registry = SchemaRegistry::new();
    let column = json!({
        "categorical_dimension_field": [{
            "field_id": "c",
            "column": [{ "data_set_identifier": "d", "column_name": "c" }]
        }]
    });
    let input = record(json!({ "columns": [column.clone(), column] }));
    let warnings = validate_node(&input, "HeatMapAggregatedFieldWells", &registry);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].kind,
        WarningKind::Cardinality {
            min: 0,
            max: Some(1),
            actual: 2
        }
    );
}

#[test]
fn test_cardinality_lower_bound_only_applies_when_populated() {
    let registry = SchemaRegistry::new();
    let dims = |n: usize| {
        json!({
            "measure_field_id": "m",
            "contributor_dimensions": (0..n)
                .map(|i| json!({ "data_set_identifier": "d", "column_name": format!("c{i}") }))
                .collect::<Vec<_>>()
        })
    };

    let warnings = validate_node(&record(dims(0)), "ContributionAnalysisDefault", &registry);
    assert_eq!(warnings, vec![]);

    let warnings = validate_node(&record(dims(5)), "ContributionAnalysisDefault", &registry);
    assert!(matches!(
        warnings.as_slice(),
        [Warning {
            kind: WarningKind::Cardinality { min: 1, max: Some(4), actual: 5 },
            ..
        }]
    ));
}

#[test]
fn test_numeric_ranges() {
    let registry = SchemaRegistry::new();
    let warnings = validate_node(
        &record(json!({ "arc_angle": 90.0 })),
        "ArcConfiguration",
        &registry,
    );
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].data_path, "/arc_angle");

    let warnings = validate_node(
        &record(json!({ "maximum_string_length": 101 })),
        "WordCloudOptions",
        &registry,
    );
    assert_eq!(warnings.len(), 1);

    let warnings = validate_node(
        &record(json!({ "maximum_string_length": 100 })),
        "WordCloudOptions",
        &registry,
    );
    assert_eq!(warnings, vec![]);
}

#[test]
fn test_color_pattern() {
    let registry = SchemaRegistry::new();
    let warnings = validate_node(
        &record(json!({ "color": "red", "pattern": "SOLID" })),
        "ReferenceLineStyleConfiguration",
        &registry,
    );
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].kind,
        WarningKind::ConstraintViolation {
            constraint: "pattern".to_string()
        }
    );
}

#[test]
fn test_malformed_sequence_element() {
    let registry = SchemaRegistry::new();
    let input = record(json!({ "visual_id": "v", "data_set_identifier": "d", "actions": ["oops"] }));
    let warnings = validate_node(&input, "EmptyVisual", &registry);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].data_path, "/actions/0");
}

#[test]
fn test_record_without_visual_kind_is_an_empty_union() {
    let registry = SchemaRegistry::new();
    let warnings = validate_visual(&record(json!({})), &registry);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].data_path, "/");
    assert_eq!(warnings[0].schema_path, "Visual");
    let WarningKind::EmptyOneof { alternatives } = &warnings[0].kind else {
        panic!("expected an empty oneof, got {:?}", warnings[0].kind);
    };
    assert!(alternatives.contains(&"bar_chart_visual".to_string()));
}

#[test]
fn test_empty_union_inside_field_wells() {
    let registry = SchemaRegistry::new();
    let input = record(json!({
        "bar_chart_visual": [{
            "visual_id": "v",
            "chart_configuration": [{
                "field_wells": [{
                    "bar_chart_aggregated_field_wells": [{ "category": [{}] }]
                }]
            }]
        }]
    }));
    let warnings = validate_visual(&input, &registry);
    let empty = find(
        &warnings,
        "/bar_chart_visual/0/chart_configuration/0/field_wells/0/bar_chart_aggregated_field_wells/0/category/0",
    );
    assert!(matches!(empty.kind, WarningKind::EmptyOneof { .. }));
    assert!(empty.message.contains("found none"));

    let result = expand(&input.to_json(), &registry, &options(ValidationMode::Warn)).unwrap();
    assert_eq!(result.visuals.len(), 1);
    assert!(result.warnings.contains(empty));
}

// ── Modes ───────────────────────────────────────────────────────────────────

#[test]
fn test_lenient_mode_skips_validation() {
    let registry = SchemaRegistry::new();
    let result = expand(
        &load_fixture("invalid_visual"),
        &registry,
        &options(ValidationMode::Lenient),
    )
    .unwrap();
    assert_eq!(result.visuals.len(), 1);
    assert_eq!(result.warnings, vec![]);
}

#[test]
fn test_warn_mode_returns_warnings_and_visuals() {
    let registry = SchemaRegistry::new();
    let result = expand(
        &load_fixture("invalid_visual"),
        &registry,
        &options(ValidationMode::Warn),
    )
    .unwrap();
    assert_eq!(result.visuals.len(), 1);
    assert_eq!(result.visuals[0].kind(), "bar_chart_visual");
    assert!(result.warnings.len() >= 4);
}

#[test]
fn test_strict_mode_rejects_invalid_input() {
    let registry = SchemaRegistry::new();
    let err = expand(
        &load_fixture("invalid_visual"),
        &registry,
        &options(ValidationMode::Strict),
    )
    .unwrap_err();
    let TranscodeError::Shape { warnings } = &err else {
        panic!("expected a shape error, got {err}");
    };
    assert!(warnings.len() >= 4);
    assert!(err.to_string().contains("warning(s)"));
}

#[test]
fn test_strict_mode_accepts_clean_input() {
    let registry = SchemaRegistry::new();
    let result = expand(
        &load_fixture("empty_visual"),
        &registry,
        &options(ValidationMode::Strict),
    )
    .unwrap();
    assert_eq!(result.visuals.len(), 1);
}
