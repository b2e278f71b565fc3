//! Criterion benchmarks for expand/flatten throughput.
//!
//! Fixtures are parsed into dynamic records outside the benchmark loop to
//! measure only the transcoding, not JSON parsing or file I/O.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::Value as Json;
use std::fs;
use std::path::Path;

use visual_transcoder_core::{
    expand, expand_visual, expand_visuals, flatten_visuals, validate_visual, Record,
    SchemaRegistry, Transcode, TranscodeOptions, ValidationMode, Value,
};

/// Load and parse a fixture from the shared test fixtures directory.
fn load_fixture(name: &str) -> Json {
    let fixtures_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/fixtures");
    let path = Path::new(fixtures_dir).join(name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

fn sheet_items() -> Vec<Value> {
    load_fixture("sheet.json")
        .as_array()
        .map(|items| items.iter().filter_map(Value::from_json).collect())
        .unwrap_or_default()
}

fn bench_expand_bar_chart(c: &mut Criterion) {
    let record = Record::from_json(&load_fixture("bar_chart.json")).unwrap();

    c.bench_function("expand/bar_chart", |b| {
        b.iter(|| expand_visual(black_box(&record)).unwrap())
    });
}

fn bench_flatten_bar_chart(c: &mut Criterion) {
    let record = Record::from_json(&load_fixture("bar_chart.json")).unwrap();
    let visual = expand_visual(&record).unwrap();

    c.bench_function("flatten/bar_chart", |b| b.iter(|| black_box(&visual).flatten()));
}

fn bench_sheet_roundtrip(c: &mut Criterion) {
    let items = sheet_items();

    c.bench_function("roundtrip/sheet", |b| {
        b.iter(|| flatten_visuals(&expand_visuals(black_box(&items))))
    });
}

fn bench_validate_bar_chart(c: &mut Criterion) {
    let registry = SchemaRegistry::new();
    let record = Record::from_json(&load_fixture("bar_chart.json")).unwrap();

    c.bench_function("validate/bar_chart", |b| {
        b.iter(|| validate_visual(black_box(&record), black_box(&registry)))
    });
}

fn bench_registry_build(c: &mut Criterion) {
    c.bench_function("registry/build", |b| b.iter(SchemaRegistry::new));
}

fn bench_expand_json_warn(c: &mut Criterion) {
    let registry = SchemaRegistry::new();
    let sheet = load_fixture("sheet.json");
    let options = TranscodeOptions {
        mode: ValidationMode::Warn,
        ..TranscodeOptions::default()
    };

    c.bench_function("expand_json/sheet_warn", |b| {
        b.iter(|| expand(black_box(&sheet), &registry, &options).unwrap())
    });
}

criterion_group!(
    benches,
    bench_expand_bar_chart,
    bench_flatten_bar_chart,
    bench_sheet_roundtrip,
    bench_validate_bar_chart,
    bench_registry_build,
    bench_expand_json_warn,
);
criterion_main!(benches);
