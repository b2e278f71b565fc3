//! Walk a dynamic tree against the registry and collect warnings.
//!
//! Validation never stops at the first problem; it reports everything it can
//! reach. Nested blocks are only descended into when they have the declared
//! shape.

use chrono::DateTime;

use super::{Constraint, FieldKind, FieldSpec, NodeSchema, SchemaRegistry};
use crate::value::{Record, Value};
use crate::warning::{Warning, WarningKind};

/// Validate one visual record against the registry root.
pub fn validate_visual(record: &Record, registry: &SchemaRegistry) -> Vec<Warning> {
    validate_node(record, registry.root(), registry)
}

/// Validate `record` as an instance of the node named `node_name`.
pub fn validate_node(record: &Record, node_name: &str, registry: &SchemaRegistry) -> Vec<Warning> {
    let mut warnings = Vec::new();
    match registry.node(node_name) {
        Some(node) => walk(record, node, registry, "", &mut warnings),
        None => tracing::warn!(node = node_name, "validation requested for unknown node"),
    }
    warnings
}

fn walk(
    record: &Record,
    node: &NodeSchema,
    registry: &SchemaRegistry,
    data_path: &str,
    warnings: &mut Vec<Warning>,
) {
    for key in record.keys() {
        if node.get(key).is_none() {
            warnings.push(Warning {
                data_path: format!("{data_path}/{key}"),
                schema_path: node.name().to_string(),
                kind: WarningKind::UnknownField,
                message: format!("{} does not declare field '{key}'", node.name()),
            });
        }
    }

    for (key, spec) in node.fields() {
        let path = format!("{data_path}/{key}");
        let schema_path = format!("{}.{key}", node.name());
        match record.get(key) {
            None => {
                if spec.required {
                    warnings.push(missing(&path, &schema_path));
                }
            }
            Some(value) => {
                check_field(value, spec, registry, &path, &schema_path, warnings);
            }
        }
    }

    if let Some(alternatives) = node.alternatives() {
        check_one_of(record, node, alternatives, data_path, warnings);
    }
}

/// A tagged union must hold exactly one alternative. Only values that expand
/// would accept for the declared kind count as set.
fn check_one_of(
    record: &Record,
    node: &NodeSchema,
    alternatives: &'static [&'static str],
    data_path: &str,
    warnings: &mut Vec<Warning>,
) {
    let found: Vec<&str> = alternatives
        .iter()
        .copied()
        .filter(|key| holds_alternative(record, node, key))
        .collect();
    let data_path = if data_path.is_empty() {
        "/".to_string()
    } else {
        data_path.to_string()
    };
    let listed = alternatives.join(", ");
    match found.as_slice() {
        [] => warnings.push(Warning {
            data_path,
            schema_path: node.name().to_string(),
            kind: WarningKind::EmptyOneof {
                alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
            },
            message: format!("exactly one of [{listed}] must be set, found none"),
        }),
        [_] => {}
        _ => warnings.push(Warning {
            data_path,
            schema_path: node.name().to_string(),
            kind: WarningKind::AmbiguousOneof {
                populated: found.iter().map(|s| s.to_string()).collect(),
            },
            message: format!(
                "at most one of [{listed}] may be set, found {}",
                found.join(", ")
            ),
        }),
    }
}

fn holds_alternative(record: &Record, node: &NodeSchema, key: &str) -> bool {
    let (Some(value), Some(spec)) = (record.get(key), node.get(key)) else {
        return false;
    };
    match &spec.kind {
        FieldKind::Block { .. } => value
            .as_sequence()
            .and_then(<[Value]>::first)
            .is_some_and(|first| first.as_record().is_some()),
        FieldKind::String | FieldKind::Enum(_) | FieldKind::Timestamp => {
            value.as_str().is_some_and(|s| !s.is_empty())
        }
        FieldKind::Bool => value.as_bool() == Some(true),
        FieldKind::Int => value.as_int().is_some_and(|i| i != 0),
        FieldKind::Float => matches!(value, Value::Float(_) | Value::Int(_)) && !value.is_zero(),
        FieldKind::StringList { .. } | FieldKind::StringSet { .. } => {
            value.as_sequence().is_some_and(|items| !items.is_empty())
        }
    }
}

fn check_field(
    value: &Value,
    spec: &FieldSpec,
    registry: &SchemaRegistry,
    path: &str,
    schema_path: &str,
    warnings: &mut Vec<Warning>,
) {
    match &spec.kind {
        FieldKind::String => match value.as_str() {
            Some(s) => check_string(s, spec, registry, path, schema_path, warnings),
            None => warnings.push(mismatch(spec, value, path, schema_path)),
        },
        FieldKind::Enum(allowed) => match value.as_str() {
            Some("") if spec.required => warnings.push(missing(path, schema_path)),
            Some("") => {}
            Some(s) if !allowed.contains(&s) => warnings.push(violation(
                "enum",
                format!("'{s}' is not one of [{}]", allowed.join(", ")),
                path,
                schema_path,
            )),
            Some(_) => {}
            None => warnings.push(mismatch(spec, value, path, schema_path)),
        },
        FieldKind::Timestamp => match value.as_str() {
            Some("") if spec.required => warnings.push(missing(path, schema_path)),
            Some("") => {}
            Some(s) => {
                if let Err(err) = DateTime::parse_from_rfc3339(s) {
                    warnings.push(violation(
                        "timestamp",
                        format!("'{s}' is not an RFC 3339 timestamp: {err}"),
                        path,
                        schema_path,
                    ));
                }
            }
            None => warnings.push(mismatch(spec, value, path, schema_path)),
        },
        FieldKind::Bool => {
            if value.as_bool().is_none() {
                warnings.push(mismatch(spec, value, path, schema_path));
            }
        }
        FieldKind::Int => match value.as_int() {
            Some(i) => check_int(i, spec, path, schema_path, warnings),
            None => warnings.push(mismatch(spec, value, path, schema_path)),
        },
        FieldKind::Float => match value {
            Value::Float(f) => check_float(*f, spec, path, schema_path, warnings),
            Value::Int(i) => check_float(*i as f64, spec, path, schema_path, warnings),
            _ => warnings.push(mismatch(spec, value, path, schema_path)),
        },
        FieldKind::StringList {
            min_items,
            max_items,
        }
        | FieldKind::StringSet {
            min_items,
            max_items,
        } => {
            let Some(items) = value.as_sequence() else {
                warnings.push(mismatch(spec, value, path, schema_path));
                return;
            };
            check_count(items.len(), *min_items, *max_items, path, schema_path, warnings);
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{path}/{index}");
                match item.as_str() {
                    Some(s) if !s.is_empty() => {
                        check_string(s, spec, registry, &item_path, schema_path, warnings)
                    }
                    Some(_) => {}
                    None => warnings.push(mismatch(spec, item, &item_path, schema_path)),
                }
            }
            if matches!(spec.kind, FieldKind::StringSet { .. }) {
                check_unique(items, path, schema_path, warnings);
            }
        }
        FieldKind::Block {
            child,
            min_items,
            max_items,
        } => {
            let Some(items) = value.as_sequence() else {
                warnings.push(mismatch(spec, value, path, schema_path));
                return;
            };
            if spec.required && items.is_empty() {
                warnings.push(missing(path, schema_path));
            } else {
                check_count(items.len(), *min_items, *max_items, path, schema_path, warnings);
            }
            let Some(child_node) = registry.node(child.name) else {
                tracing::warn!(node = child.name, "child node missing from registry");
                return;
            };
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{path}/{index}");
                match item.as_record() {
                    Some(record) => walk(record, child_node, registry, &item_path, warnings),
                    None => warnings.push(Warning {
                        data_path: item_path,
                        schema_path: schema_path.to_string(),
                        kind: WarningKind::TypeMismatch {
                            expected: "record".to_string(),
                            found: item.kind_name().to_string(),
                        },
                        message: format!("expected a record, found {}", item.kind_name()),
                    }),
                }
            }
        }
    }
}

fn check_string(
    s: &str,
    spec: &FieldSpec,
    registry: &SchemaRegistry,
    path: &str,
    schema_path: &str,
    warnings: &mut Vec<Warning>,
) {
    if s.is_empty() {
        if spec.required {
            warnings.push(missing(path, schema_path));
        }
        return;
    }
    for constraint in &spec.constraints {
        match constraint {
            Constraint::Length { min, max } => {
                let len = s.chars().count();
                if len < *min || len > *max {
                    warnings.push(violation(
                        "length",
                        format!("length {len} outside {min}..={max}"),
                        path,
                        schema_path,
                    ));
                }
            }
            Constraint::Pattern(source) => match registry.pattern(source) {
                Some(Ok(re)) => {
                    if !re.is_match(s) {
                        warnings.push(violation(
                            "pattern",
                            format!("'{s}' does not match {source}"),
                            path,
                            schema_path,
                        ));
                    }
                }
                Some(Err(err)) => {
                    tracing::warn!(pattern = %source, error = %err, "skipping invalid pattern");
                }
                None => {
                    tracing::warn!(pattern = %source, "pattern was not compiled");
                }
            },
            Constraint::IntRange { .. } | Constraint::FloatRange { .. } => {}
        }
    }
}

fn check_int(i: i64, spec: &FieldSpec, path: &str, schema_path: &str, warnings: &mut Vec<Warning>) {
    for constraint in &spec.constraints {
        if let Constraint::IntRange { min, max } = constraint {
            if i < *min || i > *max {
                warnings.push(violation(
                    "range",
                    format!("{i} outside {min}..={max}"),
                    path,
                    schema_path,
                ));
            }
        }
    }
}

fn check_float(f: f64, spec: &FieldSpec, path: &str, schema_path: &str, warnings: &mut Vec<Warning>) {
    for constraint in &spec.constraints {
        if let Constraint::FloatRange { min, max } = constraint {
            if f < *min || f > *max {
                warnings.push(violation(
                    "range",
                    format!("{f} outside {min}..={max}"),
                    path,
                    schema_path,
                ));
            }
        }
    }
}

fn check_count(
    actual: usize,
    min: usize,
    max: Option<usize>,
    path: &str,
    schema_path: &str,
    warnings: &mut Vec<Warning>,
) {
    let too_many = max.is_some_and(|m| actual > m);
    // An empty collection is the same as an absent one; only a populated
    // collection can be short.
    let too_few = actual > 0 && actual < min;
    if too_many || too_few {
        let bound = match max {
            Some(m) => format!("{min}..={m}"),
            None => format!("at least {min}"),
        };
        warnings.push(Warning {
            data_path: path.to_string(),
            schema_path: schema_path.to_string(),
            kind: WarningKind::Cardinality { min, max, actual },
            message: format!("{actual} items, expected {bound}"),
        });
    }
}

fn check_unique(items: &[Value], path: &str, schema_path: &str, warnings: &mut Vec<Warning>) {
    for (index, item) in items.iter().enumerate() {
        if items[..index].contains(item) {
            warnings.push(violation(
                "unique",
                "set holds a duplicate item".to_string(),
                &format!("{path}/{index}"),
                schema_path,
            ));
        }
    }
}

fn missing(path: &str, schema_path: &str) -> Warning {
    Warning {
        data_path: path.to_string(),
        schema_path: schema_path.to_string(),
        kind: WarningKind::MissingRequired,
        message: "required field is missing".to_string(),
    }
}

fn mismatch(spec: &FieldSpec, value: &Value, path: &str, schema_path: &str) -> Warning {
    Warning {
        data_path: path.to_string(),
        schema_path: schema_path.to_string(),
        kind: WarningKind::TypeMismatch {
            expected: spec.expected().to_string(),
            found: value.kind_name().to_string(),
        },
        message: format!("expected {}, found {}", spec.expected(), value.kind_name()),
    }
}

fn violation(constraint: &str, message: String, path: &str, schema_path: &str) -> Warning {
    Warning {
        data_path: path.to_string(),
        schema_path: schema_path.to_string(),
        kind: WarningKind::ConstraintViolation {
            constraint: constraint.to_string(),
        },
        message,
    }
}
