//! Warning types emitted when a dynamic tree does not match its schema.

use serde::{Deserialize, Serialize};

/// A single schema mismatch found by validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    /// Data location of the offending value (e.g. "/bar_chart_visual/0/title/0").
    pub data_path: String,
    /// Node and field that declared the expectation (e.g. "BarChartVisual.title").
    pub schema_path: String,
    /// Classification of the warning.
    pub kind: WarningKind,
    /// Human-readable description.
    pub message: String,
}

/// Classification of validation warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WarningKind {
    /// A key the node does not declare.
    UnknownField,
    /// The value has a different shape than declared.
    TypeMismatch { expected: String, found: String },
    /// A required field is absent or zero-valued.
    MissingRequired,
    /// A collection holds too few or too many items.
    Cardinality {
        min: usize,
        max: Option<usize>,
        actual: usize,
    },
    /// A scalar predicate failed.
    ConstraintViolation {
        /// The constraint that failed (e.g. "pattern", "enum", "range").
        constraint: String,
    },
    /// More than one alternative of a tagged union is populated.
    AmbiguousOneof { populated: Vec<String> },
    /// A tagged union with none of its alternatives populated.
    EmptyOneof { alternatives: Vec<String> },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.data_path, self.schema_path, self.message)
    }
}
