//! Tagged-union dispatch.
//!
//! A oneof node is a Rust enum with one variant per alternative, so "at
//! most one populated" holds by construction. Expand tries the alternatives
//! in declared order and keeps the first populated one; flatten writes the
//! single key of the variant it holds.
//!
//! Input that populates several alternatives is malformed. It is reported
//! here at debug level and by schema validation as a warning; the transcoder
//! itself keeps the first alternative.

use crate::value::{Record, Value};

impl Record {
    /// True when `key` holds a non-zero value: a non-empty string, a
    /// non-zero number, `true`, or a sequence whose first element is a
    /// record.
    pub fn is_populated(&self, key: &str) -> bool {
        match self.get(key) {
            None | Some(Value::Record(_)) => false,
            Some(Value::List(items)) | Some(Value::Set(items)) => {
                items.first().and_then(Value::as_record).is_some()
            }
            Some(scalar) => !scalar.is_zero(),
        }
    }
}

/// Alternatives of `alternatives` that `record` populates, in declared order.
pub fn populated<'a>(record: &Record, alternatives: &[&'a str]) -> Vec<&'a str> {
    alternatives
        .iter()
        .copied()
        .filter(|key| record.is_populated(key))
        .collect()
}

/// Emit a debug event when more than one alternative is populated.
pub fn note_extra_alternatives(node: &'static str, record: &Record, alternatives: &[&str]) {
    let found = populated(record, alternatives);
    if found.len() > 1 {
        tracing::debug!(
            node,
            kept = found[0],
            ignored = ?&found[1..],
            "several oneof alternatives populated; keeping the first"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_follows_declared_order() {
        let record = Record::new()
            .with("b", Value::list([Value::Record(Record::new())]))
            .with("a", "x")
            .with("c", Value::list([]));
        assert_eq!(populated(&record, &["a", "b", "c"]), vec!["a", "b"]);
        assert_eq!(populated(&record, &["c", "b", "a"]), vec!["b", "a"]);
    }

    #[test]
    fn test_zero_scalars_are_not_populated() {
        let record = Record::new()
            .with("flag", false)
            .with("count", Value::Int(0))
            .with("ratio", Value::Float(0.0))
            .with("label", "");
        assert!(populated(&record, &["flag", "count", "ratio", "label"]).is_empty());
        assert!(Record::new().with("flag", true).is_populated("flag"));
    }

    #[test]
    fn test_scalar_sequence_is_not_a_populated_block() {
        let record = Record::new().with("a", Value::list(["x".into()]));
        assert!(!record.is_populated("a"));
    }
}
