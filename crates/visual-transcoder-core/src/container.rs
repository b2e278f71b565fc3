//! Cardinality-normalized containers.
//!
//! Every nested block on the dynamic side is a sequence of records: a
//! singular block is a sequence of at most one, a repeated block holds 0..N.
//! The helpers here implement that convention once so each node transcoder
//! only lists its fields.

use crate::schema::NodeSchema;
use crate::value::{Record, Value};

/// The expand/flatten pair for one node type of the typed object graph.
///
/// `expand` never fails as a whole: each field is extracted independently
/// and anything absent or malformed stays at its zero value. It returns
/// `None` only when the record cannot produce a node at all, which happens
/// for a tagged union with no populated alternative.
///
/// `flatten` writes a field only when the typed value is set, so zero values
/// and omitted keys stay interchangeable.
pub trait Transcode: Sized {
    /// Schema node name, unique across the registry.
    const NAME: &'static str;

    fn expand(record: &Record) -> Option<Self>;

    fn flatten(&self) -> Record;

    /// Declare the dynamic-side fields of this node for validation.
    fn describe(node: NodeSchema) -> NodeSchema;
}

/// Expand a singular block. Elements beyond the first are ignored.
pub fn expand_singular<T: Transcode>(seq: &[Value]) -> Option<T> {
    let record = seq.first()?.as_record()?;
    if seq.len() > 1 {
        tracing::trace!(
            node = T::NAME,
            ignored = seq.len() - 1,
            "singular block holds extra elements"
        );
    }
    T::expand(record)
}

/// Expand every well-formed element of a repeated block, skipping the rest.
pub fn expand_repeated<T: Transcode>(seq: &[Value]) -> Vec<T> {
    seq.iter()
        .enumerate()
        .filter_map(|(index, item)| match item.as_record() {
            Some(record) => T::expand(record),
            None => {
                tracing::trace!(
                    node = T::NAME,
                    index,
                    found = item.kind_name(),
                    "skipping non-record element"
                );
                None
            }
        })
        .collect()
}

/// An absent object flattens to an empty sequence, which callers omit.
pub fn flatten_singular<T: Transcode>(obj: Option<&T>) -> Vec<Value> {
    obj.map(|o| vec![Value::Record(o.flatten())])
        .unwrap_or_default()
}

pub fn flatten_repeated<T: Transcode>(objs: &[T]) -> Vec<Value> {
    objs.iter().map(|o| Value::Record(o.flatten())).collect()
}

/// Nil-safe entry point: absent input or a non-record yields `None`.
pub fn expand_node<T: Transcode>(value: Option<&Value>) -> Option<T> {
    T::expand(value?.as_record()?)
}

/// Nil-safe inverse of [`expand_node`].
pub fn flatten_node<T: Transcode>(obj: Option<&T>) -> Vec<Value> {
    flatten_singular(obj)
}

impl Record {
    /// Singular nested block under `key`.
    pub fn block<T: Transcode>(&self, key: &str) -> Option<T> {
        expand_singular(self.get(key)?.as_sequence()?)
    }

    /// Repeated nested block under `key`.
    pub fn blocks<T: Transcode>(&self, key: &str) -> Vec<T> {
        self.get(key)
            .and_then(Value::as_sequence)
            .map(expand_repeated::<T>)
            .unwrap_or_default()
    }

    pub fn put_block<T: Transcode>(&mut self, key: &str, obj: Option<&T>) {
        let seq = flatten_singular(obj);
        if !seq.is_empty() {
            self.insert(key, Value::List(seq));
        }
    }

    pub fn put_blocks<T: Transcode>(&mut self, key: &str, objs: &[T]) {
        let seq = flatten_repeated(objs);
        if !seq.is_empty() {
            self.insert(key, Value::List(seq));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::string;

    #[derive(Debug, PartialEq)]
    struct Tag {
        name: Option<String>,
    }

    impl Transcode for Tag {
        const NAME: &'static str = "Tag";

        fn expand(record: &Record) -> Option<Self> {
            Some(Self {
                name: record.string("name"),
            })
        }

        fn flatten(&self) -> Record {
            let mut record = Record::new();
            record.put_string("name", self.name.as_deref());
            record
        }

        fn describe(node: NodeSchema) -> NodeSchema {
            node.field("name", string())
        }
    }

    fn tag(name: &str) -> Value {
        Value::Record(Record::new().with("name", name))
    }

    #[test]
    fn test_absence_is_idempotent() {
        assert_eq!(expand_node::<Tag>(None), None);
        assert!(flatten_node::<Tag>(None).is_empty());
        assert_eq!(expand_singular::<Tag>(&[]), None);
        assert!(expand_repeated::<Tag>(&[]).is_empty());
    }

    #[test]
    fn test_singular_takes_first_record_only() {
        let seq = vec![tag("a"), tag("b")];
        assert_eq!(
            expand_singular::<Tag>(&seq),
            Some(Tag {
                name: Some("a".into())
            })
        );
        assert_eq!(expand_singular::<Tag>(&[Value::from("a")]), None);
    }

    #[test]
    fn test_repeated_skips_malformed_elements() {
        let seq = vec![tag("a"), Value::Int(3), tag("b")];
        let tags = expand_repeated::<Tag>(&seq);
        assert_eq!(tags.len(), 2);
        assert_eq!(flatten_repeated(&tags), vec![tag("a"), tag("b")]);
    }

    #[test]
    fn test_empty_block_is_omitted() {
        let mut record = Record::new();
        record.put_block::<Tag>("one", None);
        record.put_blocks::<Tag>("many", &[]);
        assert!(record.is_empty());

        let source = Record::new().with("one", Value::list([]));
        assert_eq!(source.block::<Tag>("one"), None);
    }

    #[test]
    fn test_non_sequence_block_reads_as_absent() {
        let record = Record::new().with("one", tag("a"));
        assert_eq!(record.block::<Tag>("one"), None);
        assert!(record.blocks::<Tag>("one").is_empty());
    }
}
