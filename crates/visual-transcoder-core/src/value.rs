//! Dynamic attribute tree.
//!
//! The loosely-typed interchange form consumed and produced by the
//! transcoders. A node is a scalar leaf, an ordered [`Value::List`], an
//! unordered [`Value::Set`], or a [`Record`] keyed by field name.
//!
//! Every accessor returns `Option`: a value of the wrong shape reads exactly
//! like an absent one, so transcoders never branch on "missing" versus
//! "malformed".

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A node of the dynamic attribute tree.
#[derive(Debug, Clone)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Ordered collection; position is significant.
    List(Vec<Value>),
    /// Unordered collection of unique items; position is not significant.
    Set(Vec<Value>),
    Record(Record),
}

/// Borrowed view of a scalar leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    String(&'a str),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Build a list value.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    /// Build a set value, dropping duplicates while keeping first occurrences.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Value::Set(unique)
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Elements of a list or a set.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Set(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Value::String(s) => Some(Scalar::String(s)),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Int(i) => Some(Scalar::Int(*i)),
            Value::Float(f) => Some(Scalar::Float(*f)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Short shape name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Record(_) => "record",
        }
    }

    /// True for the zero value of each shape: empty string, `false`, numeric
    /// zero, an empty collection or an empty record.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Float(f) => *f == 0.0,
            Value::List(items) | Value::Set(items) => items.is_empty(),
            Value::Record(record) => record.is_empty(),
        }
    }

    /// Rewrite this value with every zero-valued record field removed.
    ///
    /// Omitted, empty and zero-valued fields are interchangeable, so two
    /// trees are semantically equal exactly when their normalized forms are
    /// equal. Records inside sequences are kept even when they normalize to
    /// `{}`: a one-element `[{}]` still marks a populated block.
    pub fn normalized(&self) -> Value {
        match self {
            Value::List(items) => Value::List(items.iter().map(Value::normalized).collect()),
            Value::Set(items) => Value::Set(items.iter().map(Value::normalized).collect()),
            Value::Record(record) => Value::Record(record.normalized()),
            scalar => scalar.clone(),
        }
    }

    /// Convert from JSON. `null` has no dynamic counterpart and yields `None`.
    pub fn from_json(json: &serde_json::Value) -> Option<Value> {
        match json {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Value::Int(i)),
                None => n.as_f64().map(Value::Float),
            },
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Array(items) => {
                Some(Value::List(items.iter().filter_map(Value::from_json).collect()))
            }
            serde_json::Value::Object(map) => Some(Value::Record(Record::from_json_map(map))),
        }
    }

    /// Convert to JSON. Sets become arrays; non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::List(items) | Value::Set(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Record(record) => record.to_json(),
        }
    }
}

/// Semantic equality.
///
/// Sets compare without regard to order. An `Int` equals a `Float` holding
/// the same number, since a float field written as `2` expands and flattens
/// back as `2.0`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => (*a as f64) == *b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => {
                a.len() == b.len() && a.iter().all(|item| b.contains(item))
            }
            // A set read back from JSON arrives as a list.
            (Value::Set(a), Value::List(b)) | (Value::List(b), Value::Set(a)) => {
                a.len() == b.len() && a.iter().all(|item| b.contains(item))
            }
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Value::from_json(&json).ok_or_else(|| D::Error::custom("null is not a dynamic value"))
    }
}

/// A mapping from field name to [`Value`]. Key order is irrelevant; keys are
/// kept sorted so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// See [`Value::normalized`].
    pub fn normalized(&self) -> Record {
        self.fields
            .iter()
            .map(|(key, value)| (key.clone(), value.normalized()))
            .filter(|(_, value)| !value.is_zero())
            .collect()
    }

    /// Parse a JSON object. Returns `None` for anything other than an object.
    pub fn from_json(json: &serde_json::Value) -> Option<Record> {
        json.as_object().map(Record::from_json_map)
    }

    fn from_json_map(map: &serde_json::Map<String, serde_json::Value>) -> Record {
        map.iter()
            .filter_map(|(key, value)| Value::from_json(value).map(|v| (key.clone(), v)))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Record::from_json(&json).ok_or_else(|| D::Error::custom("expected a JSON object"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_return_none_on_shape_mismatch() {
        let v = Value::from("x");
        assert!(v.as_record().is_none());
        assert!(v.as_sequence().is_none());
        assert_eq!(v.as_scalar(), Some(Scalar::String("x")));
        assert_eq!(Value::Int(3).as_float(), None);
    }

    #[test]
    fn test_as_sequence_covers_list_and_set() {
        assert_eq!(Value::list([Value::Int(1)]).as_sequence().map(<[_]>::len), Some(1));
        assert_eq!(Value::set([Value::Int(1)]).as_sequence().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_set_dedups_and_ignores_order() {
        let a = Value::set(["a".into(), "b".into(), "a".into()]);
        let b = Value::set(["b".into(), "a".into()]);
        assert_eq!(a.as_sequence().map(<[_]>::len), Some(2));
        assert_eq!(a, b);
        assert_ne!(
            Value::list(["a".into(), "b".into()]),
            Value::list(["b".into(), "a".into()])
        );
    }

    #[test]
    fn test_int_equals_integral_float() {
        assert_eq!(Value::Int(2), Value::Float(2.0));
        assert_ne!(Value::Int(2), Value::Float(2.5));
    }

    #[test]
    fn test_json_interop_drops_nulls() {
        let json = json!({"a": 1, "b": null, "c": [1.5, null, "x"], "d": {"e": true}});
        let record = Record::from_json(&json).unwrap();
        assert!(!record.contains_key("b"));
        assert_eq!(record.get("a"), Some(&Value::Int(1)));
        assert_eq!(
            record.get("c"),
            Some(&Value::list([Value::Float(1.5), "x".into()]))
        );
        assert_eq!(
            record.to_json(),
            json!({"a": 1, "c": [1.5, "x"], "d": {"e": true}})
        );
    }

    #[test]
    fn test_normalized_strips_zero_fields_but_keeps_empty_blocks() {
        let record = Record::from_json(&json!({
            "visual_id": "v1",
            "title": [],
            "label": "",
            "range": [{}],
            "nested": [{"width": "", "height": "10px"}]
        }))
        .unwrap();
        assert_eq!(
            record.normalized().to_json(),
            json!({"visual_id": "v1", "range": [{}], "nested": [{"height": "10px"}]})
        );
    }

    #[test]
    fn test_serde_round_trip_through_json_text() {
        let record = Record::new()
            .with("name", "x")
            .with("items", Value::list([Value::Int(1), Value::Int(2)]));
        let text = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialize_null_is_rejected() {
        assert!(serde_json::from_str::<Value>("null").is_err());
    }
}
