//! Scalar coercions between dynamic leaves and typed fields.
//!
//! | Typed field              | Dynamic leaf          | Expand accepts                 |
//! |--------------------------|-----------------------|--------------------------------|
//! | `Option<String>`         | string                | non-empty string               |
//! | `Option<E: StringEnum>`  | string                | non-empty string, verbatim     |
//! | `Option<i32>`            | int                   | int, truncated to 32 bits      |
//! | `Option<i64>`            | int                   | int                            |
//! | `Option<f64>` / `f64`    | float                 | float, or int widened          |
//! | `Option<bool>`           | bool                  | bool                           |
//! | `Option<DateTime<Utc>>`  | string                | RFC 3339 text                  |
//! | `Vec<String>`            | list or set           | non-empty string items         |
//!
//! Anything else reads as absent. On the flatten side a `None`, an empty
//! string or an empty collection omits the key entirely.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::value::{Record, Value};

/// A string-backed enumeration whose wire spelling passes through verbatim.
///
/// Membership in [`StringEnum::VALUES`] is checked by schema validation, not
/// here: an unrecognised spelling is kept as-is rather than dropped.
pub trait StringEnum: Sized {
    /// Legal wire spellings, in declaration order.
    const VALUES: &'static [&'static str];

    fn from_wire(value: &str) -> Self;

    fn as_str(&self) -> &str;
}

pub fn expand_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn expand_enum<E: StringEnum>(value: Option<&Value>) -> Option<E> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(E::from_wire)
}

/// Narrow to 32 bits with truncation. Range is enforced upstream by the
/// field's declared bounds.
pub fn expand_int32(value: Option<&Value>) -> Option<i32> {
    value.and_then(Value::as_int).map(|i| i as i32)
}

pub fn expand_int64(value: Option<&Value>) -> Option<i64> {
    value.and_then(Value::as_int)
}

pub fn expand_float64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Float(f) => Some(*f),
        Value::Int(i) => Some(*i as f64),
        _ => None,
    }
}

pub fn expand_bool(value: Option<&Value>) -> Option<bool> {
    value.and_then(Value::as_bool)
}

pub fn expand_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let text = value.and_then(Value::as_str).filter(|s| !s.is_empty())?;
    match DateTime::parse_from_rfc3339(text) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(err) => {
            tracing::debug!(value = %text, error = %err, "ignoring unparseable timestamp");
            None
        }
    }
}

/// RFC 3339 in UTC with a `Z` suffix; sub-second digits only when present.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn expand_strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_sequence)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn flatten_string_list(values: &[String]) -> Value {
    Value::list(values.iter().map(|s| Value::String(s.clone())))
}

pub fn flatten_string_set(values: &[String]) -> Value {
    Value::set(values.iter().map(|s| Value::String(s.clone())))
}

impl Record {
    pub fn string(&self, key: &str) -> Option<String> {
        expand_string(self.get(key))
    }

    pub fn enumeration<E: StringEnum>(&self, key: &str) -> Option<E> {
        expand_enum(self.get(key))
    }

    pub fn int32(&self, key: &str) -> Option<i32> {
        expand_int32(self.get(key))
    }

    pub fn int64(&self, key: &str) -> Option<i64> {
        expand_int64(self.get(key))
    }

    pub fn float64(&self, key: &str) -> Option<f64> {
        expand_float64(self.get(key))
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        expand_bool(self.get(key))
    }

    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        expand_timestamp(self.get(key))
    }

    pub fn strings(&self, key: &str) -> Vec<String> {
        expand_strings(self.get(key))
    }

    pub fn put_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(s) = value.filter(|s| !s.is_empty()) {
            self.insert(key, Value::String(s.to_string()));
        }
    }

    pub fn put_enum<E: StringEnum>(&mut self, key: &str, value: Option<&E>) {
        self.put_string(key, value.map(|v| v.as_str()));
    }

    pub fn put_int32(&mut self, key: &str, value: Option<i32>) {
        if let Some(i) = value {
            self.insert(key, Value::Int(i64::from(i)));
        }
    }

    pub fn put_int64(&mut self, key: &str, value: Option<i64>) {
        if let Some(i) = value {
            self.insert(key, Value::Int(i));
        }
    }

    pub fn put_float64(&mut self, key: &str, value: Option<f64>) {
        if let Some(f) = value {
            self.insert(key, Value::Float(f));
        }
    }

    /// Always written: backs a required field whose typed form has no
    /// "unset" state.
    pub fn put_required_float64(&mut self, key: &str, value: f64) {
        self.insert(key, Value::Float(value));
    }

    pub fn put_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(b) = value {
            self.insert(key, Value::Bool(b));
        }
    }

    pub fn put_timestamp(&mut self, key: &str, value: Option<&DateTime<Utc>>) {
        if let Some(t) = value {
            self.insert(key, Value::String(format_timestamp(t)));
        }
    }

    pub fn put_string_list(&mut self, key: &str, values: &[String]) {
        if !values.is_empty() {
            self.insert(key, flatten_string_list(values));
        }
    }

    pub fn put_string_set(&mut self, key: &str, values: &[String]) {
        if !values.is_empty() {
            self.insert(key, flatten_string_set(values));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, PartialEq)]
    enum Shade {
        Dark,
        Other(String),
    }

    impl StringEnum for Shade {
        const VALUES: &'static [&'static str] = &["DARK"];

        fn from_wire(value: &str) -> Self {
            match value {
                "DARK" => Shade::Dark,
                other => Shade::Other(other.to_string()),
            }
        }

        fn as_str(&self) -> &str {
            match self {
                Shade::Dark => "DARK",
                Shade::Other(s) => s,
            }
        }
    }

    #[test]
    fn test_empty_string_reads_as_absent() {
        let record = Record::new().with("a", "").with("b", "x");
        assert_eq!(record.string("a"), None);
        assert_eq!(record.string("b").as_deref(), Some("x"));
        assert_eq!(record.string("missing"), None);
    }

    #[test]
    fn test_enum_passes_unknown_spelling_through() {
        let record = Record::new().with("a", "DARK").with("b", "dark");
        assert_eq!(record.enumeration::<Shade>("a"), Some(Shade::Dark));
        assert_eq!(
            record.enumeration::<Shade>("b"),
            Some(Shade::Other("dark".to_string()))
        );

        let mut out = Record::new();
        out.put_enum("b", Some(&Shade::Other("dark".to_string())));
        assert_eq!(out.get("b"), Some(&Value::from("dark")));
    }

    #[test]
    fn test_int32_truncates() {
        let record = Record::new().with("n", Value::Int(i64::from(i32::MAX) + 1));
        assert_eq!(record.int32("n"), Some(i32::MIN));
    }

    #[test]
    fn test_float_widens_int_but_int_rejects_float() {
        let record = Record::new().with("f", Value::Int(3)).with("i", Value::Float(3.0));
        assert_eq!(record.float64("f"), Some(3.0));
        assert_eq!(record.int64("i"), None);
    }

    #[test]
    fn test_zero_numerics_are_preserved() {
        let record = Record::new().with("n", Value::Int(0));
        assert_eq!(record.int64("n"), Some(0));
        let mut out = Record::new();
        out.put_int64("n", Some(0));
        assert_eq!(out.get("n"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_timestamp_round_trip_and_bad_input() {
        let record = Record::new()
            .with("ok", "2024-03-01T12:30:00Z")
            .with("offset", "2024-03-01T14:30:00+02:00")
            .with("bad", "yesterday");
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(record.timestamp("ok"), Some(expected));
        assert_eq!(record.timestamp("offset"), Some(expected));
        assert_eq!(record.timestamp("bad"), None);

        let mut out = Record::new();
        out.put_timestamp("ok", Some(&expected));
        assert_eq!(out.get("ok"), Some(&Value::from("2024-03-01T12:30:00Z")));
    }

    #[test]
    fn test_string_collections_keep_declared_form() {
        let values = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let mut out = Record::new();
        out.put_string_list("list", &values);
        out.put_string_set("set", &values);
        out.put_string_list("empty", &[]);
        assert!(matches!(out.get("list"), Some(Value::List(items)) if items.len() == 3));
        assert!(matches!(out.get("set"), Some(Value::Set(items)) if items.len() == 2));
        assert!(!out.contains_key("empty"));
    }

    #[test]
    fn test_strings_skip_non_string_items() {
        let record = Record::new().with(
            "items",
            Value::list(["a".into(), Value::Int(1), "".into(), "b".into()]),
        );
        assert_eq!(record.strings("items"), vec!["a".to_string(), "b".to_string()]);
    }
}
