//! Flat configuration records and their resolution into a mapping.

use serde::{Deserialize, Serialize};

use crate::{DataType, Mapping, TreeError, TreeResult, build_map, build_map_lenient, merge_many_deep, split_key};

/// One configuration record: a dotted key, its raw value and declared type.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Dotted key addressing the value, such as `db.host`.
    pub key: String,
    /// Raw string value before coercion.
    pub value: String,
    /// Declared type used to coerce `value`.
    #[serde(default, rename = "type", alias = "data_type")]
    pub data_type: DataType,
}

impl ConfigEntry {
    /// Construct a record.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>, data_type: DataType) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            data_type,
        }
    }
}

/// How coercion failures are handled while resolving records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CoercionPolicy {
    /// Store the zero value of the declared type and log a warning.
    #[default]
    Lenient,
    /// Collect every failure and return them as an error.
    Strict,
}

/// Build one mapping per record and deep-merge them in order.
///
/// Later records win where keys collide. Under [`CoercionPolicy::Strict`]
/// every record is still visited so all failures are reported together.
///
/// # Errors
///
/// Under [`CoercionPolicy::Strict`], returns [`TreeError::Coercion`] for a
/// single failure or [`TreeError::Aggregate`] when several records fail.
pub fn resolve_entries(
    entries: &[ConfigEntry],
    separator: &str,
    policy: CoercionPolicy,
) -> TreeResult<Mapping> {
    let mut layers = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();
    for entry in entries {
        let path = split_key(&entry.key, separator);
        let built = match policy {
            CoercionPolicy::Lenient => build_map_lenient(&path, &entry.value, entry.data_type),
            CoercionPolicy::Strict => build_map(&path, &entry.value, entry.data_type),
        };
        match built {
            Ok(layer) => layers.push(layer),
            Err(err) => errors.push(err),
        }
    }
    if let Some(err) = TreeError::from_failures(errors) {
        return Err(err);
    }
    tracing::debug!(entries = layers.len(), "resolved configuration entries");
    Ok(merge_many_deep(layers))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::{CoercionPolicy, ConfigEntry, resolve_entries};
    use crate::{DataType, TreeError};

    fn entries() -> Vec<ConfigEntry> {
        vec![
            ConfigEntry::new("db.host", "localhost", DataType::String),
            ConfigEntry::new("db.port", "5432", DataType::Int),
            ConfigEntry::new("db.port", "6543", DataType::Int),
            ConfigEntry::new("debug", "true", DataType::Bool),
        ]
    }

    #[rstest]
    #[case(CoercionPolicy::Lenient)]
    #[case(CoercionPolicy::Strict)]
    fn later_entries_win(#[case] policy: CoercionPolicy) {
        let tree = resolve_entries(&entries(), ".", policy).expect("entries resolve");
        assert_eq!(
            Value::Object(tree),
            json!({"db": {"host": "localhost", "port": 6543}, "debug": true})
        );
    }

    #[test]
    fn lenient_policy_stores_zero_values() {
        let bad = [ConfigEntry::new("retries", "many", DataType::Int)];
        let tree = resolve_entries(&bad, ".", CoercionPolicy::Lenient).expect("lenient resolves");
        assert_eq!(Value::Object(tree), json!({"retries": 0}));
    }

    #[test]
    fn strict_policy_reports_a_single_failure_directly() {
        let bad = [ConfigEntry::new("retries", "many", DataType::Int)];
        let err = resolve_entries(&bad, ".", CoercionPolicy::Strict).expect_err("strict fails");
        assert!(matches!(err.as_ref(), TreeError::Coercion { key, .. } if key == "retries"));
    }

    #[test]
    fn strict_policy_aggregates_every_failure() {
        let bad = [
            ConfigEntry::new("retries", "many", DataType::Int),
            ConfigEntry::new("ok", "fine", DataType::String),
            ConfigEntry::new("ratio", "half", DataType::Float),
        ];
        let err = resolve_entries(&bad, ".", CoercionPolicy::Strict).expect_err("strict fails");
        match err.as_ref() {
            TreeError::Aggregate(agg) => assert_eq!(agg.len(), 2),
            other => panic!("expected aggregate, got {other:?}"),
        }
    }

    #[test]
    fn deserialises_records_with_type_names() -> serde_json::Result<()> {
        let parsed: Vec<ConfigEntry> = serde_json::from_value(json!([
            {"key": "a.b", "value": "1", "type": "int"},
            {"key": "c", "value": "x"},
        ]))?;
        assert_eq!(parsed[0].data_type, DataType::Int);
        assert_eq!(parsed[1].data_type, DataType::String);
        Ok(())
    }
}
