//! Format-specific parsing of configuration documents.

use std::sync::Arc;

use camino::Utf8Path;
use serde_json::Value;

use super::Source;
use crate::{Mapping, TreeError, TreeResult, TreeResultExt};

/// Read `name` from `source` and parse it into a mapping.
///
/// # Errors
///
/// Returns the source's read error, or any error from [`parse_mapping`].
pub fn load_mapping<S: Source + ?Sized>(source: &S, name: &str) -> TreeResult<Mapping> {
    let data = source.read_file(name)?;
    parse_mapping(name, &data)
}

/// Parse `data` according to the extension of `name`.
///
/// JSON is always available; TOML, YAML and JSON5 require the `toml`,
/// `yaml` and `json5` features respectively.
///
/// # Errors
///
/// Returns [`TreeError::UnsupportedFormat`] for unknown or disabled formats
/// and [`TreeError::Parse`] when the contents are malformed or the top-level
/// value is not a mapping.
///
/// # Examples
///
/// ```rust
/// use config_tree::source::parse_mapping;
///
/// let tree = parse_mapping("app.json", br#"{"db": {"host": "localhost"}}"#)?;
/// assert!(tree.contains_key("db"));
/// assert!(parse_mapping("app.json", b"[1, 2]").is_err());
/// # Ok::<_, std::sync::Arc<config_tree::TreeError>>(())
/// ```
pub fn parse_mapping(name: &str, data: &[u8]) -> TreeResult<Mapping> {
    let ext = Utf8Path::new(name)
        .extension()
        .map(str::to_ascii_lowercase);
    let value: Value = match ext.as_deref() {
        Some("json") => serde_json::from_slice(data).parse_context(name)?,
        #[cfg(feature = "toml")]
        Some("toml") => {
            let table: toml::Table = toml::from_str(as_text(name, data)?).parse_context(name)?;
            toml_to_json(toml::Value::Table(table))
        }
        #[cfg(feature = "yaml")]
        Some("yaml" | "yml") => {
            serde_saphyr::from_str(as_text(name, data)?).parse_context(name)?
        }
        #[cfg(feature = "json5")]
        Some("json5") => json5::from_str(as_text(name, data)?).parse_context(name)?,
        _ => {
            return Err(Arc::new(TreeError::UnsupportedFormat {
                name: name.to_owned(),
            }));
        }
    };
    match value {
        Value::Object(map) => Ok(map),
        _ => Err("top-level value must be a mapping").parse_context(name),
    }
}

#[cfg(any(feature = "toml", feature = "yaml", feature = "json5"))]
fn as_text<'a>(name: &str, data: &'a [u8]) -> TreeResult<&'a str> {
    std::str::from_utf8(data).parse_context(name)
}

/// Convert a TOML value, rendering datetimes in their TOML text form.
#[cfg(feature = "toml")]
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(text) => Value::String(text),
        toml::Value::Integer(int) => Value::from(int),
        toml::Value::Float(float) => {
            serde_json::Number::from_f64(float).map_or(Value::Null, Value::Number)
        }
        toml::Value::Boolean(flag) => Value::Bool(flag),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, item)| (key, toml_to_json(item)))
                .collect(),
        ),
    }
}
