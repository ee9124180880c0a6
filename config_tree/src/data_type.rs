//! Declared scalar types for raw configuration values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminator selecting how a raw string value is coerced.
///
/// Serialised names are lowercase (`int`, `float`, `bool`, `string`) so
/// schema records can declare the type inline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum DataType {
    /// Signed 64-bit integer.
    #[serde(alias = "integer")]
    Int,
    /// 64-bit floating point number.
    Float,
    /// Boolean flag.
    #[serde(alias = "boolean")]
    Bool,
    /// Raw string stored unchanged.
    #[default]
    String,
}

impl DataType {
    /// Zero value stored when lenient coercion fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_tree::DataType;
    /// use serde_json::json;
    ///
    /// assert_eq!(DataType::Int.zero_value(), json!(0));
    /// assert_eq!(DataType::Bool.zero_value(), json!(false));
    /// ```
    #[must_use]
    pub fn zero_value(self) -> Value {
        match self {
            Self::Int => Value::from(0_i64),
            Self::Float => Value::from(0.0_f64),
            Self::Bool => Value::Bool(false),
            Self::String => Value::String(String::new()),
        }
    }

    /// Lowercase name used in serialised schemas.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown data type '{0}'")]
pub struct UnknownDataType(String);

impl FromStr for DataType {
    type Err = UnknownDataType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "bool" | "boolean" => Ok(Self::Bool),
            "string" => Ok(Self::String),
            _ => Err(UnknownDataType(s.to_owned())),
        }
    }
}
