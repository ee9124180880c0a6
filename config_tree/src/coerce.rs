//! Scalar coercion from raw strings to typed JSON values.
//!
//! Integer parsing accepts the literal forms commonly found in environment
//! variables and key-value stores: an optional sign, `0x`/`0o`/`0b` base
//! prefixes, a bare leading `0` for octal, `_` digit separators (also
//! directly after a prefix, as in `0x_1F`), and a trailing zero-only fraction
//! (`"8080.0"`). Float parsing accepts `_` between digits. Boolean parsing accepts
//! `1 t T TRUE true True` and `0 f F FALSE false False`.

use serde_json::{Number, Value};
use thiserror::Error;

use crate::DataType;

/// Why a raw value could not be coerced.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum CoercionReason {
    /// The value was empty after trimming.
    #[error("value is empty")]
    Empty,
    /// The value contained characters that are not valid digits.
    #[error("invalid digit")]
    InvalidDigit,
    /// The value does not fit in a signed 64-bit integer.
    #[error("out of range")]
    OutOfRange,
    /// The value is not a valid floating point literal.
    #[error("invalid float literal")]
    InvalidFloat,
    /// The value parsed to NaN or infinity, which JSON cannot represent.
    #[error("not a finite number")]
    NotFinite,
    /// The value is not one of the recognised boolean spellings.
    #[error("not a boolean")]
    NotBoolean,
}

/// A raw value that failed to coerce to its declared type.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("cannot coerce {raw:?} to {data_type}: {reason}")]
pub struct CoercionError {
    raw: String,
    data_type: DataType,
    reason: CoercionReason,
}

impl CoercionError {
    /// Raw input that failed to coerce.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Declared type of the value.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Reason the coercion failed.
    #[must_use]
    pub const fn reason(&self) -> CoercionReason {
        self.reason
    }
}

/// Coerce `raw` according to `data_type`.
///
/// Integer, float and boolean inputs are trimmed of surrounding whitespace
/// before parsing, so `" 42 "` coerces to `42`. Strings are kept verbatim.
///
/// # Errors
///
/// Returns a [`CoercionError`] when `raw` is not a valid literal for the
/// declared type. [`DataType::String`] never fails.
///
/// # Examples
///
/// ```rust
/// use config_tree::{DataType, coerce};
/// use serde_json::json;
///
/// assert_eq!(coerce("0x1F", DataType::Int)?, json!(31));
/// assert_eq!(coerce("T", DataType::Bool)?, json!(true));
/// assert!(coerce("maybe", DataType::Bool).is_err());
/// # Ok::<_, config_tree::CoercionError>(())
/// ```
pub fn coerce(raw: &str, data_type: DataType) -> Result<Value, CoercionError> {
    let parsed = match data_type {
        DataType::Int => parse_int(raw).map(Value::from),
        DataType::Float => parse_float(raw).map(Value::Number),
        DataType::Bool => parse_bool(raw).map(Value::Bool),
        DataType::String => Ok(Value::String(raw.to_owned())),
    };
    parsed.map_err(|reason| CoercionError {
        raw: raw.to_owned(),
        data_type,
        reason,
    })
}

/// Coerce `raw`, falling back to the zero value of `data_type` on failure.
///
/// Failures are reported as `tracing` warnings rather than errors.
#[must_use]
pub fn coerce_or_zero(raw: &str, data_type: DataType) -> Value {
    coerce(raw, data_type).unwrap_or_else(|err| zero_value_for(None, &err))
}

/// Coerce the value stored under the dotted `key`, warning with the key when
/// falling back to the zero value.
pub(crate) fn coerce_key_or_zero(key: &str, raw: &str, data_type: DataType) -> Value {
    coerce(raw, data_type).unwrap_or_else(|err| zero_value_for(Some(key), &err))
}

fn zero_value_for(key: Option<&str>, err: &CoercionError) -> Value {
    tracing::warn!(
        key = key.unwrap_or_default(),
        data_type = %err.data_type,
        error = %err,
        "invalid configuration value; using zero value"
    );
    err.data_type.zero_value()
}

fn parse_int(raw: &str) -> Result<i64, CoercionReason> {
    let literal = trim_zero_decimal(raw.trim());
    let (negative, unsigned) = literal.strip_prefix('-').map_or_else(
        || (false, literal.strip_prefix('+').unwrap_or(literal)),
        |rest| (true, rest),
    );
    let (radix, prefixed, digits) = split_radix(unsigned);
    let cleaned = strip_separators(digits, prefixed)?;
    if !cleaned.chars().all(|c| c.is_digit(radix)) {
        return Err(CoercionReason::InvalidDigit);
    }
    let magnitude =
        u64::from_str_radix(&cleaned, radix).map_err(|_| CoercionReason::OutOfRange)?;
    let signed = if negative {
        0_i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    signed.ok_or(CoercionReason::OutOfRange)
}

/// Drop a fractional part made only of zeros, so `"3.00"` parses as `3`.
fn trim_zero_decimal(literal: &str) -> &str {
    let without_zeros = literal.trim_end_matches('0');
    if without_zeros.len() == literal.len() {
        return literal;
    }
    without_zeros.strip_suffix('.').unwrap_or(literal)
}

/// Split off a base prefix, reporting whether one was present.
fn split_radix(unsigned: &str) -> (u32, bool, &str) {
    const PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    PREFIXES
        .iter()
        .find_map(|(prefix, radix)| {
            unsigned
                .strip_prefix(prefix)
                .map(|rest| (*radix, true, rest))
        })
        .or_else(|| {
            unsigned
                .strip_prefix('0')
                .filter(|rest| !rest.is_empty())
                .map(|rest| (8, true, rest))
        })
        .unwrap_or((10, false, unsigned))
}

/// Remove `_` separators from integer digits.
///
/// A separator may sit between two digits, or directly after a base prefix
/// when `prefixed` is set (`0x_1F`, `0_7`).
fn strip_separators(digits: &str, prefixed: bool) -> Result<String, CoercionReason> {
    if digits.is_empty() {
        return Err(CoercionReason::Empty);
    }
    let body = if prefixed {
        digits.strip_prefix('_').unwrap_or(digits)
    } else {
        digits
    };
    if body.is_empty() || !separators_between_digits(body, |c| c.is_ascii_alphanumeric()) {
        return Err(CoercionReason::InvalidDigit);
    }
    Ok(body.chars().filter(|c| *c != '_').collect())
}

/// Every `_` in `literal` has a character accepted by `is_digit` on both sides.
fn separators_between_digits(literal: &str, is_digit: impl Fn(u8) -> bool) -> bool {
    !literal.starts_with('_')
        && !literal.ends_with('_')
        && literal.as_bytes().windows(3).all(|window| match window {
            [before, b'_', after] => is_digit(*before) && is_digit(*after),
            _ => true,
        })
}

fn parse_float(raw: &str) -> Result<Number, CoercionReason> {
    let literal = raw.trim();
    if literal.is_empty() {
        return Err(CoercionReason::Empty);
    }
    let value: f64 = if literal.contains('_') {
        if !separators_between_digits(literal, |c| c.is_ascii_digit()) {
            return Err(CoercionReason::InvalidFloat);
        }
        literal.replace('_', "").parse()
    } else {
        literal.parse::<f64>()
    }
    .map_err(|_| CoercionReason::InvalidFloat)?;
    Number::from_f64(value).ok_or(CoercionReason::NotFinite)
}

fn parse_bool(raw: &str) -> Result<bool, CoercionReason> {
    match raw.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        "" => Err(CoercionReason::Empty),
        _ => Err(CoercionReason::NotBoolean),
    }
}
