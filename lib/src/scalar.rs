//! Typed field access on generic JSON objects.

use crate::models::errors::FieldError;
use crate::timestamp;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

pub fn read_string<'a>(key: &str, data: &'a Object) -> Result<&'a str, FieldError> {
    match data.get(key) {
        None => Err(FieldError::KeyNotFound(key.to_string())),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(FieldError::WrongType(key.to_string())),
    }
}

/// Read a decimal integer stored as a JSON string.
///
/// `bits` limits the accepted range to a signed integer of that width;
/// `0` or anything above 64 means 64.
pub fn read_integer(key: &str, data: &Object, bits: u32) -> Result<i64, FieldError> {
    let raw = read_string(key, data)?;
    let not_an_integer = || FieldError::NotAnInteger {
        field: key.to_string(),
        raw: raw.to_string(),
    };

    let val: i64 = raw.parse().map_err(|_| not_an_integer())?;

    if (1..64).contains(&bits) {
        let max = (1i64 << (bits - 1)) - 1;
        let min = -(1i64 << (bits - 1));
        if val < min || val > max {
            return Err(not_an_integer());
        }
    }

    Ok(val)
}

pub fn read_timestamp(key: &str, data: &Object) -> Result<DateTime<Utc>, FieldError> {
    let val = read_integer(key, data, 64)?;
    timestamp::decode(val).ok_or_else(|| FieldError::OutOfRange {
        field: key.to_string(),
        raw: val,
    })
}

/// Like [`read_timestamp`], but an absent key is not an error
pub fn read_optional_timestamp(
    key: &str,
    data: &Object,
) -> Result<Option<DateTime<Utc>>, FieldError> {
    match read_timestamp(key, data) {
        Ok(ts) => Ok(Some(ts)),
        Err(FieldError::KeyNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
