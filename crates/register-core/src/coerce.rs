//! Loose scalar coercion for settings input.
//!
//! Admin UIs submit numeric settings as JSON numbers or as strings depending
//! on the form control, and older stored records carry either. These wrapper
//! types accept both on the way in and always serialize as the canonical
//! type, so a write normalizes the stored record.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Coerce a JSON value to an integer.
///
/// Accepts integers, floats (truncated), numeric strings, and booleans
/// (1/0). Returns `None` for anything else.
pub fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| u as i64))
            .or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// Coerce a JSON value to a boolean.
///
/// Accepts booleans, numbers (`!= 0`), and strings, where `"false"`, `"0"`
/// and `""` map to false and any other string to true. Returns `None` for
/// arrays, objects, and null.
pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().map(|f| f != 0.0).unwrap_or(true)),
        Value::String(s) => {
            let s = s.trim();
            Some(!(s.is_empty() || s.eq_ignore_ascii_case("false") || s == "0"))
        }
        _ => None,
    }
}

/// Integer that deserializes from a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LooseInt(pub i64);

impl LooseInt {
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for LooseInt {
    fn from(v: i64) -> Self {
        LooseInt(v)
    }
}

impl<'de> Deserialize<'de> for LooseInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        coerce_i64(&value)
            .map(LooseInt)
            .ok_or_else(|| de::Error::custom(format!("expected an integer, got {value}")))
    }
}

impl Serialize for LooseInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

/// Boolean that deserializes from a JSON bool, number, or string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LooseBool(pub bool);

impl LooseBool {
    pub fn into_inner(self) -> bool {
        self.0
    }
}

impl From<bool> for LooseBool {
    fn from(v: bool) -> Self {
        LooseBool(v)
    }
}

impl<'de> Deserialize<'de> for LooseBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        coerce_bool(&value)
            .map(LooseBool)
            .ok_or_else(|| de::Error::custom(format!("expected a boolean, got {value}")))
    }
}

impl Serialize for LooseBool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.0)
    }
}
