//! Serde helpers for the account API's loosely typed wire values.
//!
//! The legacy API emits numeric fields inconsistently, sometimes as JSON
//! numbers and sometimes as decimal strings. These deserializers accept
//! both spellings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrString {
    Num(u64),
    Str(String),
}

/// Deserializes a `u32` from a JSON number or a decimal string.
pub(crate) fn u32_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => u32::try_from(n).map_err(serde::de::Error::custom),
        NumOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Deserializes an optional `u32`; `null` and empty strings mean absent.
pub(crate) fn opt_u32_lenient<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumOrString::Num(n)) => u32::try_from(n).map(Some).map_err(serde::de::Error::custom),
        Some(NumOrString::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(NumOrString::Str(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Deserializes an opaque identifier from a JSON string or number.
pub(crate) fn string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => Ok(n.to_string()),
        NumOrString::Str(s) => Ok(s),
    }
}
