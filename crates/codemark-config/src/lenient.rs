//! Forgiving field deserializers.
//!
//! Settings come from hand-written objects. A value of the wrong type falls
//! back to the default instead of failing the whole config.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `true` only for a literal JSON `true`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// A nested settings object; anything but an object gives the default.
pub(crate) fn section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A non-negative integer, if `value` holds one.
pub(crate) fn count(value: Option<&Value>) -> Option<usize> {
    value
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}
