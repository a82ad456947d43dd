/*
[INPUT]:  Loosely-typed JSON field values
[OUTPUT]: Lenient deserialization helpers shared by the type modules
[POS]:    Data layer - serde support
[UPDATE]: When new lenient field handling is needed
*/

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string or a number where the API is inconsistent about key
/// types; anything else degrades to `None` instead of failing the row.
pub(crate) fn deserialize_opt_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}
