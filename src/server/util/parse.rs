use serde::{de, Deserialize, Deserializer};

/// Deserializes an identifier stored either as a JSON string or as a JSON number.
///
/// Discord snowflakes are usually written as strings, but hand-edited files
/// sometimes carry them as numbers.
///
/// # Returns
/// - `Ok(String)` - The identifier as a string
/// - `Err(D::Error)` - Value is neither a string nor an integer
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Unsigned(u64),
        Signed(i64),
    }

    match StringOrNumber::deserialize(deserializer) {
        Ok(StringOrNumber::String(value)) => Ok(value),
        Ok(StringOrNumber::Unsigned(value)) => Ok(value.to_string()),
        Ok(StringOrNumber::Signed(value)) => Ok(value.to_string()),
        Err(_) => Err(de::Error::custom("expected a string or integer id")),
    }
}
