//! Lenient field decoders for rows coming out of the data store.

use serde::{Deserialize, Deserializer};

/// Treat `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a free-text column that some rows store as a number (grades mostly).
/// Blank strings count as absent.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Text>::deserialize(deserializer)? {
        Some(Text::Str(s)) if s.trim().is_empty() => None,
        Some(Text::Str(s)) => Some(s),
        Some(Text::Int(n)) => Some(n.to_string()),
        Some(Text::Float(n)) => Some(n.to_string()),
        None => None,
    })
}
