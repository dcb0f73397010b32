//! Serde helper for numeric fields the API sometimes sends as `null`.

use serde::{Deserialize, Deserializer};

/// `#[serde(deserialize_with = "null_as_default")]`: reads `null` as the type's default
/// (zero for decimals) instead of failing the whole response.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
