use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` the same way as a missing key
///
/// Pair with `#[serde(default)]` for fields the backend may omit or null out.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
