//! Serde helpers for lenient option objects

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()` instead of failing
///
/// Pair with `#[serde(default)]` so that both a missing field and an explicit
/// `null` end up as the empty value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
