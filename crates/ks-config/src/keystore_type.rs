use crate::{DEFAULT_KEYSTORE_TYPE, DEFAULT_KEYSTORE_TYPE_ENV};

use serde::{Deserialize, Deserializer};

/// Platform default key-store type.
///
/// Resolved on every call from `KS_DEFAULT_KEYSTORE_TYPE`, falling back to
/// `pkcs12` when the variable is unset or empty.
pub fn default_keystore_type() -> String {
    match std::env::var(DEFAULT_KEYSTORE_TYPE_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => String::from(DEFAULT_KEYSTORE_TYPE),
    }
}

/// Deserialize a key-store type, mapping `null` to the platform default.
pub(crate) fn deserialize_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(default_keystore_type))
}
