use crate::{ConfigError, ConfigErrorResult, buffer_codec, default_keystore_type, keystore_type};

use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options describing how a JWT key store should be loaded.
///
/// The type defaults to the platform key-store type (see
/// [`default_keystore_type`]). Besides the store-level password, individual
/// keys can carry their own password through
/// [`put_password_protection`](Self::put_password_protection).
///
/// Nothing here is validated: `path` and `value` may both be set and `type`
/// is not checked against known formats. The loader consuming these options
/// decides what is acceptable.
///
/// ```
/// use ks_config::KeyStoreOptions;
///
/// let mut options = KeyStoreOptions::new();
/// options
///     .set_path("keys/jwt.p12")
///     .set_password("changeit")
///     .put_password_protection("signingKey", "secret1");
///
/// assert_eq!(options.key_password("signingKey"), Some("secret1"));
/// assert_eq!(options.key_password("other"), Some("changeit"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStoreOptions {
    #[serde(
        rename = "type",
        default = "default_keystore_type",
        deserialize_with = "keystore_type::deserialize_or_default"
    )]
    key_store_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "buffer_codec")]
    value: Option<Bytes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    password_protection: Option<HashMap<String, String>>,
}

impl Default for KeyStoreOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStoreOptions {
    /// Options with the platform default type and nothing else set.
    pub fn new() -> Self {
        Self {
            key_store_type: default_keystore_type(),
            password: None,
            path: None,
            value: None,
            password_protection: None,
        }
    }

    /// Populate options from a structured JSON document.
    ///
    /// Recognized members are `type`, `password`, `path`, `value` (base64) and
    /// `passwordProtection`. Members that are unknown, `null` or of the wrong
    /// JSON type are skipped, as are non-string alias passwords; everything
    /// else in the document is kept. A missing type stays at the platform
    /// default.
    ///
    /// Fails only when the document is not an object or `value` is not valid
    /// base64.
    #[track_caller]
    pub fn from_json(json: &Value) -> ConfigErrorResult<Self> {
        let Some(members) = json.as_object() else {
            return Err(ConfigError::document(format!(
                "expected a JSON object, got {}",
                json_type_name(json)
            )));
        };

        let mut options = Self::new();

        for (name, member) in members {
            match (name.as_str(), member) {
                (_, Value::Null) => {}
                ("type", Value::String(key_store_type)) => {
                    options.set_type(key_store_type.as_str());
                }
                ("password", Value::String(password)) => {
                    options.set_password(password.as_str());
                }
                ("path", Value::String(path)) => {
                    options.set_path(path.as_str());
                }
                ("value", Value::String(encoded)) => match buffer_codec::decode(encoded) {
                    Ok(bytes) => {
                        options.set_value(bytes);
                    }
                    Err(e) => {
                        return Err(ConfigError::document(format!("invalid base64 value: {e}")));
                    }
                },
                ("passwordProtection", Value::Object(entries)) => {
                    let mut protection = HashMap::with_capacity(entries.len());
                    for (alias, password) in entries {
                        match password {
                            Value::String(password) => {
                                protection.insert(alias.clone(), password.clone());
                            }
                            other => warn!(
                                "Skipping password of alias '{}': expected a string, got {}",
                                alias,
                                json_type_name(other)
                            ),
                        }
                    }
                    options.set_password_protection(protection);
                }
                ("type" | "password" | "path" | "value" | "passwordProtection", other) => warn!(
                    "Skipping key-store member '{}': unexpected {}",
                    name,
                    json_type_name(other)
                ),
                _ => {}
            }
        }

        Ok(options)
    }

    /// Encode the options as a structured JSON document. Unset members are
    /// omitted.
    #[track_caller]
    pub fn to_json(&self) -> ConfigErrorResult<Value> {
        match serde_json::to_value(self) {
            Ok(document) => Ok(document),
            Err(e) => Err(ConfigError::from_json(e)),
        }
    }

    pub fn key_store_type(&self) -> &str {
        &self.key_store_type
    }

    pub fn set_type<S: Into<String>>(&mut self, key_store_type: S) -> &mut Self {
        self.key_store_type = key_store_type.into();
        self
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password<S: Into<String>>(&mut self, password: S) -> &mut Self {
        self.password = Some(password.into());
        self
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path<S: Into<String>>(&mut self, path: S) -> &mut Self {
        self.path = Some(path.into());
        self
    }

    /// In-memory key-store content, an alternative to [`path`](Self::path).
    pub fn value(&self) -> Option<&Bytes> {
        self.value.as_ref()
    }

    pub fn set_value<B: Into<Bytes>>(&mut self, value: B) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    /// Per-alias passwords, or `None` when none were configured.
    pub fn password_protection(&self) -> Option<&HashMap<String, String>> {
        self.password_protection.as_ref()
    }

    /// Replace the whole alias/password mapping. Passing `None` clears it.
    pub fn set_password_protection<M>(&mut self, password_protection: M) -> &mut Self
    where
        M: Into<Option<HashMap<String, String>>>,
    {
        self.password_protection = password_protection.into();
        self
    }

    /// Set the password of a single alias, overwriting any previous one.
    pub fn put_password_protection<A, P>(&mut self, alias: A, password: P) -> &mut Self
    where
        A: Into<String>,
        P: Into<String>,
    {
        self.password_protection
            .get_or_insert_with(HashMap::new)
            .insert(alias.into(), password.into());
        self
    }

    /// Password a loader should use for `alias`: the alias override when
    /// present, otherwise the store password.
    pub fn key_password(&self, alias: &str) -> Option<&str> {
        self.password_protection
            .as_ref()
            .and_then(|protection| protection.get(alias))
            .map(String::as_str)
            .or(self.password.as_deref())
    }
}

// Secrets never reach log output.
impl fmt::Debug for KeyStoreOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let aliases = self.password_protection.as_ref().map(|protection| {
            let mut aliases: Vec<&str> = protection.keys().map(String::as_str).collect();
            aliases.sort_unstable();
            aliases
        });

        f.debug_struct("KeyStoreOptions")
            .field("type", &self.key_store_type)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("path", &self.path)
            .field("value", &self.value.as_ref().map(|v| format!("<{} bytes>", v.len())))
            .field("password_protection", &aliases)
            .finish()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
