//! Base64 field codec for in-memory key-store content.
//!
//! Encodes URL-safe without padding. Decoding also accepts the standard
//! alphabet, padded or not.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serializer};

pub(crate) fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

pub(crate) fn decode(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let encoded = encoded.trim();
    let padded = encoded.ends_with('=');
    let url_safe = encoded.contains('-') || encoded.contains('_');

    match (url_safe, padded) {
        (true, true) => URL_SAFE.decode(encoded),
        (true, false) => URL_SAFE_NO_PAD.decode(encoded),
        (false, true) => STANDARD.decode(encoded),
        (false, false) => STANDARD_NO_PAD.decode(encoded),
    }
}

pub(crate) fn serialize<S>(value: &Option<Bytes>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(bytes) => serializer.serialize_str(&encode(bytes)),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Bytes>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = Option::<String>::deserialize(deserializer)?;
    encoded
        .map(|s| {
            decode(&s)
                .map(Bytes::from)
                .map_err(|e| serde::de::Error::custom(format!("invalid base64 value: {e}")))
        })
        .transpose()
}
