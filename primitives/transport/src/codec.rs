//! Structured encode/decode used by generated bindings.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Result, TransportError};

/// Encode a structured parameter value to its JSON text.
pub fn encode_param<T: Serialize + ?Sized>(param: &str, value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|source| TransportError::Encode { param: param.to_string(), source })
}

/// Decode a raw response body into `T`.
pub fn decode<T: DeserializeOwned>(raw: &[u8]) -> Result<T> { Ok(serde_json::from_slice(raw)?) }
