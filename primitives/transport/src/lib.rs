#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `quill-transport` — Runtime boundary for generated bindings
//!
//! Code emitted by `quill-codegen` depends on this crate and nothing else at
//! runtime. It does not send anything over the wire itself; it only fixes the
//! shape of the seam that a real transport plugs into.
//!
//! ## Core Concepts
//!
//! ### `Dispatch` Trait
//! The request-sending capability. A generated binding builds a [`Params`]
//! set, hands it to [`Dispatch::dispatch`] together with the method's schema
//! name, and decodes the raw bytes that come back. Retries, authentication and
//! the HTTP client all live behind this trait.
//!
//! ### `Outcome`
//! What every generated binding returns: a value paired with the error that
//! produced it, if any. On failure the value is the type's zero value
//! (`0`, `0.0`, `false`, empty string, `None`, empty `Vec`), so callers never
//! observe a panic originating from transport or decoding problems.
//!
//! ### `codec`
//! The structured encode/decode collaborator, backed by `serde_json`.
//!
//! ## Example
//! ```no_run
//! use transport::{Dispatch, Params, TransportError};
//!
//! async fn ping(client: &dyn Dispatch) -> Result<Vec<u8>, TransportError> {
//!     let mut params = Params::new();
//!     params.add("chat_id", 42.to_string());
//!     client.dispatch("sendChatAction", params, None).await
//! }
//! ```

pub mod codec;
pub mod outcome;
pub mod params;

use std::sync::Arc;

use async_trait::async_trait;
pub use outcome::Outcome;
pub use params::Params;

/// Type alias for structured error handling in transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Canonical error type seen by callers of generated bindings.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The dispatcher failed to deliver the request or received a failure reply.
    #[error("dispatch of {method} failed: {message}")]
    Dispatch {
        /// Schema name of the method being dispatched.
        method: String,
        /// Backend-specific description of the failure.
        message: String,
    },

    /// A request parameter could not be encoded.
    #[error("failed to encode {param}: {source}")]
    Encode {
        /// Schema name of the parameter.
        param: String,
        /// Underlying encoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The raw response could not be decoded into the declared return type.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    /// Build a [`TransportError::Dispatch`] for `method`.
    pub fn dispatch(method: impl Into<String>, message: impl Into<String>) -> Self {
        TransportError::Dispatch { method: method.into(), message: message.into() }
    }
}

/// The request-sending capability invoked by generated bindings.
///
/// `payload` carries binary upload data; the generated bindings always pass
/// `None` and leave uploads to a separate pathway.
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Send `method` with `params` and return the raw response body.
    async fn dispatch(
        &self,
        method: &str,
        params: Params,
        payload: Option<Vec<u8>>,
    ) -> Result<Vec<u8>>;
}

#[async_trait]
impl<T: Dispatch + ?Sized> Dispatch for Arc<T> {
    async fn dispatch(
        &self,
        method: &str,
        params: Params,
        payload: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        (**self).dispatch(method, params, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("not-json")
            .expect_err("Expected JSON parsing to fail");
        let terr: TransportError = err.into();

        match terr {
            TransportError::Decode(inner) => assert!(!inner.to_string().is_empty()),
            _ => panic!("expected Decode error variant"),
        }
    }

    #[test]
    fn test_dispatch_error_message() {
        let err = TransportError::dispatch("getMe", "connection refused");
        assert_eq!(err.to_string(), "dispatch of getMe failed: connection refused");
    }
}
