//! Result type returned by generated bindings.

use crate::TransportError;

/// A binding's value paired with the error that produced it, if any.
///
/// On failure `value` holds the zero value of the binding's return type.
#[derive(Debug)]
#[must_use]
pub struct Outcome<T> {
    /// Decoded value, or the zero value on failure.
    pub value: T,
    /// Error raised while encoding, dispatching or decoding.
    pub error: Option<TransportError>,
}

impl<T> Outcome<T> {
    /// A successful call.
    pub fn success(value: T) -> Self { Self { value, error: None } }

    /// A failed call carrying `fallback` as its value.
    pub fn failure(fallback: T, error: TransportError) -> Self {
        Self { value: fallback, error: Some(error) }
    }

    /// Whether the call succeeded.
    pub fn is_ok(&self) -> bool { self.error.is_none() }

    /// Split into value and error.
    pub fn into_parts(self) -> (T, Option<TransportError>) { (self.value, self.error) }

    /// Discard the fallback value and convert into a `Result`.
    pub fn into_result(self) -> Result<T, TransportError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}
