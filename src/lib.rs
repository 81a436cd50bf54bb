// SPDX-License-Identifier: CC0-1.0

//! Quill umbrella crate.
//!
//! This crate serves as the workspace root and re-exports the member crates
//! that downstream users need: the schema model, the generator, the pipeline
//! that drives it, and the runtime boundary generated bindings compile
//! against.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use codegen;
pub use ir;
pub use pipeline;
pub use transport;
