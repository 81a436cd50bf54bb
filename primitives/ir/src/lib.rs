#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Quill Intermediate Representation (IR)
//!
//! This crate holds the in-memory model of an API schema document: named
//! record types with typed fields, and named methods with typed parameters and
//! return types. The model is built once per generation run, is read-only, and
//! exposes its entries in a deterministic (lexicographic) order so that every
//! emitter downstream produces byte-identical output for an unchanged schema.

pub mod api_description;
pub mod api_model;

pub use api_description::*;
pub use api_model::*;
