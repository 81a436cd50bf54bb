//! Emitters turning an [`ir::ApiModel`] into unit bodies.
//!
//! Each emitter implements [`crate::CodeGenerator`] and walks the model in
//! its sorted order, so the same schema always yields the same text.

/// Sub-crate generates: **`doc_comment`**
///
/// Writes schema descriptions as `///` lines.
pub mod doc_comment;

/// Record declarations for the types unit.
pub mod record;
pub use record::RecordGenerator;

/// Client bindings for the methods unit.
pub mod method;
pub use method::MethodGenerator;
