#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Code generation for schema-described client APIs.
//!
//! This crate turns an [`ApiModel`] into two ready-to-`cargo check` Rust units:
//! a *types* unit holding one `serde` record per schema type, and a *methods*
//! unit holding one `async` binding per schema method, implemented on a
//! client type that provides `transport::Dispatch`.
//!
//! Generation itself is pure: [`generate_units`] maps a model and a set of
//! [`GeneratorOptions`] to [`GeneratedUnit`]s. Formatting and disk writes live
//! in [`output`].

pub mod generators;

use ir::ApiModel;
use thiserror::Error;

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Underlying I/O error while writing units.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Formatting error when building generated source.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
    /// The emitted text is not a valid Rust file.
    #[error("generated unit {unit} is not valid Rust: {message}")]
    InvalidSource {
        /// Unit file name.
        unit: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Sub-crate: **`output`**
///
/// Header assembly, `syn`/`prettyplease` formatting and unit writing.
pub mod output;
pub use output::{render_unit, write_unit, GeneratedUnit};

/// Sub-crate: **`type_mapper`**
///
/// Schema type tokens to Rust types, including the nullable rules.
pub mod type_mapper;
pub use type_mapper::{RustType, TypeMapper};

/// Sub-crate: **`utils`**
///
/// Identifier case conversion and sanitisation.
pub mod utils;

pub use generators::{MethodGenerator, RecordGenerator};

/// Defines the core interface for producing the body of a unit from a loaded
/// schema model.
pub trait CodeGenerator {
    /// Emit declarations for `model`, in the model's sorted order.
    fn generate(&self, model: &ApiModel) -> Result<String>;
}

/// Knobs for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Type the bindings are implemented on.
    pub client_type: String,
    /// Command quoted in every unit header.
    pub regenerate_command: String,
    /// File name of the types unit.
    pub types_file: String,
    /// File name of the methods unit.
    pub methods_file: String,
    /// `use` paths of the types unit.
    pub types_imports: Vec<String>,
    /// `use` paths of the methods unit.
    pub methods_imports: Vec<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            client_type: "Bot".to_string(),
            regenerate_command: "cargo run -p quill-cli".to_string(),
            types_file: "types.rs".to_string(),
            methods_file: "methods.rs".to_string(),
            types_imports: vec!["serde::{Deserialize, Serialize}".to_string()],
            methods_imports: vec![
                "super::types::*".to_string(),
                "super::Bot".to_string(),
                "transport::{codec, Dispatch, Outcome, Params}".to_string(),
            ],
        }
    }
}

/// Generate the types unit and the methods unit, in that order.
pub fn generate_units(model: &ApiModel, options: &GeneratorOptions) -> Result<Vec<GeneratedUnit>> {
    let types = RecordGenerator::new().generate(model)?;
    let methods = MethodGenerator::new(options.client_type.as_str()).generate(model)?;
    tracing::debug!(
        types = model.type_count(),
        methods = model.method_count(),
        "emitted unit bodies"
    );

    Ok(vec![
        GeneratedUnit {
            file_name: options.types_file.clone(),
            regenerate_command: options.regenerate_command.clone(),
            imports: options.types_imports.clone(),
            body: types,
        },
        GeneratedUnit {
            file_name: options.methods_file.clone(),
            regenerate_command: options.regenerate_command.clone(),
            imports: options.methods_imports.clone(),
            body: methods,
        },
    ])
}
