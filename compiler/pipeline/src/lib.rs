#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that regenerates client bindings from a schema
//! document.
//!
//! ## Module Organization
//!
//! - `generation_context` - Resolved inputs of a run (schema path, output directory, options)
//! - `orchestration` - Main pipeline entry points (`run`, `check`, `Project`)

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the codegen pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
    /// The schema document could not be loaded.
    #[error(transparent)]
    Schema(#[from] ir::SchemaError),
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// The project root could not be located.
    #[error(transparent)]
    Path(#[from] path::PathError),
    /// I/O error while reading generated files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Check mode found units that differ from a fresh generation.
    #[error("generated files are out of date: {}", display_paths(.0))]
    Stale(Vec<PathBuf>),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

// Module declarations
pub mod generation_context;
pub mod orchestration;

pub use generation_context::{GenerationContext, GenerationContextBuilder, Overrides};
pub use orchestration::{check, generate, run, CheckReport, Project};
