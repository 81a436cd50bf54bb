//! Generation context for the code generation pipeline.
//!
//! This module provides a unified context that encapsulates everything a run
//! needs: where the schema lives, where the units go, and how they are shaped.

use std::path::{Path, PathBuf};

use codegen::GeneratorOptions;
use config::Config;

use crate::PipelineError;

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replaces `[schema] path`.
    pub schema: Option<PathBuf>,
    /// Replaces `[codegen] output_dir`.
    pub output_dir: Option<PathBuf>,
}

/// Context containing all inputs needed for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    /// Absolute path of the schema document
    pub schema_path: PathBuf,
    /// Absolute directory receiving the units
    pub output_dir: PathBuf,
    /// Unit naming, client type and imports
    pub options: GeneratorOptions,
}

impl GenerationContext {
    /// Create a new builder for GenerationContext
    pub fn builder() -> GenerationContextBuilder { GenerationContextBuilder::default() }

    /// Resolve a context from configuration, relative to `project_root`.
    ///
    /// Relative override paths are resolved against `project_root` as well.
    pub fn from_config(config: &Config, project_root: &Path, overrides: &Overrides) -> Self {
        let schema_path = match &overrides.schema {
            Some(schema) => path::resolve_against(project_root, schema),
            None => config.schema_path(project_root),
        };
        let output_dir = match &overrides.output_dir {
            Some(dir) => path::resolve_against(project_root, dir),
            None => config.output_dir(project_root),
        };
        Self { schema_path, output_dir, options: options_from_config(config) }
    }

    /// Destination of the unit named `file_name`
    pub fn unit_path(&self, file_name: &str) -> PathBuf { self.output_dir.join(file_name) }
}

/// Generator options described by the `[codegen]` section.
pub fn options_from_config(config: &Config) -> GeneratorOptions {
    let codegen = &config.codegen;
    GeneratorOptions {
        client_type: codegen.client_type.clone(),
        regenerate_command: codegen.regenerate_command.clone(),
        types_file: codegen.types_file.clone(),
        methods_file: codegen.methods_file.clone(),
        types_imports: codegen.types_imports.clone(),
        methods_imports: codegen.methods_imports.clone(),
    }
}

#[derive(Debug, Default)]
/// Builder for GenerationContext
pub struct GenerationContextBuilder {
    /// Absolute path of the schema document
    schema_path: Option<PathBuf>,
    /// Absolute directory receiving the units
    output_dir: Option<PathBuf>,
    /// Unit naming, client type and imports
    options: Option<GeneratorOptions>,
}

impl GenerationContextBuilder {
    /// Set the schema path
    pub fn schema_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_path = Some(path.into());
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the generator options (defaults are used otherwise)
    pub fn options(mut self, options: GeneratorOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Build the GenerationContext
    pub fn build(self) -> Result<GenerationContext, PipelineError> {
        Ok(GenerationContext {
            schema_path: self
                .schema_path
                .ok_or_else(|| PipelineError::Message("schema_path is required".to_string()))?,
            output_dir: self
                .output_dir
                .ok_or_else(|| PipelineError::Message("output_dir is required".to_string()))?,
            options: self.options.unwrap_or_default(),
        })
    }
}
