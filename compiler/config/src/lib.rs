#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Quill Configuration
//!
//! This crate provides configuration management for the generator.
//! It handles loading, saving, and defaulting the settings that specify:
//! - Where the schema document lives
//! - Logging configuration
//! - Code generation parameters (output locations, client type, imports)
//!
//! Configuration is stored in TOML format. Every section and key is optional;
//! anything left out falls back to the defaults below, so a project without a
//! `quill.toml` still generates with one no-argument command.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema document location
    pub schema: SchemaConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Code generation settings
    pub codegen: CodegenConfig,
}

/// Schema document settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Path to the schema document, relative to the project root
    pub path: PathBuf,
}

impl Default for SchemaConfig {
    fn default() -> Self { Self { path: PathBuf::from("resources/api.json") } }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (debug, info, warn, error, `quill_codegen=debug`)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string() } }
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Directory receiving the generated units, relative to the project root
    pub output_dir: PathBuf,
    /// File name of the types unit
    pub types_file: String,
    /// File name of the methods unit
    pub methods_file: String,
    /// Type the generated bindings are implemented on; must implement `Dispatch`
    pub client_type: String,
    /// Command quoted in the generated-file header
    pub regenerate_command: String,
    /// `use` paths emitted at the top of the types unit
    pub types_imports: Vec<String>,
    /// `use` paths emitted at the top of the methods unit
    pub methods_imports: Vec<String>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated"),
            types_file: "types.rs".to_string(),
            methods_file: "methods.rs".to_string(),
            client_type: "Bot".to_string(),
            regenerate_command: "cargo run -p quill-cli".to_string(),
            types_imports: vec!["serde::{Deserialize, Serialize}".to_string()],
            methods_imports: vec![
                "super::types::*".to_string(),
                "super::Bot".to_string(),
                "transport::{codec, Dispatch, Outcome, Params}".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the user-level config file path:
    /// `{config_dir()}/quill/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("quill");
        Ok(config_dir.join("config.toml"))
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise `{project_root}/quill.toml` is
    /// used when present, then the user-level file, then the defaults.
    pub fn load(explicit: Option<&Path>, project_root: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "using explicit config");
            return Self::from_file(path);
        }

        let local = project_root.join(path::CONFIG_FILE_NAME);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "using project config");
            return Self::from_file(local);
        }

        if let Ok(user) = Self::default_path() {
            if user.is_file() {
                tracing::debug!(path = %user.display(), "using user config");
                return Self::from_file(user);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Absolute schema path for `project_root`
    pub fn schema_path(&self, project_root: &Path) -> PathBuf {
        path::resolve_against(project_root, &self.schema.path)
    }

    /// Absolute output directory for `project_root`
    pub fn output_dir(&self, project_root: &Path) -> PathBuf {
        path::resolve_against(project_root, &self.codegen.output_dir)
    }
}
