//! Pipeline orchestration for the main entry points.
//!
//! This module coordinates schema loading, generation and output so that a
//! single call regenerates (or verifies) every unit.

use std::fs;
use std::path::{Path, PathBuf};

use codegen::{generate_units, render_unit, write_unit, GeneratedUnit};
use config::Config;
use ir::ApiModel;

use crate::generation_context::{GenerationContext, Overrides};
use crate::Result;

/// Load the schema and produce every unit in memory.
pub fn generate(context: &GenerationContext) -> Result<Vec<GeneratedUnit>> {
    tracing::info!(schema = %context.schema_path.display(), "loading schema");
    let model = ApiModel::from_file(&context.schema_path)?;
    tracing::info!(
        types = model.type_count(),
        methods = model.method_count(),
        "schema loaded"
    );
    Ok(generate_units(&model, &context.options)?)
}

/// Regenerate every unit on disk.
///
/// # Returns
///
/// The paths written, in unit order.
pub fn run(context: &GenerationContext) -> Result<Vec<PathBuf>> {
    let units = generate(context)?;
    let mut written = Vec::with_capacity(units.len());
    for unit in &units {
        let path = context.unit_path(&unit.file_name);
        write_unit(unit, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Outcome of comparing fresh output against the files on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Units whose file matches a fresh generation.
    pub fresh: Vec<PathBuf>,
    /// Units whose file is missing or differs.
    pub stale: Vec<PathBuf>,
}

impl CheckReport {
    /// Whether every unit is up to date.
    pub fn is_fresh(&self) -> bool { self.stale.is_empty() }

    /// Turn stale units into [`crate::PipelineError::Stale`].
    pub fn into_result(self) -> Result<()> {
        if self.is_fresh() {
            Ok(())
        } else {
            Err(crate::PipelineError::Stale(self.stale))
        }
    }
}

/// Regenerate in memory and compare with the files on disk. Writes nothing.
pub fn check(context: &GenerationContext) -> Result<CheckReport> {
    let units = generate(context)?;
    let mut report = CheckReport::default();
    for unit in &units {
        let path = context.unit_path(&unit.file_name);
        let expected = render_unit(unit)?;
        if is_current(&path, &expected)? {
            tracing::debug!(path = %path.display(), "unit is up to date");
            report.fresh.push(path);
        } else {
            tracing::warn!(path = %path.display(), "unit is out of date");
            report.stale.push(path);
        }
    }
    Ok(report)
}

fn is_current(path: &Path, expected: &str) -> Result<bool> {
    match fs::read_to_string(path) {
        Ok(actual) => Ok(actual == expected),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// A project root together with its resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Directory that relative configuration paths resolve against.
    pub root: PathBuf,
    /// Loaded configuration (or defaults).
    pub config: Config,
}

impl Project {
    /// Locate the project and load its configuration.
    ///
    /// When `root` is `None` it is discovered from the current directory.
    pub fn load(config_path: Option<&Path>, root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => path::find_project_root()?,
        };
        let config = Config::load(config_path, &root)?;
        Ok(Self { root, config })
    }

    /// Generation context for this project.
    pub fn context(&self, overrides: &Overrides) -> GenerationContext {
        GenerationContext::from_config(&self.config, &self.root, overrides)
    }

    /// Regenerate every unit, or only verify them when `check_only` is set.
    pub fn execute(&self, overrides: &Overrides, check_only: bool) -> Result<CheckReport> {
        let context = self.context(overrides);
        if check_only {
            return check(&context);
        }
        let written = run(&context)?;
        Ok(CheckReport { fresh: written, stale: Vec::new() })
    }
}
