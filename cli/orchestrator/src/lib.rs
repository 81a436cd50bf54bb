#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Argument handling and dispatch for the `quill` command.

use std::path::PathBuf;

use clap::Parser;
use pipeline::{CheckReport, Overrides, Project};
use thiserror::Error;

/// Errors that can occur during a `quill` invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// The pipeline failed.
    #[error(transparent)]
    Pipeline(#[from] pipeline::PipelineError),
    /// The log level could not be applied.
    #[error(transparent)]
    Logging(#[from] logging::LoggingError),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Regenerate client bindings from the project's schema document.
///
/// With no arguments the schema at `resources/api.json` is turned into
/// `generated/types.rs` and `generated/methods.rs` under the project root.
#[derive(Parser, Debug, Default)]
#[command(name = "quill", version)]
pub struct Cli {
    /// Configuration file (defaults to `quill.toml` in the project root)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Project root (defaults to the nearest directory with `quill.toml` or a workspace `Cargo.toml`)
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Schema document, overriding the configured path
    #[arg(long)]
    pub schema: Option<PathBuf>,
    /// Output directory, overriding the configured one
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Verify that the generated files are up to date without writing them
    #[arg(long)]
    pub check: bool,
    /// Log level or filter directive (e.g. `debug`, `quill_codegen=trace`)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides { schema: self.schema.clone(), output_dir: self.out_dir.clone() }
    }
}

/// Run one invocation. Stale output in check mode is an error.
pub fn execute(cli: &Cli) -> Result<CheckReport> {
    let project = Project::load(cli.config.as_deref(), cli.root.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&project.config.logging.level);
    logging::init(level)?;
    tracing::debug!(root = %project.root.display(), "resolved project");

    let report = project.execute(&cli.overrides(), cli.check)?;
    if cli.check {
        report.clone().into_result()?;
        tracing::info!(units = report.fresh.len(), "generated files are up to date");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_generate() {
        let cli = Cli::try_parse_from(["quill"]).expect("parses");
        assert!(!cli.check);
        assert!(cli.config.is_none());
        assert_eq!(cli.overrides(), Overrides::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "quill",
            "--config",
            "bot.toml",
            "--schema",
            "api.json",
            "--out-dir",
            "src/gen",
            "--check",
            "--log-level",
            "debug",
        ])
        .expect("parses");
        assert!(cli.check);
        assert_eq!(cli.config, Some(PathBuf::from("bot.toml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(
            cli.overrides(),
            Overrides {
                schema: Some(PathBuf::from("api.json")),
                output_dir: Some(PathBuf::from("src/gen")),
            }
        );
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["quill", "--frobnicate"]).is_err());
    }
}
