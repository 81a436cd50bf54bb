//! Quill CLI
//!
//! Regenerates client bindings from the project's schema document. Run it as
//! a build step with no arguments; see `quill --help` for overrides.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use clap::Parser;
use quill_cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = execute(&cli) {
        eprintln!("quill failed: {}", e);
        std::process::exit(1);
    }
}
