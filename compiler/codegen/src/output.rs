//! Unit assembly, formatting and file writing.
//!
//! A unit is written in two steps. The raw text (header, imports, body) lands
//! on disk first, then it is parsed with `syn` and pretty-printed with
//! `prettyplease`, and the formatted text overwrites the raw one. `prettyplease`
//! drops regular comments, so the header is re-attached after formatting.
//!
//! A unit that does not parse is an error. The raw text is left in place so
//! the offending output can be inspected.

use std::fs;
use std::path::Path;

use crate::{CodegenError, Result};

/// First line of every generated unit.
pub const AUTOGENERATED_MARKER: &str = "// THIS FILE IS AUTOGENERATED. DO NOT EDIT.";

/// One generated artifact, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// File name relative to the output directory, e.g. `types.rs`.
    pub file_name: String,
    /// Command quoted in the header.
    pub regenerate_command: String,
    /// Paths emitted as `use` declarations after the header.
    pub imports: Vec<String>,
    /// Emitted declarations.
    pub body: String,
}

impl GeneratedUnit {
    /// The two-line header placed above the unit.
    pub fn header(&self) -> String {
        format!(
            "{AUTOGENERATED_MARKER}\n// Regenerate by running `{}` in the repository root.\n",
            self.regenerate_command
        )
    }

    /// Header, imports and body concatenated, before formatting.
    pub fn raw_text(&self) -> String {
        let mut text = self.header();
        text.push('\n');
        for import in &self.imports {
            text.push_str(&format!("use {import};\n"));
        }
        if !self.imports.is_empty() {
            text.push('\n');
        }
        text.push_str(&self.body);
        text
    }
}

/// Parse `source` and pretty-print it.
///
/// Fails with [`CodegenError::InvalidSource`] when `source` is not a valid
/// Rust file.
pub fn format_source(unit: &str, source: &str) -> Result<String> {
    let file = syn::parse_file(source).map_err(|e| CodegenError::InvalidSource {
        unit: unit.to_string(),
        message: e.to_string(),
    })?;
    Ok(prettyplease::unparse(&file))
}

/// Render a unit to its final on-disk text without touching the filesystem.
pub fn render_unit(unit: &GeneratedUnit) -> Result<String> {
    let formatted = format_source(&unit.file_name, &unit.raw_text())?;
    Ok(format!("{}\n{}", unit.header(), formatted))
}

/// Write `unit` to `path`, creating parent directories.
///
/// Returns the final text written.
pub fn write_unit(unit: &GeneratedUnit, path: &Path) -> Result<String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, unit.raw_text())?;
    tracing::debug!(path = %path.display(), "wrote raw unit");

    let rendered = render_unit(unit)?;
    fs::write(path, &rendered)?;
    tracing::info!(path = %path.display(), bytes = rendered.len(), "generated unit");
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(body: &str) -> GeneratedUnit {
        GeneratedUnit {
            file_name: "types.rs".to_string(),
            regenerate_command: "cargo run -p quill-cli".to_string(),
            imports: vec!["serde::{Deserialize, Serialize}".to_string()],
            body: body.to_string(),
        }
    }

    #[test]
    fn test_header_has_exact_shape() {
        let header = unit("").header();
        assert_eq!(
            header,
            "// THIS FILE IS AUTOGENERATED. DO NOT EDIT.\n// Regenerate by running `cargo run -p quill-cli` in the repository root.\n"
        );
    }

    #[test]
    fn test_raw_text_orders_header_imports_body() {
        let raw = unit("pub struct A {}\n").raw_text();
        let header = raw.find(AUTOGENERATED_MARKER).expect("header present");
        let import = raw.find("use serde::{Deserialize, Serialize};").expect("import present");
        let body = raw.find("pub struct A").expect("body present");
        assert!(header < import && import < body);
    }

    #[test]
    fn test_render_unit_formats_and_keeps_header() {
        let rendered = render_unit(&unit("/// A record.\npub struct   A { pub x : i64 , }")).expect("renders");
        assert!(rendered.starts_with(AUTOGENERATED_MARKER));
        assert!(rendered.contains("use serde::{Deserialize, Serialize};"));
        assert!(rendered.contains("/// A record.\npub struct A {\n    pub x: i64,\n}"));
    }

    #[test]
    fn test_render_unit_is_stable() {
        let body = "pub struct A { pub x: i64 }\nimpl A { pub fn x(&self) -> i64 { self.x } }\n";
        let first = render_unit(&unit(body)).expect("renders");
        let second = render_unit(&unit(body)).expect("renders");
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_source_is_fatal() {
        match render_unit(&unit("pub struct {")) {
            Err(CodegenError::InvalidSource { unit, .. }) => assert_eq!(unit, "types.rs"),
            other => panic!("expected InvalidSource, got {:?}", other),
        }
    }

    #[test]
    fn test_write_unit_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("generated/nested/types.rs");

        let written = write_unit(&unit("pub struct A {}"), &path).expect("writes");
        assert_eq!(fs::read_to_string(&path).expect("read back"), written);

        write_unit(&unit("pub struct B {}"), &path).expect("overwrites");
        let contents = fs::read_to_string(&path).expect("read back");
        assert!(contents.contains("pub struct B"));
        assert!(!contents.contains("pub struct A"));
    }

    #[test]
    fn test_write_unit_leaves_raw_text_on_failure() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("methods.rs");

        let result = write_unit(&unit("impl {"), &path);
        assert!(matches!(result, Err(CodegenError::InvalidSource { .. })));
        let contents = fs::read_to_string(&path).expect("raw text written");
        assert!(contents.contains("impl {"));
    }
}
