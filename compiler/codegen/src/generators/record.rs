//! Record emitter: one `serde` struct per schema type.

use std::fmt::Write as _;

use ir::{ApiModel, TypeDescription};

use super::doc_comment::{write_doc_comment, write_doc_lines};
use crate::type_mapper::TypeMapper;
use crate::utils::sanitize_external_identifier;
use crate::{CodeGenerator, Result};

/// Emits the types unit body.
///
/// Records appear in lexicographic order of their schema names and fields in
/// declared order. Members keep their schema spelling on the wire through
/// `#[serde(rename)]`; container-level `#[serde(default)]` lets absent wire
/// fields decode to their zero values.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordGenerator;

impl RecordGenerator {
    /// Create a record emitter.
    pub fn new() -> Self { Self }

    /// Render a single record declaration.
    pub fn render_record(
        &self,
        mapper: &TypeMapper<'_>,
        name: &str,
        description: &TypeDescription,
    ) -> Result<String> {
        let mut buf = String::new();
        write_doc_lines(&mut buf, &description.description, "")?;
        writeln!(buf, "#[derive(Debug, Clone, Default, Serialize, Deserialize)]")?;
        writeln!(buf, "#[serde(default)]")?;
        writeln!(buf, "pub struct {name} {{")?;
        for field in &description.fields {
            write_doc_comment(&mut buf, &field.description, "    ")?;
            writeln!(buf, "    #[serde(rename = {:?})]", field.field)?;
            writeln!(
                buf,
                "    pub {}: {},",
                sanitize_external_identifier(&field.field),
                mapper.map_type_field(field)
            )?;
        }
        writeln!(buf, "}}")?;
        Ok(buf)
    }
}

impl CodeGenerator for RecordGenerator {
    fn generate(&self, model: &ApiModel) -> Result<String> {
        let mapper = TypeMapper::new(model);
        let mut out = String::new();
        for (name, description) in model.types() {
            tracing::trace!(record = name, fields = description.fields.len(), "emitting record");
            out.push_str(&self.render_record(&mapper, name, description)?);
            out.push('\n');
        }
        Ok(out)
    }
}
