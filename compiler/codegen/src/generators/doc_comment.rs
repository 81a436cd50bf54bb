//! Doc comment writers shared by the emitters.
//!
//! Schema descriptions are copied verbatim. A `///` line may hold any text,
//! so the only transformation is splitting embedded newlines into separate
//! lines and trimming trailing whitespace. An empty description still yields
//! one bare `///` line.

use std::fmt::Write;

/// Write a single doc line at `indent`.
pub fn write_doc_line(buf: &mut String, text: &str, indent: &str) -> std::fmt::Result {
    let text = text.trim_end();
    if text.is_empty() {
        writeln!(buf, "{indent}///")
    } else {
        writeln!(buf, "{indent}/// {text}")
    }
}

/// Write a possibly multi-line description, one `///` per line.
pub fn write_doc_comment(buf: &mut String, text: &str, indent: &str) -> std::fmt::Result {
    if text.is_empty() {
        return write_doc_line(buf, text, indent);
    }
    for line in text.lines() {
        write_doc_line(buf, line, indent)?;
    }
    Ok(())
}

/// Write every entry of an ordered description list.
pub fn write_doc_lines<S: AsRef<str>>(
    buf: &mut String,
    lines: &[S],
    indent: &str,
) -> std::fmt::Result {
    for line in lines {
        write_doc_comment(buf, line.as_ref(), indent)?;
    }
    Ok(())
}
