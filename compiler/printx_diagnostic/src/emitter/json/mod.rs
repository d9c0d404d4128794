//! JSON Emitter
//!
//! Machine-readable diagnostic output in JSON format.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
///
/// Call [`JsonEmitter::begin`] before and [`JsonEmitter::end`] after the
/// diagnostics to produce a single JSON array.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if self.first {
            let _ = writeln!(self.writer);
        } else {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        let diagnosis = diagnostic.diagnosis();
        let (line, col) = diagnostic.line_col();

        // Build JSON manually (to avoid serde dependency)
        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(self.writer, "    \"code\": \"{}\",", diagnosis.code());
        let _ = writeln!(self.writer, "    \"name\": \"{}\",", diagnosis.as_str());
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(diagnosis.message())
        );
        let _ = writeln!(
            self.writer,
            "    \"template\": \"{}\",",
            escape_json(diagnostic.template())
        );
        let _ = writeln!(self.writer, "    \"offset\": {},", diagnostic.offset());
        let _ = writeln!(self.writer, "    \"line\": {line},");
        let _ = writeln!(self.writer, "    \"column\": {col},");
        let _ = writeln!(
            self.writer,
            "    \"label\": \"{}\",",
            escape_json(diagnosis.label())
        );

        let notes = diagnostic.notes();
        let _ = writeln!(self.writer, "    \"notes\": [");
        for (i, note) in notes.iter().enumerate() {
            let comma = trailing_comma(i, notes.len());
            let _ = writeln!(self.writer, "      \"{}\"{comma}", escape_json(note));
        }
        let _ = writeln!(self.writer, "    ]");
        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize) {
        // The array itself is the summary
    }
}

#[cfg(test)]
mod tests;
