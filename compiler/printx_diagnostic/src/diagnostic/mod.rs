//! A diagnosis positioned inside the template it was found in.

use std::fmt;

use crate::Diagnosis;

/// A diagnosis plus the byte offset of the offending character.
///
/// The offset may equal the template length when the problem is the end of
/// the template itself (e.g. too many arguments).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    diagnosis: Diagnosis,
    offset: usize,
    template: String,
    notes: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic for `template`, pointing at byte `offset`.
    pub fn new(diagnosis: Diagnosis, offset: usize, template: impl Into<String>) -> Self {
        let template = template.into();
        Diagnostic {
            diagnosis,
            offset: offset.min(template.len()),
            template,
            notes: Vec::new(),
        }
    }

    /// Attach a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn diagnosis(&self) -> Diagnosis {
        self.diagnosis
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn code(&self) -> &'static str {
        self.diagnosis.code()
    }

    pub fn message(&self) -> &'static str {
        self.diagnosis.message()
    }

    /// Byte offset where the line holding the offset starts.
    fn line_start(&self) -> usize {
        self.template.as_bytes()[..self.offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |nl| nl + 1)
    }

    /// 1-based (line, column) of the offending character.
    ///
    /// The column counts characters, not bytes.
    pub fn line_col(&self) -> (usize, usize) {
        let line_start = self.line_start();
        let line = 1 + self.template.as_bytes()[..line_start]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        let col = 1 + self
            .template
            .get(line_start..self.offset)
            .map_or(self.offset - line_start, |s| s.chars().count());
        (line, col)
    }

    /// The template line holding the offending character, without its
    /// newline.
    pub fn line_text(&self) -> &str {
        let start = self.line_start();
        let rest = &self.template.as_bytes()[start..];
        let end = rest
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.template.len(), |nl| start + nl);
        self.template.get(start..end).unwrap_or_default()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, col) = self.line_col();
        write!(
            f,
            "error[{}]: {} at {line}:{col}",
            self.diagnosis.code(),
            self.diagnosis.message()
        )
    }
}

#[cfg(test)]
mod tests;
