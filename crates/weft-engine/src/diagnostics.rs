use codespan_reporting::diagnostic::{Diagnostic as Report, Label, Severity as ReportSeverity};

use crate::document::{FileId, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// A recoverable problem found while parsing or tangling.
///
/// Diagnostics never stop a run; they are collected on the project and
/// rendered by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub file: Option<FileId>,
    pub span: Option<Span>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            file: None,
            span: None,
            notes: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            ..Self::warning(message)
        }
    }

    #[must_use]
    pub fn at(mut self, file: FileId, span: Span) -> Self {
        self.file = Some(file);
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Convert to a codespan-reporting diagnostic. File ids are project
    /// [`FileId`] indexes.
    pub fn to_codespan(&self) -> Report<usize> {
        let severity = match self.severity {
            Severity::Warning => ReportSeverity::Warning,
            Severity::Error => ReportSeverity::Error,
        };
        let labels = match (self.file, self.span) {
            (Some(file), Some(span)) => vec![Label::primary(file.index(), span.start..span.end)],
            _ => Vec::new(),
        };
        Report::new(severity)
            .with_message(&self.message)
            .with_labels(labels)
            .with_notes(self.notes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn located_diagnostic_gets_primary_label() {
        let diag = Diagnostic::warning("bad metadata line")
            .at(FileId(2), Span::new(4, 9))
            .with_note("line skipped");
        let report = diag.to_codespan();

        assert_eq!(report.severity, ReportSeverity::Warning);
        assert_eq!(report.labels.len(), 1);
        assert_eq!(report.labels[0].file_id, 2);
        assert_eq!(report.labels[0].range, 4..9);
        assert_eq!(report.notes, vec!["line skipped".to_string()]);
    }

    #[test]
    fn unlocated_diagnostic_has_no_labels() {
        let report = Diagnostic::error("cycle").to_codespan();
        assert_eq!(report.severity, ReportSeverity::Error);
        assert!(report.labels.is_empty());
    }
}
