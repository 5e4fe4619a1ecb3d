//! One run's worth of inputs and everything derived from them.

use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostic;
use crate::document::{Document, FileId, SourceFile};
use crate::error::{TangleError, WeftError};
use crate::io::{self, WriteOutcome};
use crate::parsing::metadata::{MetaData, parse_metadata};
use crate::parsing::parse_document;
use crate::scraps::{NameGroupId, ScrapRegistry};
use crate::tangle::{self, Tangled};
use crate::weave::{self, MetaSource};

/// Counts of what an output pass did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OutputSummary {
    pub written: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl OutputSummary {
    fn record(&mut self, result: Result<WriteOutcome, WeftError>, diagnostics: &mut Vec<Diagnostic>) {
        match result {
            Ok(WriteOutcome::Written) => self.written += 1,
            Ok(WriteOutcome::Unchanged) => self.unchanged += 1,
            Err(e) => {
                log::error!("{e}");
                diagnostics.push(Diagnostic::error(e.to_string()));
                self.failed += 1;
            }
        }
    }
}

/// Owns every loaded source. [`FileId`]s index `sources` in load order,
/// metadata file included.
#[derive(Debug, Default)]
pub struct Project {
    sources: Vec<SourceFile>,
    documents: Vec<Document>,
    metadata: Option<(FileId, MetaData)>,
    registry: ScrapRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_source(&mut self, path: PathBuf, text: String) -> FileId {
        let file = FileId(self.sources.len());
        self.sources.push(SourceFile::new(path, text));
        file
    }

    /// Parses a document and registers its scraps.
    pub fn add_document_text(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> FileId {
        let file = self.push_source(path.into(), text.into());
        let doc = parse_document(
            file,
            &self.sources[file.index()],
            &mut self.registry,
            &mut self.diagnostics,
        );
        self.documents.push(doc);
        file
    }

    pub fn add_document_path(&mut self, path: &Path) -> Result<FileId, WeftError> {
        let text = io::read_source(path).inspect_err(|e| log::error!("{e}"))?;
        Ok(self.add_document_text(path, text))
    }

    /// Loads the shared metadata file. Only one is allowed per run.
    pub fn add_metadata_text(
        &mut self,
        path: impl Into<PathBuf>,
        text: impl Into<String>,
    ) -> Result<FileId, WeftError> {
        let path = path.into();
        if let Some((existing, _)) = &self.metadata {
            return Err(WeftError::DuplicateMetaData(self.sources[existing.index()].path.clone()));
        }
        let file = self.push_source(path, text.into());
        let data = parse_metadata(file, &self.sources[file.index()], &mut self.diagnostics);
        self.metadata = Some((file, data));
        Ok(file)
    }

    pub fn add_metadata_path(&mut self, path: &Path) -> Result<FileId, WeftError> {
        let text = io::read_source(path).inspect_err(|e| log::error!("{e}"))?;
        self.add_metadata_text(path, text)
    }

    /// Tangles one name group. Warnings are returned, not recorded.
    pub fn tangle(&self, group: NameGroupId) -> Result<Tangled, TangleError> {
        tangle::tangle(&self.sources, &self.registry, group)
    }

    /// Tangles `id` by name, for callers that know the output they want.
    pub fn tangle_id(&self, id: &str) -> Option<Result<Tangled, TangleError>> {
        self.registry.lookup(id).map(|group| self.tangle(group))
    }

    /// Writes every `file:` scrap to `out_dir.join(id)`. A cyclic output is
    /// reported and skipped.
    pub fn write_code_files(&mut self, out_dir: &Path) -> OutputSummary {
        let mut summary = OutputSummary::default();
        let outputs: Vec<(NameGroupId, String)> = self
            .registry
            .output_files()
            .map(|(group, g)| (group, g.id.clone()))
            .collect();

        for (group, id) in outputs {
            let tangled = match self.tangle(group) {
                Ok(tangled) => tangled,
                Err(e) => {
                    log::error!("{e}");
                    let report = Diagnostic::error(e.to_string()).with_note(format!("`{id}` was not written"));
                    self.diagnostics.push(report);
                    summary.failed += 1;
                    continue;
                }
            };
            for warning in tangled.diagnostics {
                if !self.diagnostics.contains(&warning) {
                    log::warn!("{}", warning.message);
                    self.diagnostics.push(warning);
                }
            }
            let result = io::write_if_changed(&out_dir.join(&id), &tangled.text);
            summary.record(result, &mut self.diagnostics);
        }
        summary
    }

    /// Writes one HTML page per document, into `doc_dir` or beside each input.
    pub fn write_doc_files(&mut self, doc_dir: Option<&Path>) -> OutputSummary {
        let mut summary = OutputSummary::default();
        for doc in &self.documents {
            let source = &self.sources[doc.file.index()];
            let mut html = String::new();
            let result = weave::weave(&mut html, &self.sources, &self.registry, doc, self.meta_source())
                .map_err(WeftError::from)
                .and_then(|()| io::write_if_changed(&weave::html_path(&source.path, doc_dir), &html));
            summary.record(result, &mut self.diagnostics);
        }
        summary
    }

    fn meta_source(&self) -> Option<MetaSource<'_>> {
        self.metadata.as_ref().map(|(file, data)| MetaSource {
            source: &self.sources[file.index()],
            data,
        })
    }

    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn metadata(&self) -> Option<&MetaData> {
        self.metadata.as_ref().map(|(_, data)| data)
    }

    pub fn registry(&self) -> &ScrapRegistry {
        &self.registry
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}
