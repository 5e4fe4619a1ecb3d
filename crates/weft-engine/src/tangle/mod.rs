//! # Tangle
//!
//! Reassembles the scraps of one output file into source text. Every scrap
//! is preceded by a `#line` directive naming where its body starts, and
//! every expanded reference is followed by one resuming at the text after
//! it, so compilers report errors against the literate source.
//!
//! References resolve by kind: `file:` and `global:` names expand every
//! definition in the run, `local:` and unset names only the definitions in
//! the referencing file.

pub mod sink;

use std::fmt::Write;

pub use sink::CountingSink;

use crate::diagnostics::Diagnostic;
use crate::document::{Element, ElementKind, FileId, SourceFile, SourceLoc};
use crate::error::TangleError;
use crate::scraps::{FileGroupId, NameGroupId, ScrapId, ScrapRegistry};

/// Tangled text for one name group, plus warnings found on the way.
#[derive(Debug)]
pub struct Tangled {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Tangles every definition of `group`. The text is produced twice: once
/// into a [`CountingSink`] to size the buffer, then for real.
pub fn tangle(
    sources: &[SourceFile],
    registry: &ScrapRegistry,
    group: NameGroupId,
) -> Result<Tangled, TangleError> {
    let mut counter = CountingSink::new();
    Tangler::new(sources, registry).name_group(&mut counter, group)?;

    let mut text = String::with_capacity(counter.count());
    let mut tangler = Tangler::new(sources, registry);
    tangler.name_group(&mut text, group)?;
    log::debug!(
        "tangled `{}`: {} bytes",
        registry.name_group(group).id,
        text.len()
    );
    Ok(Tangled {
        text,
        diagnostics: tangler.diagnostics,
    })
}

/// What a pending expansion is keyed on, matching the scope it expands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expansion {
    Name(NameGroupId),
    File(FileGroupId),
}

struct Tangler<'p> {
    sources: &'p [SourceFile],
    registry: &'p ScrapRegistry,
    in_progress: Vec<(Expansion, &'p str)>,
    diagnostics: Vec<Diagnostic>,
}

impl<'p> Tangler<'p> {
    fn new(sources: &'p [SourceFile], registry: &'p ScrapRegistry) -> Self {
        Self {
            sources,
            registry,
            in_progress: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn name_group<W: Write>(&mut self, out: &mut W, group: NameGroupId) -> Result<(), TangleError> {
        self.enter(Expansion::Name(group), group)?;
        let registry = self.registry;
        for &file_group in &registry.name_group(group).file_groups {
            self.scraps_of(out, file_group)?;
        }
        self.in_progress.pop();
        Ok(())
    }

    fn file_group<W: Write>(&mut self, out: &mut W, file_group: FileGroupId) -> Result<(), TangleError> {
        let group = self.registry.file_group(file_group).name_group;
        self.enter(Expansion::File(file_group), group)?;
        self.scraps_of(out, file_group)?;
        self.in_progress.pop();
        Ok(())
    }

    fn enter(&mut self, key: Expansion, group: NameGroupId) -> Result<(), TangleError> {
        let registry = self.registry;
        let id = registry.name_group(group).id.as_str();
        if self.in_progress.iter().any(|&(k, _)| k == key) {
            let mut chain: Vec<String> = self.in_progress.iter().map(|(_, id)| id.to_string()).collect();
            chain.push(id.to_string());
            return Err(TangleError::Cycle {
                id: id.to_string(),
                chain,
            });
        }
        self.in_progress.push((key, id));
        Ok(())
    }

    fn scraps_of<W: Write>(&mut self, out: &mut W, file_group: FileGroupId) -> Result<(), TangleError> {
        let registry = self.registry;
        let file = registry.file_group(file_group).file;
        for &scrap in &registry.file_group(file_group).scraps {
            self.scrap(out, file, scrap)?;
        }
        Ok(())
    }

    fn scrap<W: Write>(&mut self, out: &mut W, file: FileId, scrap: ScrapId) -> Result<(), TangleError> {
        let registry = self.registry;
        let scrap = registry.scrap(scrap);
        self.directive(out, file, scrap.loc)?;
        self.element(out, file, &scrap.body, scrap.loc.col)
    }

    fn element<W: Write>(
        &mut self,
        out: &mut W,
        file: FileId,
        element: &'p Element,
        indent: usize,
    ) -> Result<(), TangleError> {
        match element.kind {
            ElementKind::Text => {
                if let Some(span) = element.text {
                    out.write_str(self.sources[file.index()].slice(span))?;
                }
            }
            ElementKind::NewLine => {
                out.write_char('\n')?;
                write_indent(out, indent)?;
            }
            ElementKind::LessThan | ElementKind::GreaterThan | ElementKind::Ampersand => {
                if let Some(c) = element.kind.entity_char() {
                    out.write_char(c)?;
                }
            }
            ElementKind::ScrapRef { group, resume_at } => {
                self.reference(out, file, element, group)?;
                self.directive(out, file, resume_at)?;
            }
            _ => {
                for child in &element.children {
                    self.element(out, file, child, indent)?;
                }
            }
        }
        Ok(())
    }

    fn reference<W: Write>(
        &mut self,
        out: &mut W,
        file: FileId,
        element: &Element,
        file_group: FileGroupId,
    ) -> Result<(), TangleError> {
        let registry = self.registry;
        let group = registry.file_group(file_group).name_group;
        let name = registry.name_group(group);

        if registry.definition_count(group) == 0 {
            let mut warning = Diagnostic::warning(format!("scrap `{}` is never defined", name.id));
            if let Some(span) = element.text {
                warning = warning.at(file, span);
            }
            self.diagnostics.push(warning);
            return Ok(());
        }

        if name.kind.is_global() {
            self.name_group(out, group)
        } else {
            self.file_group(out, file_group)
        }
    }

    /// `\n#line N "path"\n`, then the column's indentation.
    fn directive<W: Write>(&self, out: &mut W, file: FileId, loc: SourceLoc) -> Result<(), TangleError> {
        let path = self.sources[file.index()].directive_path();
        write!(out, "\n#line {} \"{}\"\n", loc.line, path)?;
        write_indent(out, loc.col)?;
        Ok(())
    }
}

/// `col - 1` spaces, so text lands back in its source column.
fn write_indent<W: Write>(out: &mut W, col: usize) -> Result<(), TangleError> {
    for _ in 1..col {
        out.write_char(' ')?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FileId;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    fn project(files: &[(&str, &str)]) -> (Vec<SourceFile>, ScrapRegistry, Vec<Diagnostic>) {
        let sources: Vec<SourceFile> = files.iter().map(|(p, t)| SourceFile::new(*p, *t)).collect();
        let mut registry = ScrapRegistry::new();
        let mut diagnostics = Vec::new();
        for (i, source) in sources.iter().enumerate() {
            parse_document(FileId(i), source, &mut registry, &mut diagnostics);
        }
        (sources, registry, diagnostics)
    }

    fn tangle_id(sources: &[SourceFile], registry: &ScrapRegistry, id: &str) -> Result<Tangled, TangleError> {
        tangle(sources, registry, registry.lookup(id).expect("defined"))
    }

    #[test]
    fn single_scrap_gets_one_directive() {
        let (sources, registry, _) = project(&[("a.md", "```\n<<file:out.c>>=\nint x;\n```\n")]);
        let tangled = tangle_id(&sources, &registry, "out.c").unwrap();
        assert_eq!(tangled.text, "\n#line 3 \"a.md\"\nint x;\n");
    }

    #[test]
    fn nested_reference_is_bracketed_by_directives() {
        let text = "```\n<<file:out.c>>=\nint main() {\n    <<body>>\n}\n```\n\n```\n<<body>>=\nreturn 0;\n```\n";
        let (sources, registry, _) = project(&[("a.md", text)]);
        let tangled = tangle_id(&sources, &registry, "out.c").unwrap();
        assert_eq!(
            tangled.text,
            "\n#line 3 \"a.md\"\nint main() {\n    \n#line 10 \"a.md\"\nreturn 0;\n\n#line 4 \"a.md\"\n            \n}\n"
        );
        assert_eq!(tangled.text.matches("#line").count(), 3);
    }

    #[test]
    fn indented_scrap_keeps_its_column() {
        let text = "    <<file:out.py>>=\n    if x:\n        y()\n";
        let (sources, registry, _) = project(&[("a.md", text)]);
        let tangled = tangle_id(&sources, &registry, "out.py").unwrap();
        assert_eq!(tangled.text, "\n#line 2 \"a.md\"\n    if x:\n        y()\n    ");
    }

    #[test]
    fn entities_in_code_are_written_as_characters() {
        let (sources, registry, _) = project(&[("a.md", "```\n<<file:o>>=\na < b && c > d\n```\n")]);
        let tangled = tangle_id(&sources, &registry, "o").unwrap();
        assert!(tangled.text.ends_with("a < b && c > d\n"));
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let text = "```\n<<file:o>>=\n<<loop>>\n```\n\n```\n<<global:loop>>=\n<<loop>>\n```\n";
        let (sources, registry, _) = project(&[("a.md", text)]);
        match tangle_id(&sources, &registry, "o") {
            Err(TangleError::Cycle { id, chain }) => {
                assert_eq!(id, "loop");
                assert_eq!(chain, vec!["o", "loop", "loop"]);
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
    }

    #[test]
    fn undefined_reference_warns_and_expands_to_nothing() {
        let (sources, registry, _) = project(&[("a.md", "```\n<<file:o>>=\n<<missing>>\n```\n")]);
        let tangled = tangle_id(&sources, &registry, "o").unwrap();
        assert_eq!(tangled.diagnostics.len(), 1);
        assert!(tangled.diagnostics[0].message.contains("missing"));
        assert_eq!(tangled.text, "\n#line 3 \"a.md\"\n\n#line 3 \"a.md\"\n           \n");
    }
}
