use std::collections::HashMap;

use crate::document::{Element, FileId, SourceLoc};

use super::kind::ScrapKind;

/// Handle to a [`ScrapNameGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameGroupId(usize);

/// Handle to a [`ScrapFileGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileGroupId(usize);

/// Handle to a [`Scrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrapId(usize);

/// Inline-parsed display name, spans pointing into `file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName {
    pub file: FileId,
    pub elements: Vec<Element>,
}

/// Every file group sharing one id across the run, in creation order.
#[derive(Debug)]
pub struct ScrapNameGroup {
    pub id: String,
    pub kind: ScrapKind,
    pub display_name: Option<DisplayName>,
    pub file_groups: Vec<FileGroupId>,
}

/// The scraps sharing one id within one input file, in definition order.
#[derive(Debug)]
pub struct ScrapFileGroup {
    pub name_group: NameGroupId,
    pub file: FileId,
    pub scraps: Vec<ScrapId>,
}

/// One definition occurrence.
#[derive(Debug)]
pub struct Scrap {
    pub file_group: FileGroupId,
    /// Line and column of the first body line.
    pub loc: SourceLoc,
    /// The `CodeBlock` holding the body lines.
    pub body: Element,
}

/// A later definition asked for a different kind than the one already fixed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("scrap `{id}` was declared `{}` but is already `{}`", .requested.marker(), .existing.marker())]
pub struct KindConflict {
    pub id: String,
    pub existing: ScrapKind,
    pub requested: ScrapKind,
}

/// Arena of name groups, file groups and scraps for one run.
#[derive(Debug, Default)]
pub struct ScrapRegistry {
    name_groups: Vec<ScrapNameGroup>,
    file_groups: Vec<ScrapFileGroup>,
    scraps: Vec<Scrap>,
    by_id: HashMap<String, NameGroupId>,
}

impl ScrapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds or creates the name group for `id`, then its file group for
    /// `file`.
    pub fn find_or_create(&mut self, id: &str, file: FileId) -> FileGroupId {
        let name_group = match self.by_id.get(id) {
            Some(&existing) => existing,
            None => {
                let handle = NameGroupId(self.name_groups.len());
                self.name_groups.push(ScrapNameGroup {
                    id: id.to_string(),
                    kind: ScrapKind::Unknown,
                    display_name: None,
                    file_groups: Vec::new(),
                });
                self.by_id.insert(id.to_string(), handle);
                handle
            }
        };

        let existing = self.name_groups[name_group.0]
            .file_groups
            .iter()
            .copied()
            .find(|fg| self.file_groups[fg.0].file == file);
        if let Some(file_group) = existing {
            return file_group;
        }

        let handle = FileGroupId(self.file_groups.len());
        self.file_groups.push(ScrapFileGroup {
            name_group,
            file,
            scraps: Vec::new(),
        });
        self.name_groups[name_group.0].file_groups.push(handle);
        handle
    }

    /// Fixes the kind of a name group. The first explicit kind is permanent.
    pub fn declare_kind(&mut self, group: NameGroupId, kind: ScrapKind) -> Result<(), KindConflict> {
        let entry = &mut self.name_groups[group.0];
        if kind == ScrapKind::Unknown || entry.kind == kind {
            return Ok(());
        }
        if entry.kind == ScrapKind::Unknown {
            entry.kind = kind;
            return Ok(());
        }
        Err(KindConflict {
            id: entry.id.clone(),
            existing: entry.kind,
            requested: kind,
        })
    }

    /// Sets the display name unless an earlier definition already did.
    pub fn offer_display_name(&mut self, group: NameGroupId, name: DisplayName) {
        let entry = &mut self.name_groups[group.0];
        if entry.display_name.is_none() {
            entry.display_name = Some(name);
        }
    }

    pub fn add_scrap(&mut self, file_group: FileGroupId, loc: SourceLoc, body: Element) -> ScrapId {
        let handle = ScrapId(self.scraps.len());
        self.scraps.push(Scrap {
            file_group,
            loc,
            body,
        });
        self.file_groups[file_group.0].scraps.push(handle);
        handle
    }

    pub fn lookup(&self, id: &str) -> Option<NameGroupId> {
        self.by_id.get(id).copied()
    }

    pub fn name_group(&self, id: NameGroupId) -> &ScrapNameGroup {
        &self.name_groups[id.0]
    }

    pub fn file_group(&self, id: FileGroupId) -> &ScrapFileGroup {
        &self.file_groups[id.0]
    }

    pub fn scrap(&self, id: ScrapId) -> &Scrap {
        &self.scraps[id.0]
    }

    /// Name group owning a scrap.
    pub fn name_group_of(&self, scrap: ScrapId) -> NameGroupId {
        self.file_group(self.scrap(scrap).file_group).name_group
    }

    /// Name groups in first-creation order.
    pub fn name_groups(&self) -> impl Iterator<Item = (NameGroupId, &ScrapNameGroup)> {
        self.name_groups
            .iter()
            .enumerate()
            .map(|(i, g)| (NameGroupId(i), g))
    }

    /// Name groups that tangle to an output file.
    pub fn output_files(&self) -> impl Iterator<Item = (NameGroupId, &ScrapNameGroup)> {
        self.name_groups()
            .filter(|(_, g)| g.kind == ScrapKind::OutputFile)
    }

    /// Number of definitions across every file group of a name group.
    pub fn definition_count(&self, group: NameGroupId) -> usize {
        self.name_group(group)
            .file_groups
            .iter()
            .map(|&fg| self.file_group(fg).scraps.len())
            .sum()
    }

    /// True when `scrap` continues an earlier definition of the same name,
    /// judged within the scope its kind resolves in.
    pub fn is_continuation(&self, scrap: ScrapId) -> bool {
        let file_group = self.scrap(scrap).file_group;
        let group = self.file_group(file_group).name_group;
        let first = if self.name_group(group).kind.is_global() {
            self.name_group(group)
                .file_groups
                .iter()
                .find_map(|&fg| self.file_group(fg).scraps.first().copied())
        } else {
            self.file_group(file_group).scraps.first().copied()
        };
        first != Some(scrap)
    }

    pub fn scrap_count(&self) -> usize {
        self.scraps.len()
    }
}
