use std::collections::HashMap;

use super::span::Span;

/// Handle into one file's [`ReferenceLinks`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceLinkId(usize);

/// A `[text][id]` target, filled in by a matching `[id]: url "title"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLink {
    pub id: Span,
    pub url: Option<Span>,
    pub title: Option<Span>,
}

/// Per-file reference link table, keyed case-insensitively by id.
///
/// An entry is created by whichever comes first, the definition or a use;
/// later definitions overwrite url and title.
#[derive(Debug, Default)]
pub struct ReferenceLinks {
    links: Vec<ReferenceLink>,
    by_key: HashMap<String, ReferenceLinkId>,
}

impl ReferenceLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_or_create(&mut self, id: Span, text: &str) -> ReferenceLinkId {
        let key = id.slice(text).to_ascii_lowercase();
        if let Some(&existing) = self.by_key.get(&key) {
            return existing;
        }
        let handle = ReferenceLinkId(self.links.len());
        self.links.push(ReferenceLink {
            id,
            url: None,
            title: None,
        });
        self.by_key.insert(key, handle);
        handle
    }

    pub fn define(&mut self, id: Span, text: &str, url: Span, title: Option<Span>) -> ReferenceLinkId {
        let handle = self.find_or_create(id, text);
        let link = &mut self.links[handle.0];
        link.url = Some(url);
        if title.is_some() {
            link.title = title;
        }
        handle
    }

    pub fn get(&self, id: ReferenceLinkId) -> &ReferenceLink {
        &self.links[id.0]
    }

    pub fn lookup(&self, key: &str) -> Option<&ReferenceLink> {
        self.by_key
            .get(&key.to_ascii_lowercase())
            .map(|&handle| self.get(handle))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let text = "[Rust]: https://rust-lang.org\n[rust][]";
        let mut links = ReferenceLinks::new();
        let defined = links.define(Span::new(1, 5), text, Span::new(8, 29), None);
        let used = links.find_or_create(Span::new(31, 35), text);

        assert_eq!(defined, used);
        assert_eq!(links.len(), 1);
        let url = links.lookup("RUST").and_then(|l| l.url).map(|s| s.slice(text));
        assert_eq!(url, Some("https://rust-lang.org"));
    }

    #[test]
    fn use_before_definition_is_filled_in_later() {
        let text = "x [y] y: u";
        let mut links = ReferenceLinks::new();
        let used = links.find_or_create(Span::new(3, 4), text);
        assert_eq!(links.get(used).url, None);

        links.define(Span::new(6, 7), text, Span::new(9, 10), None);
        assert_eq!(links.get(used).url, Some(Span::new(9, 10)));
    }
}
