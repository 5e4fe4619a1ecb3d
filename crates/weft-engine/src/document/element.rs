use crate::scraps::{FileGroupId, ScrapId};

use super::links::ReferenceLinkId;
use super::span::{SourceLoc, Span};

/// The closed set of block and span variants a document tree is built from.
///
/// Variants that wire into the rest of the run carry typed handles instead of
/// string-keyed attributes: a scrap definition points at its registry entry,
/// a scrap reference at the file group it resolves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading { level: u8 },
    Paragraph,
    BlockQuote,
    CodeBlock,
    HorizontalRule,
    OrderedList,
    UnorderedList,
    ListItem,
    Table,
    TableRow,
    TableHeader,
    TableCell,
    Text,
    HtmlBlock,
    ScrapDef { scrap: ScrapId },
    /// `resume_at` is the position just after the closing `>>` in the
    /// referencing file.
    ScrapRef { group: FileGroupId, resume_at: SourceLoc },
    NewLine,
    Emphasis,
    Strong,
    InlineCode,
    Link,
    ReferenceLink { link: ReferenceLinkId },
    LessThan,
    GreaterThan,
    Ampersand,
    /// Marker left behind by `[id]: url`; renders nothing.
    LinkDefinition,
}

impl ElementKind {
    /// Short stable name, used by outlines and log lines.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Heading { .. } => "Heading",
            ElementKind::Paragraph => "Paragraph",
            ElementKind::BlockQuote => "BlockQuote",
            ElementKind::CodeBlock => "CodeBlock",
            ElementKind::HorizontalRule => "HorizontalRule",
            ElementKind::OrderedList => "OrderedList",
            ElementKind::UnorderedList => "UnorderedList",
            ElementKind::ListItem => "ListItem",
            ElementKind::Table => "Table",
            ElementKind::TableRow => "TableRow",
            ElementKind::TableHeader => "TableHeader",
            ElementKind::TableCell => "TableCell",
            ElementKind::Text => "Text",
            ElementKind::HtmlBlock => "HtmlBlock",
            ElementKind::ScrapDef { .. } => "ScrapDef",
            ElementKind::ScrapRef { .. } => "ScrapRef",
            ElementKind::NewLine => "NewLine",
            ElementKind::Emphasis => "Emphasis",
            ElementKind::Strong => "Strong",
            ElementKind::InlineCode => "InlineCode",
            ElementKind::Link => "Link",
            ElementKind::ReferenceLink { .. } => "ReferenceLink",
            ElementKind::LessThan => "LessThan",
            ElementKind::GreaterThan => "GreaterThan",
            ElementKind::Ampersand => "Ampersand",
            ElementKind::LinkDefinition => "LinkDefinition",
        }
    }

    /// Kinds that never carry children.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            ElementKind::Text
                | ElementKind::NewLine
                | ElementKind::HorizontalRule
                | ElementKind::ScrapDef { .. }
                | ElementKind::ScrapRef { .. }
                | ElementKind::LessThan
                | ElementKind::GreaterThan
                | ElementKind::Ampersand
                | ElementKind::LinkDefinition
        )
    }

    /// The literal character an entity marker stands for.
    pub fn entity_char(self) -> Option<char> {
        match self {
            ElementKind::LessThan => Some('<'),
            ElementKind::GreaterThan => Some('>'),
            ElementKind::Ampersand => Some('&'),
            _ => None,
        }
    }
}

/// A markup attribute such as `href` or `class`, valued by a source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: Span,
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    /// Literal text: the run of a `Text` element, or the id of a `ScrapRef`.
    pub text: Option<Span>,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            text: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(span: Span) -> Self {
        Self {
            text: Some(span),
            ..Self::new(ElementKind::Text)
        }
    }

    pub fn with_children(kind: ElementKind, children: Vec<Element>) -> Self {
        Self {
            children,
            ..Self::new(kind)
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: &'static str, value: Span) -> Self {
        self.attrs.push(Attribute { name, value });
        self
    }

    pub fn attr(&self, name: &str) -> Option<Span> {
        self.attrs.iter().find(|a| a.name == name).map(|a| a.value)
    }

    /// Depth-first pre-order walk over this element and its descendants.
    pub fn walk(&self, visit: &mut impl FnMut(&Element)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
