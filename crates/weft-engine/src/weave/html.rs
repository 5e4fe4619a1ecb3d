use std::fmt::{self, Write};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::document::{Element, ElementKind, FileId, ReferenceLinks, SourceFile};
use crate::scraps::{NameGroupId, ScrapRegistry};

/// Fixed-tag renderer for one document's element tree.
pub struct HtmlWriter<'p> {
    pub sources: &'p [SourceFile],
    pub registry: &'p ScrapRegistry,
    pub links: &'p ReferenceLinks,
}

impl HtmlWriter<'_> {
    pub fn elements<W: Write>(&self, out: &mut W, file: FileId, elements: &[Element]) -> fmt::Result {
        for element in elements {
            self.element(out, file, element)?;
        }
        Ok(())
    }

    pub fn element<W: Write>(&self, out: &mut W, file: FileId, element: &Element) -> fmt::Result {
        let source = &self.sources[file.index()];
        match element.kind {
            ElementKind::Text => {
                if let Some(span) = element.text {
                    out.write_str(source.slice(span))?;
                }
                Ok(())
            }
            ElementKind::NewLine => out.write_char('\n'),
            ElementKind::LessThan => out.write_str("&lt;"),
            ElementKind::GreaterThan => out.write_str("&gt;"),
            ElementKind::Ampersand => out.write_str("&amp;"),
            ElementKind::HtmlBlock => self.elements(out, file, &element.children),
            ElementKind::LinkDefinition => Ok(()),
            ElementKind::HorizontalRule => out.write_str("<hr>\n"),
            ElementKind::Heading { level } => {
                write!(out, "<h{level}>")?;
                self.elements(out, file, &element.children)?;
                writeln!(out, "</h{level}>")
            }
            ElementKind::CodeBlock => {
                out.write_str("<pre><code")?;
                if let Some(class) = element.attr("class") {
                    write!(out, " class=\"{}\"", encode_double_quoted_attribute(source.slice(class)))?;
                }
                out.write_char('>')?;
                self.elements(out, file, &element.children)?;
                out.write_str("</code></pre>\n")
            }
            ElementKind::Link => {
                out.write_str("<a")?;
                for attr in &element.attrs {
                    write!(
                        out,
                        " {}=\"{}\"",
                        attr.name,
                        encode_double_quoted_attribute(source.slice(attr.value))
                    )?;
                }
                out.write_char('>')?;
                self.elements(out, file, &element.children)?;
                out.write_str("</a>")
            }
            ElementKind::ReferenceLink { link } => {
                let link = self.links.get(link);
                let Some(url) = link.url else {
                    log::debug!("undefined reference link `{}`", source.slice(link.id));
                    return self.elements(out, file, &element.children);
                };
                write!(out, "<a href=\"{}\"", encode_double_quoted_attribute(source.slice(url)))?;
                if let Some(title) = link.title {
                    write!(out, " title=\"{}\"", encode_double_quoted_attribute(source.slice(title)))?;
                }
                out.write_char('>')?;
                self.elements(out, file, &element.children)?;
                out.write_str("</a>")
            }
            ElementKind::ScrapDef { scrap } => {
                let group = self.registry.name_group_of(scrap);
                out.write_str("<div class='scrap-def'>&#x3008;")?;
                self.scrap_name(out, group)?;
                out.write_str("&#x3009;")?;
                if self.registry.is_continuation(scrap) {
                    out.write_char('+')?;
                }
                out.write_str("&#x2261;<br />\n")?;
                self.element(out, file, &self.registry.scrap(scrap).body)?;
                out.write_str("</div>\n")
            }
            ElementKind::ScrapRef { group, .. } => {
                let group = self.registry.file_group(group).name_group;
                out.write_str("<span class='scrap-ref'>&#x3008;")?;
                self.scrap_name(out, group)?;
                out.write_str("&#x3009;</span>")
            }
            kind => {
                let (open, close) = tags(kind);
                out.write_str(open)?;
                self.elements(out, file, &element.children)?;
                out.write_str(close)
            }
        }
    }

    /// The display name when one was given, otherwise the escaped id.
    fn scrap_name<W: Write>(&self, out: &mut W, group: NameGroupId) -> fmt::Result {
        let group = self.registry.name_group(group);
        out.write_str("<span class='scrap-name'>")?;
        match &group.display_name {
            Some(name) => self.elements(out, name.file, &name.elements)?,
            None => out.write_str(&encode_text(&group.id))?,
        }
        out.write_str("</span>")
    }
}

fn tags(kind: ElementKind) -> (&'static str, &'static str) {
    match kind {
        ElementKind::Paragraph => ("<p>", "</p>\n"),
        ElementKind::BlockQuote => ("<blockquote>\n", "</blockquote>\n"),
        ElementKind::OrderedList => ("<ol>\n", "</ol>\n"),
        ElementKind::UnorderedList => ("<ul>\n", "</ul>\n"),
        ElementKind::ListItem => ("<li>", "</li>\n"),
        ElementKind::Table => ("<table>\n", "</table>\n"),
        ElementKind::TableRow => ("<tr>", "</tr>\n"),
        ElementKind::TableHeader => ("<th>", "</th>"),
        ElementKind::TableCell => ("<td>", "</td>"),
        ElementKind::Emphasis => ("<em>", "</em>"),
        ElementKind::Strong => ("<strong>", "</strong>"),
        ElementKind::InlineCode => ("<code>", "</code>"),
        _ => ("", ""),
    }
}

/// Plain text of an element tree, entities as the characters they stand for.
pub fn plain_text(source: &SourceFile, elements: &[Element], out: &mut String) {
    for element in elements {
        match element.kind {
            ElementKind::Text => {
                if let Some(span) = element.text {
                    out.push_str(source.slice(span));
                }
            }
            ElementKind::NewLine => out.push(' '),
            kind => {
                if let Some(c) = kind.entity_char() {
                    out.push(c);
                }
                plain_text(source, &element.children, out);
            }
        }
    }
}
