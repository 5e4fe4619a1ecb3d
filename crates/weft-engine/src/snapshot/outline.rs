use std::fmt::Write;

use crate::document::{Element, ElementKind, SourceFile};
use crate::scraps::ScrapRegistry;

/// Renders `elements` as one line per element, children indented by two
/// spaces. Scrap definitions show their registered body beneath them.
///
/// ```text
/// ScrapDef main.c [file] @3:1
///   CodeBlock class="c"
///     Text "int x;"
///     NewLine
/// ```
pub fn outline(source: &SourceFile, registry: &ScrapRegistry, elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        write_element(&mut out, source, registry, element, 0);
    }
    out
}

fn write_element(
    out: &mut String,
    source: &SourceFile,
    registry: &ScrapRegistry,
    element: &Element,
    depth: usize,
) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(element.kind.name());

    // Writing into a String cannot fail.
    let _ = match element.kind {
        ElementKind::Heading { level } => write!(out, "({level})"),
        ElementKind::ScrapDef { scrap } => {
            let def = registry.scrap(scrap);
            let group = registry.name_group(registry.name_group_of(scrap));
            write!(
                out,
                " {} [{}] @{}:{}",
                group.id,
                group.kind.marker(),
                def.loc.line,
                def.loc.col
            )
        }
        ElementKind::ScrapRef { group, resume_at } => {
            let group = registry.name_group(registry.file_group(group).name_group);
            write!(out, " {} -> {}:{}", group.id, resume_at.line, resume_at.col)
        }
        ElementKind::Text => match element.text {
            Some(span) => write!(out, " {:?}", source.slice(span)),
            None => Ok(()),
        },
        _ => Ok(()),
    };
    for attr in &element.attrs {
        let _ = write!(out, " {}={:?}", attr.name, source.slice(attr.value));
    }
    out.push('\n');

    for child in &element.children {
        write_element(out, source, registry, child, depth + 1);
    }
    if let ElementKind::ScrapDef { scrap } = element.kind {
        write_element(out, source, registry, &registry.scrap(scrap).body, depth + 1);
    }
}
