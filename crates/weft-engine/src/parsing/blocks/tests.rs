use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::test_support::parse;
use crate::scraps::ScrapKind;

fn outline(text: &str) -> String {
    parse(text).outline()
}

#[test]
fn dashes_under_text_make_a_level_two_heading() {
    assert_eq!(outline("Title\n---\n"), "Heading(2)\n  Text \"Title\"\n");
}

#[test]
fn dashes_alone_make_a_rule() {
    assert_eq!(outline("---\n"), "HorizontalRule\n");
}

#[test]
fn equals_under_text_make_a_level_one_heading() {
    assert_eq!(outline("Title\n=====\n"), "Heading(1)\n  Text \"Title\"\n");
}

#[rstest]
#[case("# One", 1, "One")]
#[case("## Two ##", 2, "Two")]
#[case("######## Deep", 6, "Deep")]
fn atx_headings(#[case] text: &str, #[case] level: u8, #[case] content: &str) {
    assert_eq!(outline(text), format!("Heading({level})\n  Text {content:?}\n"));
}

#[rstest]
#[case("***")]
#[case("_ _ _")]
#[case(" - - - -")]
fn rules(#[case] text: &str) {
    assert_eq!(outline(text), "HorizontalRule\n");
}

#[test]
fn mixed_rule_characters_are_a_paragraph() {
    assert_eq!(outline("-*-\n"), "Paragraph\n  Text \"-*-\"\n  NewLine\n");
}

#[test]
fn paragraphs_split_on_blank_lines() {
    insta::assert_snapshot!(outline("one\ntwo\n\n\nthree\n"), @r#"
    Paragraph
      Text "one"
      NewLine
      Text "two"
      NewLine
    Paragraph
      Text "three"
      NewLine
    "#);
}

#[test]
fn pipe_table_has_header_and_body_rows() {
    insta::assert_snapshot!(outline("|A|B|\n|-|-|\n|1|2|\n"), @r#"
    Table
      TableRow
        TableHeader
          Text "A"
        TableHeader
          Text "B"
      TableRow
        TableCell
          Text "1"
        TableCell
          Text "2"
    "#);
}

#[test]
fn table_without_alignment_row_is_a_paragraph() {
    assert_eq!(
        outline("a | b\nc | d\n"),
        "Paragraph\n  Text \"a | b\"\n  NewLine\n  Text \"c | d\"\n  NewLine\n"
    );
}

#[test]
fn block_quote_keeps_going_across_blank_lines() {
    insta::assert_snapshot!(outline("> a\n> b\n\n> c\n\nafter\n"), @r#"
    BlockQuote
      Paragraph
        Text "a"
        NewLine
        Text "b"
        NewLine
      Paragraph
        Text "c"
        NewLine
    Paragraph
      Text "after"
      NewLine
    "#);
}

#[test]
fn nested_quotes_recurse() {
    assert_eq!(
        outline(">> deep\n"),
        "BlockQuote\n  BlockQuote\n    Paragraph\n      Text \"deep\"\n      NewLine\n"
    );
}

#[test]
fn unordered_list_items() {
    insta::assert_snapshot!(outline("- one\n- two\n"), @r#"
    UnorderedList
      ListItem
        Paragraph
          Text "one"
          NewLine
      ListItem
        Paragraph
          Text "two"
          NewLine
    "#);
}

#[test]
fn ordered_item_takes_indented_paragraph_after_blank() {
    insta::assert_snapshot!(outline("1. first\n\n    second\n"), @r#"
    OrderedList
      ListItem
        Paragraph
          Text "first"
          NewLine
        Paragraph
          Text "second"
          NewLine
    "#);
}

#[test]
fn unindented_paragraph_after_blank_ends_the_list() {
    assert_eq!(
        outline("* a\n\nb\n"),
        "UnorderedList\n  ListItem\n    Paragraph\n      Text \"a\"\n      NewLine\nParagraph\n  Text \"b\"\n  NewLine\n"
    );
}

#[test]
fn fenced_code_keeps_language_and_escapes_nothing_else() {
    insta::assert_snapshot!(outline("```rust\nlet x = *y*;\n```\n"), @r#"
    CodeBlock class="rust"
      Text "let x = *y*;"
      NewLine
    "#);
}

#[test]
fn unterminated_fence_runs_to_the_end() {
    assert_eq!(
        outline("~~~\na\nb"),
        "CodeBlock\n  Text \"a\"\n  NewLine\n  Text \"b\"\n  NewLine\n"
    );
}

#[test]
fn empty_fence_has_no_body() {
    assert_eq!(outline("```\n```\nafter\n"), "CodeBlock\nParagraph\n  Text \"after\"\n  NewLine\n");
}

#[test]
fn fenced_scrap_definition_is_registered() {
    let parsed = parse("```c\n// <<file:main.c>>=\nint x;\n```\n");
    insta::assert_snapshot!(parsed.outline(), @r#"
    ScrapDef main.c [file] @3:1
      CodeBlock class="c"
        Text "int x;"
        NewLine
    "#);
    let group = parsed.registry.lookup("main.c").expect("registered");
    assert_eq!(parsed.registry.name_group(group).kind, ScrapKind::OutputFile);
}

#[test]
fn indented_code_breaks_before_the_next_scrap_header() {
    insta::assert_snapshot!(outline("    <<a>>=\n    x\n\n    <<b>>=\n    y\n"), @r#"
    ScrapDef a [unset] @2:5
      CodeBlock
        Text "x"
        NewLine
    ScrapDef b [unset] @5:5
      CodeBlock
        Text "y"
        NewLine
    "#);
}

#[test]
fn indented_scrap_header_right_after_code_starts_a_new_scrap() {
    // Given two indented scraps with no blank line between them
    let parsed = parse("    <<file:o>>=\n    x\n    <<b>>=\n    y\n");

    // Then the second header opens its own scrap instead of becoming a reference
    assert_eq!(parsed.registry.scrap_count(), 2);
    insta::assert_snapshot!(parsed.outline(), @r#"
    ScrapDef o [file] @2:5
      CodeBlock
        Text "x"
        NewLine
    ScrapDef b [unset] @4:5
      CodeBlock
        Text "y"
        NewLine
    "#);
}

#[test]
fn indented_code_keeps_interior_blank_lines() {
    assert_eq!(
        outline("    a\n\n    b\n"),
        "CodeBlock\n  Text \"a\"\n  NewLine\n  NewLine\n  Text \"b\"\n  NewLine\n"
    );
}

#[test]
fn scrap_reference_at_start_of_code_is_not_a_definition() {
    let parsed = parse("```\n<<helper>>\n```\n");
    assert_eq!(parsed.registry.scrap_count(), 0);
    assert_eq!(parsed.outline(), "CodeBlock\n  ScrapRef helper -> 2:11\n  NewLine\n");
}

#[test]
fn conflicting_kind_keeps_the_first() {
    let parsed = parse("```\n<<global:x>>=\na\n```\n\n```\n<<local:x>>=\nb\n```\n");
    let group = parsed.registry.lookup("x").expect("registered");
    assert_eq!(parsed.registry.name_group(group).kind, ScrapKind::GlobalMacro);
    assert_eq!(parsed.registry.definition_count(group), 2);
    assert_eq!(parsed.diagnostics.len(), 1);
    assert!(parsed.diagnostics[0].message.contains("`x`"));
}

#[test]
fn unknown_kind_marker_is_reported_and_unset() {
    let parsed = parse("```\n<<header:x>>=\na\n```\n");
    let group = parsed.registry.lookup("x").expect("registered");
    assert_eq!(parsed.registry.name_group(group).kind, ScrapKind::Unknown);
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[test]
fn display_name_comes_from_the_first_definition_that_has_one() {
    let parsed = parse("```\n<<x>>=\na\n```\n\n```\n<<x|*Pretty*>>+=\nb\n```\n\n```\n<<x|Other>>+=\nc\n```\n");
    let group = parsed.registry.lookup("x").expect("registered");
    let name = parsed.registry.name_group(group).display_name.as_ref().expect("named");
    assert_eq!(
        crate::snapshot::outline(&parsed.source, &parsed.registry, &name.elements),
        "Emphasis\n  Text \"Pretty\"\n"
    );
}

#[test]
fn html_block_runs_to_closing_tag() {
    insta::assert_snapshot!(outline("<div>\n*x* & y\n</div>\nafter\n"), @r#"
    HtmlBlock
      Text "<div>"
      NewLine
      Text "*x* & y"
      NewLine
      Text "</div>"
      NewLine
    Paragraph
      Text "after"
      NewLine
    "#);
}

#[test]
fn self_closing_html_line_stands_alone() {
    assert_eq!(
        outline("<br/>\ntext\n"),
        "HtmlBlock\n  Text \"<br/>\"\n  NewLine\nParagraph\n  Text \"text\"\n  NewLine\n"
    );
}

#[test]
fn link_definition_renders_nothing_but_defines_the_link() {
    let parsed = parse("See [docs][].\n\n[Docs]: http://x.y\n");
    assert!(parsed.doc.links.lookup("DOCS").is_some_and(|l| l.url.is_some()));
    assert!(parsed.outline().ends_with("LinkDefinition\n"));
}

#[test]
fn non_ascii_prose_parses_as_text() {
    assert_eq!(
        outline("Café au lait, *naïve* <<ça>>\n"),
        "Paragraph\n  Text \"Café au lait, \"\n  Emphasis\n    Text \"naïve\"\n  Text \" \"\n  ScrapRef ça -> 1:29\n  NewLine\n"
    );
}

#[test]
fn non_ascii_scrap_id_and_body() {
    let parsed = parse("```\n<<file:naïve.c>>=\nputs(\"héllo\"); // <<général>>\n```\n");
    insta::assert_snapshot!(parsed.outline(), @r#"
    ScrapDef naïve.c [file] @3:1
      CodeBlock
        Text "puts(\"héllo\"); // "
        ScrapRef général -> 3:30
        NewLine
    "#);
    crate::snapshot::invariants(&parsed.source, parsed.elements());
}

#[test]
fn link_title_after_non_ascii_url() {
    let parsed = parse("[a]: /café \"Thé\"\n");
    let link = parsed.doc.links.lookup("a").expect("link defined");
    assert_eq!(link.title.map(|t| parsed.source.slice(t)), Some("Thé"));
}
