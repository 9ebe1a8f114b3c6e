//! Integration tests for the parsing module.
//!
//! Uses snapshot testing with a plain-text outline of the block tree.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

mod invariants;

use pretty_assertions::assert_eq;

use crate::admonition::AdmonitionStartParser;
use crate::parsing::{
    blocks::{Block, Document},
    parse_document,
    parser::BlockStartParser,
};

fn start_parsers() -> Vec<Box<dyn BlockStartParser>> {
    vec![Box::new(AdmonitionStartParser)]
}

fn parse(md: &str) -> Document {
    let doc = parse_document(md, &start_parsers());
    invariants::check(&doc);
    doc
}

// Fixture-based snapshot tests

#[test]
fn fixture_basic_admonitions() {
    assert_fixture("basic_admonitions");
}

#[test]
fn fixture_lazy_and_nested() {
    assert_fixture("lazy_and_nested");
}

#[test]
fn fixture_fences_and_code() {
    assert_fixture("fences_and_code");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse(&md);
    let snap = normalize::outline(&doc);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

// Builder behavior

#[test]
fn empty_document() {
    assert!(parse("").children.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n\n\n").children.is_empty());
}

#[test]
fn opener_without_start_parsers_stays_markdown() {
    let md = "> [!NOTE] Title\n> body\n";
    let doc = parse_document(md, &[]);
    assert_eq!(doc.children.len(), 1);
    assert!(matches!(&doc.children[0], Block::Markdown(m) if m.source() == md));
}

#[test]
fn opener_interrupts_paragraph() {
    let doc = parse("Para\n> [!NOTE] Title\n> body\n");
    assert_eq!(doc.children.len(), 2);
    assert!(matches!(&doc.children[0], Block::Markdown(m) if m.source() == "Para\n"));
    assert!(matches!(&doc.children[1], Block::Admonition(a) if a.admonition_type() == "note"));
}

#[test]
fn opener_inside_host_quote_is_quote_content() {
    let md = "> quote\n> [!NOTE] not an opener\n";
    let doc = parse(md);
    assert_eq!(doc.children.len(), 1);
    assert!(matches!(&doc.children[0], Block::Markdown(_)));
}

#[test]
fn blank_line_closes_admonition() {
    let doc = parse("> [!TIP] Title\n> body\n\n> after\n");
    assert_eq!(doc.children.len(), 2);
    assert!(matches!(&doc.children[1], Block::Markdown(m) if m.source() == "\n> after\n"));
}

#[test]
fn untitled_first_line_is_consumed() {
    let doc = parse("> [!WARNING]\n> lost\n> kept\n");
    let Block::Admonition(a) = &doc.children[0] else {
        panic!("expected admonition, got {:?}", doc.children[0]);
    };
    assert_eq!(a.children().len(), 1);
    assert!(matches!(&a.children()[0], Block::Paragraph(p) if p.source() == "kept\n"));
}

#[test]
fn consecutive_admonitions() {
    let doc = parse("> [!NOTE] One\n> [!TIP] Two\n");
    // The second opener is a quoted line, so it continues the first block.
    assert_eq!(doc.children.len(), 1);

    let doc = parse("> [!NOTE] One\n\n> [!TIP] Two\n");
    assert_eq!(doc.children.len(), 2);
}

#[test]
fn opener_inside_html_block_is_html() {
    let md = "<div>\n> [!NOTE] x\n</div>\n";
    let doc = parse(md);
    assert_eq!(doc.children.len(), 1);
    assert!(matches!(&doc.children[0], Block::Markdown(m) if m.source() == md));

    // Comments run across blank lines until their closing marker.
    let md = "<!--\n\n> [!NOTE] x\n-->\n";
    let doc = parse(md);
    assert_eq!(doc.children.len(), 1);
    assert!(matches!(&doc.children[0], Block::Markdown(m) if m.source() == md));
}

#[test]
fn opener_after_html_block_ends() {
    let doc = parse("<div>\n</div>\n\n> [!NOTE] x\n");
    assert_eq!(doc.children.len(), 2);
    assert!(matches!(&doc.children[1], Block::Admonition(a) if a.admonition_type() == "note"));

    let doc = parse("<!-- a\nb -->\n> [!TIP] y\n");
    assert_eq!(doc.children.len(), 2);
    assert!(matches!(&doc.children[0], Block::Markdown(m) if m.source() == "<!-- a\nb -->\n"));
    assert!(matches!(&doc.children[1], Block::Admonition(a) if a.admonition_type() == "tip"));
}

#[test]
fn unquoted_line_ends_fenced_body() {
    let doc = parse("> [!NOTE] Code\n> ```\n> a\nb\n");
    assert_eq!(doc.children.len(), 2);
    assert!(matches!(&doc.children[1], Block::Markdown(m) if m.source() == "b\n"));
}
