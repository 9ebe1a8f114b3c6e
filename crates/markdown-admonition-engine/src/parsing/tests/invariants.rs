use crate::parsing::blocks::{Block, Document};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Markdown chunks are never empty and never adjacent
/// - Every admonition starts with its title paragraph
/// - Admonition types are stored lowercased
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for pair in doc.children.windows(2) {
        assert!(
            !matches!(pair, [Block::Markdown(_), Block::Markdown(_)]),
            "adjacent markdown chunks: {pair:?}"
        );
    }
    for block in &doc.children {
        match block {
            Block::Markdown(m) => assert!(
                !m.source().trim().is_empty(),
                "blank markdown chunk: {m:?}"
            ),
            Block::Admonition(a) => {
                assert!(
                    matches!(a.children().first(), Some(Block::Paragraph(_))),
                    "admonition without title paragraph: {a:?}"
                );
                assert_eq!(
                    a.admonition_type(),
                    a.admonition_type().to_lowercase(),
                    "admonition type not lowercased"
                );
            }
            Block::Paragraph(_) => {}
        }
    }
}
