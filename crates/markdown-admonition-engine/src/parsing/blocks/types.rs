use std::fmt;

use crate::admonition::Admonition;

use super::kinds::Paragraph;

/// Discriminant of a [`Block`], used to key renderer registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    Paragraph,
    Markdown,
    Admonition,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Markdown => "markdown",
            BlockKind::Admonition => "admonition",
        };
        f.write_str(name)
    }
}

/// A chunk of CommonMark source owned by the host engine.
///
/// Everything outside extension blocks ends up here and is rendered by
/// pulldown-cmark as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownBlock {
    source: String,
}

impl MarkdownBlock {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    Markdown(MarkdownBlock),
    Admonition(Admonition),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::Markdown(_) => BlockKind::Markdown,
            Block::Admonition(_) => BlockKind::Admonition,
        }
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Admonition> for Block {
    fn from(a: Admonition) -> Self {
        Block::Admonition(a)
    }
}

/// The root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Block>,
}
