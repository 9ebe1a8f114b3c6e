use crate::parsing::blocks::{Block, Paragraph};

/// An admonition block: its type token and the blocks it contains.
///
/// The first child, when it is a [`Paragraph`], carries the title line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Admonition {
    admonition_type: String,
    children: Vec<Block>,
}

impl Admonition {
    /// The type is stored lowercased, as written (aliases are not resolved).
    pub fn new(admonition_type: &str) -> Self {
        Self {
            admonition_type: admonition_type.to_lowercase(),
            children: vec![],
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Block>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn admonition_type(&self) -> &str {
        &self.admonition_type
    }

    pub fn children(&self) -> &[Block] {
        &self.children
    }

    /// Appends a child and returns its index.
    pub fn append_child(&mut self, child: impl Into<Block>) -> usize {
        self.children.push(child.into());
        self.children.len() - 1
    }

    pub(crate) fn paragraph_mut(&mut self, idx: usize) -> Option<&mut Paragraph> {
        match self.children.get_mut(idx) {
            Some(Block::Paragraph(p)) => Some(p),
            _ => None,
        }
    }
}
