//! # Rendering
//!
//! Turns a parsed [`Document`] into HTML.
//!
//! Host blocks (markdown chunks and paragraphs) are rendered by
//! pulldown-cmark. Extension blocks are rendered by the [`NodeRenderer`]
//! registered for their [`BlockKind`]; a registered renderer also overrides
//! the built-in one for its kind.

pub mod html;

use log::trace;
use thiserror::Error;

use crate::environment::Environment;
use crate::parsing::blocks::{Block, BlockKind, Document, Inline};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Renderer for {expected} blocks was given a {found} block")]
    TypeMismatch { expected: BlockKind, found: BlockKind },

    #[error("No renderer registered for {0} blocks")]
    MissingRenderer(BlockKind),
}

/// Renders the children of a node back through the host.
pub trait ChildNodeRenderer {
    /// Renders blocks in order and concatenates their HTML.
    fn render_nodes(&self, nodes: &[Block]) -> Result<String, RenderError>;

    /// Renders inline runs as literal text.
    fn render_inlines(&self, inlines: &[Inline]) -> String;
}

/// Renders one kind of block.
pub trait NodeRenderer: Send + Sync {
    fn render(
        &self,
        node: &Block,
        children: &dyn ChildNodeRenderer,
    ) -> Result<String, RenderError>;
}

/// Document renderer bound to an [`Environment`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer<'e> {
    env: &'e Environment,
}

impl<'e> HtmlRenderer<'e> {
    pub fn new(env: &'e Environment) -> Self {
        Self { env }
    }

    pub fn render_document(&self, doc: &Document) -> Result<String, RenderError> {
        self.render_nodes(&doc.children)
    }

    pub fn render_block(&self, block: &Block) -> Result<String, RenderError> {
        if let Some(renderer) = self.env.renderer(block.kind()) {
            trace!("rendering {} block with registered renderer", block.kind());
            return renderer.render(block, self);
        }
        match block {
            Block::Markdown(m) => Ok(self.markdown(m.source())),
            Block::Paragraph(p) => Ok(self.markdown(&p.source())),
            Block::Admonition(_) => Err(RenderError::MissingRenderer(BlockKind::Admonition)),
        }
    }

    fn markdown(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_markdown(&mut out, source, self.env.options(), self.env.html_input());
        out
    }
}

impl ChildNodeRenderer for HtmlRenderer<'_> {
    fn render_nodes(&self, nodes: &[Block]) -> Result<String, RenderError> {
        let mut out = String::new();
        for node in nodes {
            out.push_str(&self.render_block(node)?);
        }
        Ok(out)
    }

    fn render_inlines(&self, inlines: &[Inline]) -> String {
        html::render_text_runs(inlines)
    }
}
