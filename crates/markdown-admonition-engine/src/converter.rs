use log::debug;

use crate::environment::Environment;
use crate::parsing::{blocks::Document, parse_document};
use crate::rendering::{HtmlRenderer, RenderError};

/// Markdown to HTML in one call.
///
/// ```
/// use markdown_admonition_engine::MarkdownConverter;
///
/// let html = MarkdownConverter::default()
///     .convert("> [!TIP] Try this\n>\n> It works.\n")
///     .unwrap();
/// assert!(html.contains("<strong>Try this</strong>"));
/// ```
#[derive(Debug)]
pub struct MarkdownConverter {
    env: Environment,
}

impl MarkdownConverter {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn parse(&self, markdown: &str) -> Document {
        parse_document(markdown, self.env.start_parsers())
    }

    pub fn render(&self, doc: &Document) -> Result<String, RenderError> {
        HtmlRenderer::new(&self.env).render_document(doc)
    }

    pub fn convert(&self, markdown: &str) -> Result<String, RenderError> {
        let doc = self.parse(markdown);
        debug!("parsed {} top-level block(s)", doc.children.len());
        self.render(&doc)
    }
}

impl Default for MarkdownConverter {
    /// CommonMark with the built-in admonition types.
    fn default() -> Self {
        Self::new(Environment::with_admonitions())
    }
}
