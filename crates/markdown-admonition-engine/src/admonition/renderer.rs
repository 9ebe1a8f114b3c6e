use std::sync::{Arc, LazyLock};

use html_escape::encode_text;
use regex::Regex;

use crate::parsing::blocks::{Block, BlockKind, Paragraph};
use crate::rendering::{
    ChildNodeRenderer, NodeRenderer, RenderError,
    html::{HtmlElement, strip_tags},
};

use super::AdmonitionRegistry;

static BARE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[!(?-u:\w)+(-(?-u:\w)+)*\]$").expect("valid marker pattern")
});
static MARKER_WITH_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[!(?-u:\w)+(-(?-u:\w)+)*\]\s*(.*)$").expect("valid marker title pattern")
});

/// Renders [`Admonition`](super::Admonition) blocks.
///
/// ```text
/// <div class="alert {style} admonition admonition-{type}">
/// <div class="admonition-title lead mb-2 text-uppercase"><i class="{icon}" aria-hidden="true"></i> <strong>{title}</strong></div>
/// <div class="admonition-body">{body}</div>
/// </div>
/// ```
#[derive(Debug, Clone)]
pub struct AdmonitionRenderer {
    registry: Arc<AdmonitionRegistry>,
}

impl AdmonitionRenderer {
    pub fn new(registry: Arc<AdmonitionRegistry>) -> Self {
        Self { registry }
    }
}

impl NodeRenderer for AdmonitionRenderer {
    fn render(
        &self,
        node: &Block,
        children: &dyn ChildNodeRenderer,
    ) -> Result<String, RenderError> {
        let Block::Admonition(admonition) = node else {
            return Err(RenderError::TypeMismatch {
                expected: BlockKind::Admonition,
                found: node.kind(),
            });
        };
        let kind = admonition.admonition_type();
        let ty = self.registry.lookup(kind);
        let default_title = encode_text(ty.title()).into_owned();

        let (title, body) = match admonition.children().split_first() {
            Some((Block::Paragraph(first), rest)) => {
                let (title, lead) = split_title(first, default_title, children);
                let lead = lead.map(Block::Paragraph);
                (title, render_body(lead.iter().chain(rest), children)?)
            }
            _ => {
                let body = children.render_nodes(admonition.children())?;
                (default_title, body.trim_end().to_string())
            }
        };

        let icon = HtmlElement::new("i")
            .attr("class", ty.icon())
            .attr("aria-hidden", "true");
        let title = HtmlElement::new("div")
            .attr("class", "admonition-title lead mb-2 text-uppercase")
            .contents(format!("{icon} <strong>{title}</strong>"));
        let body = HtmlElement::new("div")
            .attr("class", "admonition-body")
            .contents(body);
        let wrapper = HtmlElement::new("div")
            .attr(
                "class",
                format!("alert {} admonition admonition-{kind}", ty.style_class()),
            )
            .contents(format!("\n{title}\n{body}\n"));

        Ok(format!("{wrapper}\n"))
    }
}

/// Picks the title out of the first paragraph.
///
/// Returns the title HTML and, when the first paragraph continued past an
/// inline `[!TYPE] title` marker line, the remaining lines as a paragraph.
fn split_title(
    first: &Paragraph,
    default_title: String,
    children: &dyn ChildNodeRenderer,
) -> (String, Option<Paragraph>) {
    let (first_line, rest) = first.split_first_line();
    let rendered = children.render_inlines(first_line);
    let line = rendered.trim();

    if line.is_empty() || BARE_MARKER.is_match(line) {
        return (default_title, None);
    }

    if let Some(caps) = MARKER_WITH_TITLE.captures(line) {
        let title = caps.get(2).map_or("", |m| m.as_str().trim());
        let title = if title.is_empty() {
            default_title
        } else {
            title.to_string()
        };
        return (title, rest.filter(|p| !p.is_blank()));
    }

    (line.to_string(), None)
}

fn render_body<'b>(
    blocks: impl Iterator<Item = &'b Block>,
    children: &dyn ChildNodeRenderer,
) -> Result<String, RenderError> {
    let mut body = String::new();
    for block in blocks {
        let html = children.render_nodes(std::slice::from_ref(block))?;
        let html = html.trim_end();
        if strip_tags(html).trim().is_empty() {
            continue;
        }
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(html);
    }
    Ok(body)
}
