//! # markdown-admonition-engine
//!
//! CommonMark to HTML with admonition (callout) blocks:
//!
//! ```markdown
//! > [!NOTE] Important Information
//! >
//! > Body with **bold** and *italic* text.
//! ```
//!
//! Documents are scanned line by line ([`parsing`]). Extension blocks are
//! opened by registered start parsers and fed lines until they close;
//! everything else is handed to pulldown-cmark unchanged. [`rendering`]
//! turns the resulting [`Document`] into HTML.

pub mod admonition;
pub mod converter;
pub mod environment;
pub mod parsing;
pub mod rendering;

pub use admonition::{
    Admonition, AdmonitionExtension, AdmonitionRegistry, AdmonitionRegistryBuilder,
    AdmonitionType, AdmonitionTypeDraft, RegistryError,
};
pub use converter::MarkdownConverter;
pub use environment::{Environment, EnvironmentBuilder, Extension, HtmlInput};
pub use parsing::blocks::{Block, BlockKind, Document, Inline, MarkdownBlock, Paragraph};
pub use rendering::{ChildNodeRenderer, HtmlRenderer, NodeRenderer, RenderError};
