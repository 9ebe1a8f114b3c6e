//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. Classifier and
//! builder code ask these types; they never hardcode `>`, fences or markers.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod html_block;
pub mod list_marker;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::AtxHeading;
pub use html_block::{HtmlBlock, HtmlEnd};
pub use list_marker::ListMarker;
pub use paragraph::{Inline, Paragraph};
pub use thematic_break::ThematicBreak;
