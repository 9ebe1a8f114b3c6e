//! # Block Parsing
//!
//! Line-based block parsing in two steps.
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (indentation, blockquote depth, fence
//!    detection, blank status, block openers).
//! 2. **Block Construction** (`crate::parsing::builder`): the document
//!    parser combines those facts with extension block parsers and emits
//!    `Block`s as blocks open and close.
//!
//! ## Modules
//!
//! - **`types`**: the closed `Block` sum type, `BlockKind`, `Document`
//! - **`kinds`**: block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers

pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::{Inline, Paragraph};
pub use types::{Block, BlockKind, Document, MarkdownBlock};
