use crate::parsing::cursor::Cursor;
use crate::parsing::lines::LineRef;

use super::{
    kinds::{BlockQuote, CodeFence, FenceSig},
    open::{BlockOpen, try_open_leaf},
};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to surrounding
/// context; the builder combines these facts with its own state.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 1-based line number.
    pub number: usize,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Columns of leading whitespace.
    pub indent: usize,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: u8,
    /// If the line (without quote prefixes) looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    /// Block opener at the start of the unquoted line, if any.
    pub opens: Option<BlockOpen>,
}

impl LineClass {
    /// Whether this line would end an open paragraph rather than extend it.
    pub fn interrupts_paragraph(&self) -> bool {
        self.opens.is_some_and(BlockOpen::interrupts_paragraph)
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef<'_>) -> LineClass {
        let text = lr.text;
        let (qd, idx) = BlockQuote::strip_prefixes(text);
        let remainder = &text[idx..];
        let indent = Cursor::new(text).indent();
        let opens = if qd == 0 && indent < crate::parsing::cursor::CODE_INDENT {
            try_open_leaf(text)
        } else {
            None
        };

        LineClass {
            number: lr.number,
            is_blank: text.trim().is_empty(),
            indent,
            quote_depth: qd,
            fence_sig: CodeFence::sig(remainder),
            opens,
        }
    }
}
