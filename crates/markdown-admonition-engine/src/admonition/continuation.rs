use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{
    blocks::{
        Block, BlockKind, Paragraph,
        kinds::{BlockQuote, CodeFence, FenceSig},
    },
    cursor::Cursor,
    parser::{BlockContinue, BlockContinueParser, ParserState},
};

use super::Admonition;

static NESTED_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s*>\s*").expect("valid nested quote pattern"));
static LINE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s*").expect("valid quote marker pattern"));

/// Collects the quoted lines following an admonition opener.
///
/// Content is grouped into paragraphs: a bare `>` line ends the current
/// group and the next content line starts a new one. The first child is
/// always the title paragraph (empty when the opener had no title).
///
/// Inside a fenced code block blank lines belong to the code, so the whole
/// fence stays in one group.
#[derive(Debug)]
pub struct AdmonitionParser {
    block: Admonition,
    /// Index of the paragraph receiving lines.
    current: usize,
    /// Next content line opens a new paragraph instead of extending `current`.
    start_new: bool,
    is_first_line: bool,
    has_title: bool,
    /// Fence opened by a body line and not yet closed.
    fence: Option<FenceSig>,
}

impl AdmonitionParser {
    pub fn new(admonition_type: &str, title: &str) -> Self {
        let mut block = Admonition::new(admonition_type);
        let has_title = !title.is_empty();
        let mut first = Paragraph::new();
        if has_title {
            first.push_text(title);
        }
        let current = block.append_child(first);
        Self {
            block,
            current,
            start_new: false,
            // Kept set when a title exists so the first body line opens its
            // own paragraph instead of joining the title line.
            is_first_line: true,
            has_title,
            fence: None,
        }
    }

    fn append(&mut self, text: &str) {
        if self.start_new {
            self.current = self.block.append_child(Paragraph::new());
            self.start_new = false;
        }
        if let Some(p) = self.block.paragraph_mut(self.current) {
            if p.has_content() {
                p.push_line_break();
            }
            p.push_text(text);
        }
    }
}

impl BlockContinueParser for AdmonitionParser {
    fn kind(&self) -> BlockKind {
        BlockKind::Admonition
    }

    fn is_container(&self) -> bool {
        true
    }

    fn can_have_lazy_continuation_lines(&self) -> bool {
        // Unquoted lines never continue fenced code.
        self.fence.is_none()
    }

    fn can_contain(&self, _child: BlockKind) -> bool {
        true
    }

    fn try_continue(
        &mut self,
        cursor: &mut Cursor<'_>,
        _state: &ParserState,
    ) -> Option<BlockContinue> {
        let line = cursor.line();
        if !BlockQuote::is_quoted(line) {
            return None;
        }

        if NESTED_QUOTE.is_match(line) {
            cursor.advance_by(BlockQuote::marker_run(line));
            return Some(BlockContinue::at(cursor));
        }

        if line.trim() == ">" {
            if !self.has_title && self.is_first_line {
                self.is_first_line = false;
            } else if self.fence.is_none() {
                self.start_new = true;
            }
            return Some(BlockContinue::at(cursor));
        }

        cursor.advance_by(BlockQuote::marker_run(line));
        Some(BlockContinue::at(cursor))
    }

    fn add_line(&mut self, line: &str) {
        let line = LINE_MARKER.replace(line, "");

        if self.is_first_line {
            self.is_first_line = false;
            if !self.has_title {
                // The opener consumed the marker line; a bare first line
                // after it is dropped.
                return;
            }
            self.start_new = true;
        }

        if let Some(open) = self.fence {
            if CodeFence::closes(open, CodeFence::sig(&line)) {
                self.fence = None;
            }
            let text = if line.trim().is_empty() { "" } else { &*line };
            self.append(text);
            return;
        }

        if line.trim().is_empty() {
            self.start_new = true;
            return;
        }

        self.fence = CodeFence::sig(&line);
        self.append(&line);
    }

    fn close_block(&mut self) {
        if self.start_new {
            return;
        }
        if let Some(p) = self.block.paragraph_mut(self.current)
            && p.has_content()
        {
            p.push_line_break();
        }
    }

    fn into_block(self: Box<Self>) -> Block {
        Block::Admonition(self.block)
    }
}
