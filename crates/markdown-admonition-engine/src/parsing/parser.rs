//! Extension points for block parsing.
//!
//! A [`BlockStartParser`] looks at lines outside any open extension block and
//! may open one by returning a [`BlockStart`]. The returned
//! [`BlockContinueParser`] then owns the block until it declines a line, at
//! which point the host closes it and takes the finished [`Block`].

use std::fmt;

use super::blocks::{Block, BlockKind};
use super::cursor::Cursor;

/// What the host knows about its own state when offering a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserState {
    /// 1-based number of the line being offered.
    pub line_number: usize,
    /// Kind of the block currently collecting lines, if any.
    pub active_block: Option<BlockKind>,
    /// Whether a host paragraph is open (lazy continuation is possible).
    pub paragraph_open: bool,
}

/// Recognizes the first line of a block.
pub trait BlockStartParser: Send + Sync {
    /// Returns `None` when the line does not open this kind of block.
    ///
    /// On a match the implementation advances `cursor` past whatever the
    /// opening line contributes and records the position with
    /// [`BlockStart::at`].
    fn try_start(&self, cursor: &mut Cursor<'_>, state: &ParserState) -> Option<BlockStart>;
}

/// Owns one open block while the host feeds it lines.
pub trait BlockContinueParser: fmt::Debug {
    /// Kind of the block this parser produces.
    fn kind(&self) -> BlockKind;

    fn is_container(&self) -> bool {
        false
    }

    fn can_have_lazy_continuation_lines(&self) -> bool {
        false
    }

    fn can_contain(&self, _child: BlockKind) -> bool {
        false
    }

    /// Decides whether `cursor`'s line continues the block.
    ///
    /// Returning `None` ends the block; otherwise the cursor has been moved
    /// past the block's own markers and the remainder goes to `add_line`.
    fn try_continue(&mut self, cursor: &mut Cursor<'_>, state: &ParserState)
    -> Option<BlockContinue>;

    /// Ingests the content of a continued (or lazy) line.
    fn add_line(&mut self, line: &str);

    /// Called once, when the host closes the block.
    fn close_block(&mut self) {}

    /// Hands the finished node to the host.
    fn into_block(self: Box<Self>) -> Block;
}

/// Result of a successful [`BlockStartParser::try_start`].
pub struct BlockStart {
    parser: Box<dyn BlockContinueParser>,
    consumed: usize,
    replace_active: bool,
}

impl BlockStart {
    pub fn of(parser: impl BlockContinueParser + 'static) -> Self {
        Self {
            parser: Box::new(parser),
            consumed: 0,
            replace_active: false,
        }
    }

    /// Records how much of the line the opener consumed.
    pub fn at(mut self, cursor: &Cursor<'_>) -> Self {
        self.consumed = cursor.position();
        self
    }

    /// Closes whatever the host had open instead of nesting under it.
    pub fn replace_active_block_parser(mut self) -> Self {
        self.replace_active = true;
        self
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn replaces_active(&self) -> bool {
        self.replace_active
    }

    pub fn into_parser(self) -> Box<dyn BlockContinueParser> {
        self.parser
    }
}

impl fmt::Debug for BlockStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockStart")
            .field("parser", &self.parser)
            .field("consumed", &self.consumed)
            .field("replace_active", &self.replace_active)
            .finish()
    }
}

/// Result of a successful [`BlockContinueParser::try_continue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockContinue {
    position: usize,
}

impl BlockContinue {
    /// Continue with the line content starting at the cursor.
    pub fn at(cursor: &Cursor<'_>) -> Self {
        Self {
            position: cursor.position(),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}
