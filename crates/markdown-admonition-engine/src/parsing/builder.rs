use log::{debug, trace};

use super::{
    blocks::{
        Block, BlockKind, LineClass, MarkdownBlock, MarkdownLineClassifier,
        kinds::{BlockQuote, CodeFence, FenceSig, HtmlEnd},
        open::BlockOpen,
    },
    cursor::{CODE_INDENT, Cursor},
    lines::LineRef,
    parser::{BlockContinueParser, BlockStartParser, ParserState},
};

/// Host-owned CommonMark source waiting to be emitted as a [`MarkdownBlock`].
#[derive(Debug, Default)]
struct Chunk {
    source: String,
    fence: Option<FenceSig>,
    paragraph_open: bool,
    /// A host blockquote is still open; its lines are not offered to start
    /// parsers.
    quote_open: bool,
    /// End condition of the raw HTML block being collected.
    html: Option<HtmlEnd>,
}

impl Chunk {
    fn push(&mut self, text: &str, c: &LineClass) {
        self.source.push_str(text);
        self.source.push('\n');
        let lazy = self.paragraph_open;

        if let Some(open) = self.fence {
            if CodeFence::closes(open, c.fence_sig) {
                self.fence = None;
            }
            return;
        }

        if let Some(end) = self.html {
            if end.reached(text, c.is_blank) {
                self.html = None;
            }
            return;
        }

        if c.is_blank {
            self.paragraph_open = false;
            self.quote_open = false;
            return;
        }
        self.quote_open = c.quote_depth > 0 || (self.quote_open && lazy);

        if let Some(sig) = c.fence_sig
            && (c.quote_depth > 0 || c.indent < CODE_INDENT)
        {
            self.fence = Some(sig);
            self.paragraph_open = false;
            return;
        }

        if let Some(BlockOpen::HtmlBlock { end }) = c.opens {
            self.paragraph_open = false;
            self.quote_open = false;
            if !end.reached(text, false) {
                self.html = Some(end);
            }
            return;
        }

        self.paragraph_open = match c.opens {
            Some(BlockOpen::AtxHeading { .. } | BlockOpen::ThematicBreak) => false,
            Some(_) => true,
            // Indented lines only continue a paragraph, they never start one.
            None => self.paragraph_open || c.indent < CODE_INDENT || c.quote_depth > 0,
        };
    }

    /// Lines inside fenced code, raw HTML or a host quote belong to that
    /// block and are never offered to start parsers.
    fn accepts_starts(&self) -> bool {
        self.fence.is_none() && self.html.is_none() && !self.quote_open
    }

    fn take(&mut self) -> Option<Block> {
        let chunk = std::mem::take(self);
        (!chunk.source.trim().is_empty()).then(|| Block::Markdown(MarkdownBlock::new(chunk.source)))
    }
}

/// An extension block currently receiving lines.
#[derive(Debug)]
struct ActiveBlock {
    parser: Box<dyn BlockContinueParser>,
    opened_at: usize,
    last_line_blank: bool,
}

/// Line-scan driver that hosts extension block parsers.
///
/// Lines outside extension blocks are collected verbatim into
/// [`MarkdownBlock`] chunks for pulldown-cmark. Start parsers are offered
/// every line outside fenced code, raw HTML blocks and open quotes; once one matches, its
/// continue parser receives the following lines until it declines one.
pub struct BlockBuilder<'p> {
    start_parsers: &'p [Box<dyn BlockStartParser>],
    classifier: MarkdownLineClassifier,
    chunk: Chunk,
    active: Option<ActiveBlock>,
    out: Vec<Block>,
}

impl<'p> BlockBuilder<'p> {
    pub fn new(start_parsers: &'p [Box<dyn BlockStartParser>]) -> Self {
        Self {
            start_parsers,
            classifier: MarkdownLineClassifier,
            chunk: Chunk::default(),
            active: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, lr: &LineRef<'_>) {
        let c = self.classifier.classify(lr);

        if self.active.is_some() {
            if self.continue_active(lr, &c) {
                return;
            }
            self.close_active(lr.number.saturating_sub(1));
        }

        if self.chunk.accepts_starts() && self.try_start(lr) {
            return;
        }

        self.chunk.push(lr.text, &c);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.close_active(usize::MAX);
        self.flush_chunk();
        self.out
    }

    fn state(&self, line_number: usize) -> ParserState {
        match &self.active {
            Some(active) => ParserState {
                line_number,
                active_block: Some(active.parser.kind()),
                paragraph_open: !active.last_line_blank,
            },
            None => ParserState {
                line_number,
                active_block: (!self.chunk.source.is_empty()).then_some(BlockKind::Markdown),
                paragraph_open: self.chunk.paragraph_open,
            },
        }
    }

    fn continue_active(&mut self, lr: &LineRef<'_>, c: &LineClass) -> bool {
        let state = self.state(lr.number);
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let mut cursor = Cursor::new(lr.text);
        if let Some(cont) = active.parser.try_continue(&mut cursor, &state) {
            let rest = &lr.text[cont.position()..];
            trace!("line {}: continues {} block", lr.number, active.parser.kind());
            active.parser.add_line(rest);
            let mut content = Cursor::new(rest);
            content.advance_by(BlockQuote::strip_prefixes(rest).1);
            active.last_line_blank = content.is_blank();
            return true;
        }

        let parser = &active.parser;
        let lazy = !c.is_blank
            && !active.last_line_blank
            && parser.can_have_lazy_continuation_lines()
            && parser.can_contain(BlockKind::Paragraph)
            && !(parser.is_container() && c.interrupts_paragraph());
        if lazy {
            trace!("line {}: lazy continuation of {} block", lr.number, parser.kind());
            active.parser.add_line(lr.text);
            return true;
        }
        false
    }

    fn try_start(&mut self, lr: &LineRef<'_>) -> bool {
        let state = self.state(lr.number);
        for start_parser in self.start_parsers {
            let mut cursor = Cursor::new(lr.text);
            let Some(start) = start_parser.try_start(&mut cursor, &state) else {
                continue;
            };
            if !start.replaces_active() && self.chunk.paragraph_open {
                trace!("line {}: block start cannot interrupt a paragraph", lr.number);
                continue;
            }

            self.flush_chunk();
            let mut rest = Cursor::new(lr.text);
            rest.advance_by(start.consumed());
            let mut parser = start.into_parser();
            if !rest.is_blank() {
                parser.add_line(rest.rest());
            }
            debug!("line {}: opened {} block", lr.number, parser.kind());
            self.active = Some(ActiveBlock {
                parser,
                opened_at: lr.number,
                last_line_blank: false,
            });
            return true;
        }
        false
    }

    fn close_active(&mut self, last_line: usize) {
        let Some(mut active) = self.active.take() else {
            return;
        };
        active.parser.close_block();
        let kind = active.parser.kind();
        if last_line == usize::MAX {
            debug!("closed {kind} block opened at line {} at end of input", active.opened_at);
        } else {
            debug!("closed {kind} block spanning lines {}..={last_line}", active.opened_at);
        }
        self.out.push(active.parser.into_block());
    }

    fn flush_chunk(&mut self) {
        if let Some(block) = self.chunk.take() {
            self.out.push(block);
        }
    }
}
