use super::kinds::{AtxHeading, CodeFence, FenceSig, HtmlBlock, HtmlEnd, ListMarker, ThematicBreak};

/// A block opener recognized at the start of a line's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { sig: FenceSig },
    AtxHeading { level: u8 },
    ThematicBreak,
    ListItem { marker: ListMarker, interrupts: bool },
    HtmlBlock { end: HtmlEnd },
}

impl BlockOpen {
    /// Whether this opener ends an open paragraph instead of continuing it.
    pub fn interrupts_paragraph(self) -> bool {
        match self {
            BlockOpen::ListItem { interrupts, .. } => interrupts,
            _ => true,
        }
    }
}

pub fn try_open_leaf(remainder: &str) -> Option<BlockOpen> {
    // Precedence: fence beats everything else.
    if let Some(sig) = CodeFence::sig(remainder) {
        return Some(BlockOpen::FencedCode { sig });
    }
    if let Some(level) = AtxHeading::level(remainder) {
        return Some(BlockOpen::AtxHeading { level });
    }
    // `- - -` is a break, not a list item.
    if ThematicBreak::is_match(remainder) {
        return Some(BlockOpen::ThematicBreak);
    }
    if let Some((marker, content)) = ListMarker::detect(remainder) {
        return Some(BlockOpen::ListItem {
            marker,
            interrupts: marker.can_interrupt_paragraph(content),
        });
    }
    if let Some(end) = HtmlBlock::start(remainder) {
        return Some(BlockOpen::HtmlBlock { end });
    }
    None
}
