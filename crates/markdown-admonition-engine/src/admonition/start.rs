use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{
    cursor::Cursor,
    parser::{BlockStart, BlockStartParser, ParserState},
};

use super::AdmonitionParser;

/// Cheap prefix check run before the opener pattern.
pub const OPENER_PREFIX: &str = "> [!";

static OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^>\s*\[!((?-u:\w)+)\]\s*(.*)$").expect("valid admonition opener pattern")
});

/// Opens an admonition on lines like `> [!WARNING] Title`.
///
/// The type token is ASCII word characters, lowercased; the title is the
/// trimmed rest of the line and may be empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdmonitionStartParser;

impl AdmonitionStartParser {
    /// Extracts `(type, title)` from an opener line.
    pub fn parse_opener(line: &str) -> Option<(String, &str)> {
        if !line.trim().starts_with(OPENER_PREFIX) {
            return None;
        }
        let caps = OPENER.captures(line)?;
        let kind = caps.get(1)?.as_str().to_lowercase();
        let title = caps.get(2).map_or("", |m| m.as_str().trim());
        Some((kind, title))
    }
}

impl BlockStartParser for AdmonitionStartParser {
    fn try_start(&self, cursor: &mut Cursor<'_>, _state: &ParserState) -> Option<BlockStart> {
        if cursor.is_indented() || !cursor.starts_with(OPENER_PREFIX.as_bytes()) {
            return None;
        }
        let (kind, title) = Self::parse_opener(cursor.line())?;
        cursor.advance_to_end();
        Some(
            BlockStart::of(AdmonitionParser::new(&kind, title))
                .at(cursor)
                .replace_active_block_parser(),
        )
    }
}
