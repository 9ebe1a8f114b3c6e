/// How a raw HTML block ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlEnd {
    /// Ends on the first line containing the marker (matched ignoring case).
    /// Blank lines before it stay inside the block.
    Marker(&'static str),
    /// Ends at the next blank line.
    BlankLine,
}

impl HtmlEnd {
    /// Returns true if `line` is the last line of the block.
    pub fn reached(self, line: &str, is_blank: bool) -> bool {
        match self {
            HtmlEnd::Marker(m) => line.to_ascii_lowercase().contains(m),
            HtmlEnd::BlankLine => is_blank,
        }
    }
}

/// Raw HTML block start detection.
///
/// Only the start conditions that may interrupt a paragraph are recognized:
/// raw text tags, comments, processing instructions, declarations, CDATA and
/// known block tag names.
pub struct HtmlBlock;

impl HtmlBlock {
    pub const OPEN: u8 = b'<';

    const RAW_TAGS: &'static [(&'static str, &'static str)] = &[
        ("pre", "</pre>"),
        ("script", "</script>"),
        ("style", "</style>"),
        ("textarea", "</textarea>"),
    ];

    const BLOCK_TAGS: &'static [&'static str] = &[
        "address", "article", "aside", "blockquote", "details", "dialog", "div", "dl",
        "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
        "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "section", "summary",
        "table", "ul",
    ];

    /// Recognizes an HTML block opener and returns how that block ends.
    pub fn start(s: &str) -> Option<HtmlEnd> {
        let t = s.trim_start_matches(' ');
        if s.len() - t.len() > 3 || t.as_bytes().first() != Some(&Self::OPEN) {
            return None;
        }
        let after = &t[1..];
        if after.starts_with("!--") {
            return Some(HtmlEnd::Marker("-->"));
        }
        if after.starts_with('?') {
            return Some(HtmlEnd::Marker("?>"));
        }
        if after.starts_with("![CDATA[") {
            return Some(HtmlEnd::Marker("]]>"));
        }
        if let Some(decl) = after.strip_prefix('!') {
            return decl
                .starts_with(|c: char| c.is_ascii_alphabetic())
                .then_some(HtmlEnd::Marker(">"));
        }

        let closing = after.starts_with('/');
        let name_part = after.trim_start_matches('/');
        let name_len = name_part
            .bytes()
            .take_while(u8::is_ascii_alphanumeric)
            .count();
        let name = name_part[..name_len].to_ascii_lowercase();
        let next = name_part[name_len..].chars().next();

        if !closing
            && matches!(next, None | Some(' ' | '\t' | '>'))
            && let Some((_, end)) = Self::RAW_TAGS.iter().find(|(tag, _)| *tag == name)
        {
            return Some(HtmlEnd::Marker(*end));
        }
        Self::BLOCK_TAGS
            .contains(&name.as_str())
            .then_some(HtmlEnd::BlankLine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_block_tags() {
        assert!(HtmlBlock::start("<div class=\"x\">").is_some());
        assert!(HtmlBlock::start("</section>").is_some());
        assert!(HtmlBlock::start("<!-- comment -->").is_some());
    }

    #[test]
    fn ignores_inline_tags() {
        assert_eq!(HtmlBlock::start("<span>inline</span>"), None);
        assert_eq!(HtmlBlock::start("a < b"), None);
    }

    #[test]
    fn block_tags_end_at_blank_line() {
        assert_eq!(HtmlBlock::start("<div>"), Some(HtmlEnd::BlankLine));
        assert!(HtmlEnd::BlankLine.reached("", true));
        assert!(!HtmlEnd::BlankLine.reached("</div>", false));
    }

    #[test]
    fn raw_and_comment_blocks_end_at_marker() {
        assert_eq!(HtmlBlock::start("<PRE>"), Some(HtmlEnd::Marker("</pre>")));
        assert_eq!(HtmlBlock::start("<!-- note"), Some(HtmlEnd::Marker("-->")));
        assert_eq!(HtmlBlock::start("<!DOCTYPE html>"), Some(HtmlEnd::Marker(">")));
        assert_eq!(HtmlBlock::start("<prefix>"), None);

        let end = HtmlEnd::Marker("</script>");
        assert!(!end.reached("", true));
        assert!(end.reached("x();</SCRIPT>", false));
    }
}
