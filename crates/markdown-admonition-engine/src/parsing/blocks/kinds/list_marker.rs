/// A list item marker at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `+` or `*`.
    Bullet(u8),
    /// `1.` or `1)`; carries the start number.
    Ordered(u64),
}

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'+', b'*'];
    /// CommonMark limits ordered markers to nine digits.
    pub const MAX_DIGITS: usize = 9;

    /// Detects a list marker, returning it with the item content that follows.
    pub fn detect(s: &str) -> Option<(ListMarker, &str)> {
        let t = s.trim_start_matches(' ');
        if s.len() - t.len() > 3 {
            return None;
        }
        let b = t.as_bytes();
        let (marker, width) = match b.first() {
            Some(c) if Self::BULLETS.contains(c) => (ListMarker::Bullet(*c), 1),
            Some(c) if c.is_ascii_digit() => {
                let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
                if digits > Self::MAX_DIGITS || !matches!(b.get(digits), Some(b'.' | b')')) {
                    return None;
                }
                let start = t[..digits].parse().ok()?;
                (ListMarker::Ordered(start), digits + 1)
            }
            _ => return None,
        };
        match b.get(width) {
            None => Some((marker, "")),
            Some(b' ' | b'\t') => Some((marker, &t[width + 1..])),
            _ => None,
        }
    }

    /// Whether an item with this marker may interrupt an open paragraph.
    ///
    /// Empty items never can; ordered items only when they start at 1.
    pub fn can_interrupt_paragraph(self, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        match self {
            ListMarker::Bullet(_) => true,
            ListMarker::Ordered(start) => start == 1,
        }
    }
}
