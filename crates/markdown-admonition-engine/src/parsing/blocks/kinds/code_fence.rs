/// Which character a fence is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that looks like a fence opener or closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Number of fence characters (at least 3).
    pub len: usize,
    /// Whether anything follows the fence characters (an info string).
    pub has_info: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;

    /// Recognizes a fence line. Up to three leading spaces are allowed.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let lead = t.len() - t.trim_start_matches(' ').len();
        if lead > 3 {
            return None;
        }
        let t = &t[lead..];
        let (kind, ch) = match t.as_bytes().first() {
            Some(&Self::BACKTICK) => (FenceKind::Backticks, Self::BACKTICK),
            Some(&Self::TILDE) => (FenceKind::Tildes, Self::TILDE),
            _ => return None,
        };
        let len = t.bytes().take_while(|b| *b == ch).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = t[len..].trim();
        // A backtick info string may not itself contain backticks.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            has_info: !info.is_empty(),
        })
    }

    /// Returns true if `sig` closes a fence opened by `open`.
    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        matches!(sig, Some(s) if s.kind == open.kind && s.len >= open.len && !s.has_info)
    }
}
