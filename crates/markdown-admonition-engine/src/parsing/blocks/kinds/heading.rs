/// ATX heading (`# Title`) delimiter knowledge.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `s` opens an ATX heading.
    pub fn level(s: &str) -> Option<u8> {
        let t = s.trim_start_matches(' ');
        if s.len() - t.len() > 3 {
            return None;
        }
        let level = t.bytes().take_while(|b| *b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        match t.as_bytes().get(level) {
            None | Some(b' ') | Some(b'\t') => u8::try_from(level).ok(),
            _ => None,
        }
    }
}
