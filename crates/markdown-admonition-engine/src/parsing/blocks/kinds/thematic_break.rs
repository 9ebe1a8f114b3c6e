/// Thematic break (`***`, `---`, `___`).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [u8; 3] = [b'*', b'-', b'_'];

    pub fn is_match(s: &str) -> bool {
        let t = s.trim_start_matches(' ');
        if s.len() - t.len() > 3 {
            return false;
        }
        let Some(&first) = t.as_bytes().first() else {
            return false;
        };
        if !Self::MARKERS.contains(&first) {
            return false;
        }
        let mut count = 0;
        for b in t.bytes() {
            match b {
                b' ' | b'\t' => {}
                b if b == first => count += 1,
                _ => return false,
            }
        }
        count >= 3
    }
}
