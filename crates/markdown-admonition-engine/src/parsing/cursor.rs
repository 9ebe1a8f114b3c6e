/// Width of a tab stop when measuring indentation.
const TAB_STOP: usize = 4;

/// Indentation (in columns) at which a line becomes indented code.
pub const CODE_INDENT: usize = 4;

/// A cursor over a single source line.
///
/// Block parsers inspect the line through the cursor and advance it past the
/// markers they consume; whatever remains (`rest`) is the line content handed
/// on to `add_line`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    line: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self { line, i: 0 }
    }

    /// The full line, regardless of the cursor position.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// The part of the line not yet consumed.
    pub fn rest(&self) -> &'a str {
        &self.line[self.i..]
    }

    /// Current byte offset into the line.
    pub fn position(&self) -> usize {
        self.i
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.line.as_bytes()[self.i..].starts_with(pat)
    }

    /// Advances by `n` bytes, clamped to the end of the line.
    ///
    /// Never stops inside a UTF-8 sequence: if `n` lands mid-character the
    /// cursor moves on to the next character boundary.
    pub fn advance_by(&mut self, n: usize) {
        let mut target = (self.i + n).min(self.line.len());
        while !self.line.is_char_boundary(target) {
            target += 1;
        }
        self.i = target;
    }

    /// Consumes the rest of the line.
    pub fn advance_to_end(&mut self) {
        self.i = self.line.len();
    }

    /// Columns of leading whitespace from the cursor position.
    pub fn indent(&self) -> usize {
        let mut col = 0;
        for b in self.rest().bytes() {
            match b {
                b' ' => col += 1,
                b'\t' => col += TAB_STOP - (col % TAB_STOP),
                _ => break,
            }
        }
        col
    }

    /// Returns true if the remaining line would be indented code.
    pub fn is_indented(&self) -> bool {
        self.indent() >= CODE_INDENT
    }

    /// Returns true if nothing but whitespace remains.
    pub fn is_blank(&self) -> bool {
        self.rest().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("> hello");
        assert_eq!(cur.position(), 0);
        assert!(cur.starts_with(b">"));
        cur.advance_by(2);
        assert_eq!(cur.rest(), "hello");
        assert_eq!(cur.line(), "> hello");
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("> [!NOTE]");
        assert!(cur.starts_with(b"> [!"));
        assert!(!cur.starts_with(b">>"));
    }

    #[test]
    fn empty_line() {
        let cur = Cursor::new("");
        assert_eq!(cur.rest(), "");
        assert!(cur.is_blank());
        assert_eq!(cur.indent(), 0);
    }

    #[test]
    fn advance_by_clamps_to_end() {
        let mut cur = Cursor::new("hi");
        cur.advance_by(10);
        assert_eq!(cur.position(), 2);
        assert_eq!(cur.rest(), "");
    }

    #[test]
    fn advance_by_respects_char_boundaries() {
        let mut cur = Cursor::new("é!");
        cur.advance_by(1);
        assert_eq!(cur.rest(), "!");
    }

    #[test]
    fn advance_to_end_consumes_everything() {
        let mut cur = Cursor::new("> [!TIP] title");
        cur.advance_to_end();
        assert!(cur.rest().is_empty());
        assert_eq!(cur.position(), 14);
    }

    #[test]
    fn indent_counts_spaces_and_tabs() {
        assert_eq!(Cursor::new("   x").indent(), 3);
        assert_eq!(Cursor::new("\tx").indent(), 4);
        assert_eq!(Cursor::new("  \tx").indent(), 4);
    }

    #[test]
    fn four_columns_is_indented() {
        assert!(Cursor::new("    > [!NOTE]").is_indented());
        assert!(!Cursor::new("   > [!NOTE]").is_indented());
    }

    #[test]
    fn whitespace_only_rest_is_blank() {
        let mut cur = Cursor::new(">   ");
        assert!(!cur.is_blank());
        cur.advance_by(1);
        assert!(cur.is_blank());
    }
}
