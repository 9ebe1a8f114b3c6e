/// A single source line with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based line number in the source document.
    pub number: usize,
    /// The line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text`.
///
/// A trailing newline does not produce an extra empty line, matching how
/// CommonMark treats the end of input.
pub fn lines(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.lines()
        .enumerate()
        .map(|(idx, text)| LineRef {
            number: idx + 1,
            text,
        })
}
