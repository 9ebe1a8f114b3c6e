/// An inline run inside a [`Paragraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Source text of one line (CommonMark syntax is resolved at render time).
    Text(String),
    /// Break between two source lines of the same paragraph.
    LineBreak,
}

/// A group of source lines that belong together.
///
/// Paragraphs are the leaf content of container blocks. Their runs keep the
/// original CommonMark source so the host engine can resolve inline and
/// nested block syntax (emphasis, headings, lists) when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    runs: Vec<Inline>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a paragraph from text, turning each `\n` into a line break.
    pub fn from_text(text: &str) -> Self {
        let mut p = Self::new();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                p.push_line_break();
            }
            if !line.is_empty() {
                p.push_text(line);
            }
        }
        p
    }

    pub fn runs(&self) -> &[Inline] {
        &self.runs
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.runs.push(Inline::Text(text.into()));
    }

    pub fn push_line_break(&mut self) {
        self.runs.push(Inline::LineBreak);
    }

    /// Returns true once any run has been added.
    pub fn has_content(&self) -> bool {
        !self.runs.is_empty()
    }

    /// Returns true if the runs contain no visible text.
    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|r| match r {
            Inline::Text(t) => t.trim().is_empty(),
            Inline::LineBreak => true,
        })
    }

    /// Joins the runs back into CommonMark source.
    pub fn source(&self) -> String {
        source_of(&self.runs)
    }

    /// Splits off everything after the first line break.
    ///
    /// Returns the runs of the first line and, if the paragraph continues
    /// past the break, a paragraph holding the remaining runs.
    pub fn split_first_line(&self) -> (&[Inline], Option<Paragraph>) {
        match self.runs.iter().position(|r| *r == Inline::LineBreak) {
            Some(idx) => {
                let rest = &self.runs[idx + 1..];
                let rest = (!rest.is_empty()).then(|| Paragraph {
                    runs: rest.to_vec(),
                });
                (&self.runs[..idx], rest)
            }
            None => (&self.runs, None),
        }
    }
}

/// Joins inline runs into source text.
pub fn source_of(runs: &[Inline]) -> String {
    let mut out = String::new();
    for run in runs {
        match run {
            Inline::Text(t) => out.push_str(t),
            Inline::LineBreak => out.push('\n'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_inserts_line_breaks() {
        let p = Paragraph::from_text("one\ntwo");
        assert_eq!(
            p.runs(),
            &[
                Inline::Text("one".into()),
                Inline::LineBreak,
                Inline::Text("two".into())
            ]
        );
        assert_eq!(p.source(), "one\ntwo");
    }

    #[test]
    fn empty_paragraph_has_no_content() {
        let p = Paragraph::new();
        assert!(!p.has_content());
        assert!(p.is_blank());
    }

    #[test]
    fn line_break_only_is_blank_but_has_content() {
        let mut p = Paragraph::new();
        p.push_line_break();
        assert!(p.has_content());
        assert!(p.is_blank());
    }

    #[test]
    fn split_first_line_with_rest() {
        let p = Paragraph::from_text("[!TIP] Title\nbody\nmore");
        let (first, rest) = p.split_first_line();
        assert_eq!(source_of(first), "[!TIP] Title");
        assert_eq!(rest.unwrap().source(), "body\nmore");
    }

    #[test]
    fn split_first_line_trailing_break_has_no_rest() {
        let mut p = Paragraph::from_text("Title");
        p.push_line_break();
        let (first, rest) = p.split_first_line();
        assert_eq!(source_of(first), "Title");
        assert!(rest.is_none());
    }

    #[test]
    fn split_single_line() {
        let p = Paragraph::from_text("only");
        let (first, rest) = p.split_first_line();
        assert_eq!(source_of(first), "only");
        assert!(rest.is_none());
    }
}
