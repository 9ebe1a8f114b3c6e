//! HTML helpers shared by the built-in and extension renderers.

use std::{borrow::Cow, fmt, sync::LazyLock};

use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{CowStr, Event, Options, Parser};
use regex::Regex;

use crate::environment::HtmlInput;
use crate::parsing::blocks::Inline;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// A single HTML element with escaped attributes and raw contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    contents: String,
}

impl HtmlElement {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: vec![],
            contents: String::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Sets the inner HTML. The contents are written as is.
    pub fn contents(mut self, html: impl Into<String>) -> Self {
        self.contents = html.into();
        self
    }
}

impl fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{}\"", encode_double_quoted_attribute(value))?;
        }
        write!(f, ">{}</{}>", self.contents, self.tag)
    }
}

/// Removes everything that looks like a tag.
pub fn strip_tags(html: &str) -> Cow<'_, str> {
    TAG.replace_all(html, "")
}

/// Renders CommonMark `source` and appends the HTML to `out`.
pub fn push_markdown(out: &mut String, source: &str, options: Options, html_input: HtmlInput) {
    let events = Parser::new_ext(source, options).filter_map(|event| match event {
        Event::Html(raw) => raw_html(raw, html_input, Event::Html),
        Event::InlineHtml(raw) => raw_html(raw, html_input, Event::InlineHtml),
        other => Some(other),
    });
    pulldown_cmark::html::push_html(out, events);
}

fn raw_html<'a>(
    raw: CowStr<'a>,
    policy: HtmlInput,
    keep: fn(CowStr<'a>) -> Event<'a>,
) -> Option<Event<'a>> {
    match policy {
        HtmlInput::Allow => Some(keep(raw)),
        HtmlInput::Strip => None,
        HtmlInput::Escape => Some(Event::Text(raw)),
    }
}

/// Renders inline runs as escaped text, one source line per line.
pub fn render_text_runs(runs: &[Inline]) -> String {
    let mut out = String::new();
    for run in runs {
        match run {
            Inline::Text(t) => out.push_str(&encode_text(t)),
            Inline::LineBreak => out.push('\n'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn markdown(source: &str, html_input: HtmlInput) -> String {
        let mut out = String::new();
        push_markdown(&mut out, source, Options::empty(), html_input);
        out
    }

    #[test]
    fn element_escapes_attributes_only() {
        let el = HtmlElement::new("div")
            .attr("class", "a \"b\"")
            .contents("<em>x</em>");
        assert_eq!(el.to_string(), "<div class=\"a &quot;b&quot;\"><em>x</em></div>");
    }

    #[rstest]
    #[case("<p>Hi <em>there</em></p>", "Hi there")]
    #[case("<p></p>\n", "\n")]
    #[case("plain", "plain")]
    fn strips_tags(#[case] html: &str, #[case] text: &str) {
        assert_eq!(strip_tags(html), text);
    }

    #[test]
    fn markdown_renders_blocks() {
        assert_eq!(
            markdown("## Heading\n\nSome *text*\n", HtmlInput::Allow),
            "<h2>Heading</h2>\n<p>Some <em>text</em></p>\n"
        );
    }

    #[rstest]
    #[case(HtmlInput::Allow, "<p>a <b>b</b></p>\n")]
    #[case(HtmlInput::Strip, "<p>a b</p>\n")]
    #[case(HtmlInput::Escape, "<p>a &lt;b&gt;b&lt;/b&gt;</p>\n")]
    fn raw_html_policy(#[case] policy: HtmlInput, #[case] expected: &str) {
        assert_eq!(markdown("a <b>b</b>\n", policy), expected);
    }

    #[test]
    fn text_runs_are_escaped() {
        let runs = [
            Inline::Text("a < b".into()),
            Inline::LineBreak,
            Inline::Text("**c**".into()),
        ];
        assert_eq!(render_text_runs(&runs), "a &lt; b\n**c**");
    }
}
