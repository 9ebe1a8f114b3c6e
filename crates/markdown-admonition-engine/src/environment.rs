//! Parser and renderer registrations.
//!
//! Extensions register block start parsers and node renderers on an
//! [`EnvironmentBuilder`]. The built [`Environment`] is immutable and can be
//! shared between threads.

use std::{collections::HashMap, fmt, sync::Arc};

use log::debug;
use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};

use crate::admonition::AdmonitionExtension;
use crate::parsing::{blocks::BlockKind, parser::BlockStartParser};
use crate::rendering::NodeRenderer;

/// What happens to raw HTML found in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlInput {
    /// Pass it through unchanged.
    #[default]
    Allow,
    /// Drop it.
    Strip,
    /// Render it as text.
    Escape,
}

/// A bundle of parsers and renderers.
pub trait Extension {
    fn register(&self, env: &mut EnvironmentBuilder);
}

pub struct EnvironmentBuilder {
    start_parsers: Vec<Box<dyn BlockStartParser>>,
    renderers: HashMap<BlockKind, Arc<dyn NodeRenderer>>,
    options: Options,
    html_input: HtmlInput,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self {
            start_parsers: vec![],
            renderers: HashMap::new(),
            options: Options::empty(),
            html_input: HtmlInput::default(),
        }
    }

    pub fn add_extension(&mut self, extension: impl Extension) -> &mut Self {
        extension.register(self);
        self
    }

    /// Start parsers are tried in registration order.
    pub fn add_block_start_parser(&mut self, parser: impl BlockStartParser + 'static) -> &mut Self {
        self.start_parsers.push(Box::new(parser));
        self
    }

    /// Registers the renderer for `kind`, replacing any earlier one.
    pub fn add_renderer(&mut self, kind: BlockKind, renderer: impl NodeRenderer + 'static) -> &mut Self {
        if self.renderers.insert(kind, Arc::new(renderer)).is_some() {
            debug!("replacing renderer for {kind} blocks");
        }
        self
    }

    /// pulldown-cmark options for host-rendered content.
    pub fn with_options(&mut self, options: Options) -> &mut Self {
        self.options = options;
        self
    }

    /// Enables the GitHub flavored extensions (tables, strikethrough, task
    /// lists, footnotes).
    pub fn gfm(&mut self, enabled: bool) -> &mut Self {
        let gfm = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_FOOTNOTES;
        self.options.set(gfm, enabled);
        self
    }

    pub fn html_input(&mut self, html_input: HtmlInput) -> &mut Self {
        self.html_input = html_input;
        self
    }

    pub fn build(self) -> Environment {
        debug!(
            "built environment with {} start parser(s) and renderers for {:?}",
            self.start_parsers.len(),
            self.renderers.keys().collect::<Vec<_>>()
        );
        Environment {
            start_parsers: self.start_parsers,
            renderers: self.renderers,
            options: self.options,
            html_input: self.html_input,
        }
    }
}

impl Default for EnvironmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Environment {
    start_parsers: Vec<Box<dyn BlockStartParser>>,
    renderers: HashMap<BlockKind, Arc<dyn NodeRenderer>>,
    options: Options,
    html_input: HtmlInput,
}

impl Environment {
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    /// Plain CommonMark: no extensions.
    pub fn commonmark() -> Self {
        EnvironmentBuilder::new().build()
    }

    /// CommonMark plus admonitions with the built-in types.
    pub fn with_admonitions() -> Self {
        let mut builder = EnvironmentBuilder::new();
        builder.add_extension(AdmonitionExtension::default());
        builder.build()
    }

    pub fn start_parsers(&self) -> &[Box<dyn BlockStartParser>] {
        &self.start_parsers
    }

    pub fn renderer(&self, kind: BlockKind) -> Option<&dyn NodeRenderer> {
        self.renderers.get(&kind).map(|r| r.as_ref())
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn html_input(&self) -> HtmlInput {
        self.html_input
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.renderers.keys().collect();
        kinds.sort();
        f.debug_struct("Environment")
            .field("start_parsers", &self.start_parsers.len())
            .field("renderers", &kinds)
            .field("options", &self.options)
            .field("html_input", &self.html_input)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commonmark_has_no_extensions() {
        let env = Environment::commonmark();
        assert!(env.start_parsers().is_empty());
        assert!(env.renderer(BlockKind::Admonition).is_none());
        assert_eq!(env.html_input(), HtmlInput::Allow);
    }

    #[test]
    fn admonitions_register_parser_and_renderer() {
        let env = Environment::with_admonitions();
        assert_eq!(env.start_parsers().len(), 1);
        assert!(env.renderer(BlockKind::Admonition).is_some());
    }

    #[test]
    fn gfm_toggles_options() {
        let mut builder = Environment::builder();
        builder.gfm(true);
        assert!(builder.build().options().contains(Options::ENABLE_TABLES));

        let mut builder = Environment::builder();
        builder.gfm(true).gfm(false);
        assert!(builder.build().options().is_empty());
    }

    #[test]
    fn html_input_deserializes_lowercase() {
        use serde::de::{IntoDeserializer, value::Error};

        let de = <&str as IntoDeserializer<'_, Error>>::into_deserializer("escape");
        assert_eq!(HtmlInput::deserialize(de).unwrap(), HtmlInput::Escape);

        let de = <&str as IntoDeserializer<'_, Error>>::into_deserializer("Escape");
        assert!(HtmlInput::deserialize(de).is_err());
    }
}
