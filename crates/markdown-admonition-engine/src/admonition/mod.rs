//! # Admonitions
//!
//! Callout blocks written as a quote whose first line carries a type marker:
//!
//! ```markdown
//! > [!WARNING] Mind the gap
//! >
//! > Body text, *inline markup* and nested blocks.
//! ```
//!
//! - **`registry`**: type definitions, aliases and the `note` fallback
//! - **`start`**: recognizes the opening line
//! - **`continuation`**: collects the quoted lines that follow
//! - **`node`**: the parsed block
//! - **`renderer`**: the HTML skeleton

pub mod continuation;
pub mod node;
pub mod registry;
pub mod renderer;
pub mod start;

use std::sync::Arc;

use crate::environment::{EnvironmentBuilder, Extension};
use crate::parsing::blocks::BlockKind;

pub use continuation::AdmonitionParser;
pub use node::Admonition;
pub use registry::{
    AdmonitionRegistry, AdmonitionRegistryBuilder, AdmonitionType, AdmonitionTypeDraft,
    FALLBACK_TYPE, RegistryError,
};
pub use renderer::AdmonitionRenderer;
pub use start::AdmonitionStartParser;

/// Registers admonition parsing and rendering on an environment.
#[derive(Debug, Clone, Default)]
pub struct AdmonitionExtension {
    registry: Arc<AdmonitionRegistry>,
}

impl AdmonitionExtension {
    pub fn new(registry: AdmonitionRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Shares a registry that other environments may also use.
    pub fn with_registry(registry: Arc<AdmonitionRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &AdmonitionRegistry {
        &self.registry
    }
}

impl Extension for AdmonitionExtension {
    fn register(&self, env: &mut EnvironmentBuilder) {
        env.add_block_start_parser(AdmonitionStartParser)
            .add_renderer(
                BlockKind::Admonition,
                AdmonitionRenderer::new(Arc::clone(&self.registry)),
            );
    }
}
