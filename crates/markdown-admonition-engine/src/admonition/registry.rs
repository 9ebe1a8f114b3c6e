//! Admonition type definitions and alias resolution.
//!
//! The registry has two phases. An [`AdmonitionRegistryBuilder`] starts from
//! the built-in types and accepts registrations; [`AdmonitionRegistryBuilder::build`]
//! freezes it into an [`AdmonitionRegistry`] that parsing and rendering only
//! ever read.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical key every unknown type token falls back to.
pub const FALLBACK_TYPE: &str = "note";

/// (key, aliases, style class, icon, default title)
type BuiltIn = (
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static str,
    &'static str,
);

const BUILT_IN_TYPES: &[BuiltIn] = &[
    ("note", &["info"], "alert-info", "fa-solid fa-circle-info fa-fw", "Note"),
    ("tip", &["hint"], "alert-success", "fa-solid fa-lightbulb fa-fw", "Tip"),
    (
        "warning",
        &["caution"],
        "alert-warning",
        "fa-solid fa-triangle-exclamation fa-fw",
        "Warning",
    ),
    (
        "danger",
        &["error"],
        "alert-danger",
        "fa-solid fa-circle-exclamation fa-fw",
        "Danger",
    ),
    (
        "important",
        &[],
        "alert-warning",
        "fa-solid fa-circle-exclamation fa-fw",
        "Important",
    ),
    (
        "check",
        &["success"],
        "alert-success",
        "fa-solid fa-circle-check fa-fw",
        "Success",
    ),
    (
        "question",
        &["help", "faq"],
        "alert-info",
        "fa-solid fa-circle-question fa-fw",
        "Question",
    ),
    ("example", &[], "alert-secondary", "fa-solid fa-list fa-fw", "Example"),
    ("quote", &["cite"], "alert-secondary", "fa-solid fa-quote-left fa-fw", "Quote"),
    ("bug", &["issue"], "alert-danger", "fa-solid fa-bug fa-fw", "Bug"),
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Missing required field `{field}` for admonition type `{key}`")]
    MissingField { key: String, field: &'static str },

    #[error("Alias `{alias}` of admonition type `{key}` is already used by `{existing}`")]
    AliasConflict {
        key: String,
        alias: String,
        existing: String,
    },
}

/// A complete admonition type: how blocks of this type are styled and titled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmonitionType {
    key: String,
    aliases: Vec<String>,
    style_class: String,
    icon: String,
    title: String,
}

impl AdmonitionType {
    /// Lowercase canonical key (`note`, `tip`, ...).
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// CSS class added next to `alert` (e.g. `alert-info`).
    pub fn style_class(&self) -> &str {
        &self.style_class
    }

    /// Icon classes for the `<i>` element of the title line.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Title used when the block does not provide one.
    pub fn title(&self) -> &str {
        &self.title
    }

    fn answers_to(&self, token: &str) -> bool {
        self.key == token || self.aliases.iter().any(|a| a == token)
    }
}

/// A possibly incomplete type definition, as written by users.
///
/// `style_class`, `icon` and `title` are required when registering;
/// `aliases` defaults to none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdmonitionTypeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl AdmonitionTypeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = Some(aliases.into_iter().map(Into::into).collect());
        self
    }

    pub fn style_class(mut self, style_class: impl Into<String>) -> Self {
        self.style_class = Some(style_class.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn complete(self, key: &str) -> Result<AdmonitionType, RegistryError> {
        let missing = |field| RegistryError::MissingField {
            key: key.to_string(),
            field,
        };
        let style_class = self.style_class.ok_or_else(|| missing("style_class"))?;
        let icon = self.icon.ok_or_else(|| missing("icon"))?;
        let title = self.title.ok_or_else(|| missing("title"))?;

        let mut aliases: Vec<String> = Vec::new();
        for alias in self.aliases.unwrap_or_default() {
            let alias = alias.trim().to_lowercase();
            if !alias.is_empty() && alias != key && !aliases.contains(&alias) {
                aliases.push(alias);
            }
        }

        Ok(AdmonitionType {
            key: key.to_string(),
            aliases,
            style_class,
            icon,
            title,
        })
    }
}

/// Build phase of the registry.
#[derive(Debug, Clone)]
pub struct AdmonitionRegistryBuilder {
    types: Vec<AdmonitionType>,
}

impl AdmonitionRegistryBuilder {
    /// Starts from the ten built-in types.
    pub fn new() -> Self {
        let types = BUILT_IN_TYPES
            .iter()
            .map(|(key, aliases, style_class, icon, title)| AdmonitionType {
                key: key.to_string(),
                aliases: aliases.iter().map(|a| a.to_string()).collect(),
                style_class: style_class.to_string(),
                icon: icon.to_string(),
                title: title.to_string(),
            })
            .collect();
        Self { types }
    }

    /// Adds a type, or replaces the one already stored under `key`.
    ///
    /// The key is stored lowercased. Nothing changes when an error is
    /// returned.
    pub fn register(
        &mut self,
        key: &str,
        draft: AdmonitionTypeDraft,
    ) -> Result<&mut Self, RegistryError> {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return Err(RegistryError::MissingField {
                key,
                field: "key",
            });
        }
        let ty = draft.complete(&key)?;

        for alias in &ty.aliases {
            if let Some(existing) = self
                .types
                .iter()
                .find(|t| t.key != key && t.answers_to(alias))
            {
                return Err(RegistryError::AliasConflict {
                    key,
                    alias: alias.clone(),
                    existing: existing.key.clone(),
                });
            }
        }

        match self.types.iter_mut().find(|t| t.key == key) {
            Some(slot) => {
                debug!("replacing admonition type `{key}`");
                *slot = ty;
            }
            None => {
                debug!("registering admonition type `{key}`");
                self.types.push(ty);
            }
        }
        Ok(self)
    }

    pub fn build(self) -> AdmonitionRegistry {
        AdmonitionRegistry { types: self.types }
    }
}

impl Default for AdmonitionRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Frozen set of admonition types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmonitionRegistry {
    // `note` is seeded first and can only be replaced in place, so the
    // first entry is always the fallback.
    types: Vec<AdmonitionType>,
}

impl AdmonitionRegistry {
    pub fn builder() -> AdmonitionRegistryBuilder {
        AdmonitionRegistryBuilder::new()
    }

    /// Resolves a type token, case-insensitively.
    ///
    /// Canonical keys win over aliases. Unknown tokens resolve to `note`.
    pub fn lookup(&self, token: &str) -> &AdmonitionType {
        self.resolve(token).unwrap_or(&self.types[0])
    }

    /// Like [`lookup`](Self::lookup) but without the fallback.
    pub fn resolve(&self, token: &str) -> Option<&AdmonitionType> {
        let token = token.trim().to_lowercase();
        self.types
            .iter()
            .find(|t| t.key == token)
            .or_else(|| self.types.iter().find(|t| t.aliases.contains(&token)))
    }

    /// Returns the type stored under a canonical key.
    pub fn get(&self, key: &str) -> Option<&AdmonitionType> {
        self.types.iter().find(|t| t.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdmonitionType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Opens a new build phase on a copy of this registry.
    pub fn to_builder(&self) -> AdmonitionRegistryBuilder {
        AdmonitionRegistryBuilder {
            types: self.types.clone(),
        }
    }
}

impl Default for AdmonitionRegistry {
    fn default() -> Self {
        AdmonitionRegistryBuilder::new().build()
    }
}
