use markdown_admonition_engine::{
    AdmonitionExtension, AdmonitionRegistry, AdmonitionTypeDraft, Environment, HtmlInput,
    MarkdownConverter, RegistryError,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides the config file location; shell variables and `~` are expanded.
pub const CONFIG_PATH_VAR: &str = "MARKDOWN_ADMONITION_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid admonition type: {0}")]
    Registry(#[from] RegistryError),
}

/// Converter settings, usually read from `config.toml`:
///
/// ```toml
/// html_input = "strip"
/// gfm = true
///
/// [admonitions.todo]
/// aliases = ["task"]
/// style_class = "alert-primary"
/// icon = "fa-solid fa-list-check fa-fw"
/// title = "To do"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub html_input: HtmlInput,
    pub gfm: bool,
    /// Extra or replacement admonition types, keyed by canonical name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub admonitions: BTreeMap<String, AdmonitionTypeDraft>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "loaded config from {} with {} custom admonition type(s)",
            config_path.display(),
            config.admonitions.len()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$MARKDOWN_ADMONITION_CONFIG` if set, else
    /// `~/.config/markdown-admonition/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Ok(custom) = std::env::var(CONFIG_PATH_VAR)
            && let Some(path) = Self::expand_path(Path::new(&custom))
        {
            return path;
        }
        let config_dir = shellexpand::tilde("~/.config/markdown-admonition");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Built-in types with `[admonitions.*]` applied in key order.
    pub fn registry(&self) -> Result<AdmonitionRegistry, ConfigError> {
        let mut builder = AdmonitionRegistry::builder();
        for (key, draft) in &self.admonitions {
            builder.register(key, draft.clone())?;
        }
        Ok(builder.build())
    }

    pub fn environment(&self) -> Result<Environment, ConfigError> {
        let mut builder = Environment::builder();
        builder
            .add_extension(AdmonitionExtension::new(self.registry()?))
            .gfm(self.gfm)
            .html_input(self.html_input);
        Ok(builder.build())
    }

    pub fn converter(&self) -> Result<MarkdownConverter, ConfigError> {
        Ok(MarkdownConverter::new(self.environment()?))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
