//! Optional `linediff.toml` settings.
//!
//! Every field has a default, so an empty file (or no file) is valid.
//! Command-line flags take precedence over anything loaded here.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use syntect::highlighting::ThemeSet;
use tracing::{info, warn};

use crate::engine::Strategy;
use crate::error::ConfigError;

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strategy used when the session starts.
    pub strategy: Strategy,
    /// Syntect theme name.
    pub theme: String,
    /// Narrowest terminal width that still gets two panes.
    pub side_by_side_min_width: u16,
    /// Lines moved per page scroll.
    pub scroll_step: usize,
    /// Forces a language instead of guessing it from the file name.
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            theme: DEFAULT_THEME.to_string(),
            side_by_side_min_width: 120,
            scroll_step: 10,
            language: None,
        }
    }
}

impl Config {
    /// Loads from `path`, falling back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        for field in &ignored {
            warn!(path = %path.display(), field = %field, "ignoring unknown config field");
        }

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    pub fn validate(&self, theme_set: &ThemeSet) -> Result<(), ConfigError> {
        if self.scroll_step == 0 {
            return Err(ConfigError::Validation(
                "`scroll_step` must be greater than zero".to_string(),
            ));
        }

        if !theme_set.themes.contains_key(&self.theme) {
            let mut known: Vec<&str> = theme_set.themes.keys().map(String::as_str).collect();
            known.sort_unstable();
            return Err(ConfigError::Validation(format!(
                "unknown theme `{}` (available: {})",
                self.theme,
                known.join(", ")
            )));
        }

        Ok(())
    }
}
