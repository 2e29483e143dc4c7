//! Tracker configuration.
//!
//! Settings are read from an optional TOML file, `.re-tracker.toml` in the
//! working directory unless another path is given on the command line.
//!
//! # Configuration File Format
//!
//! ```toml
//! default_class = "Paladin"
//! catalogue = "data/db.json"
//! log_file = "re-tracker.log"
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use re_catalogue::DEFAULT_CLASS;
use serde::{Deserialize, Serialize};

/// Config file looked up when none is given explicitly.
pub const DEFAULT_CONFIG_PATH: &str = ".re-tracker.toml";

/// Root configuration structure. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Class selected at startup.
    pub default_class: Option<String>,
    /// Catalogue file (`.json` or `.toml`). The bundled dataset is used when unset.
    pub catalogue: Option<PathBuf>,
    /// File receiving log output.
    pub log_file: Option<PathBuf>,
}

impl TrackerConfig {
    /// Load the configuration.
    ///
    /// With `path == None` the default file is read if it exists, otherwise
    /// defaults are returned. An explicit path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if !required && !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_relative(base);
        }
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    fn resolve_relative(&mut self, base: &Path) {
        for path in [&mut self.catalogue, &mut self.log_file].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Startup class, falling back to the built-in default.
    pub fn default_class(&self) -> &str {
        self.default_class.as_deref().unwrap_or(DEFAULT_CLASS)
    }
}
