//! Application context.
//!
//! [`AppContext`] holds what every subcommand needs: the resolved
//! configuration and the catalogue, loaded once and shared read-only.

use std::{fmt, path::PathBuf, sync::Arc};

use anyhow::Context;
use re_catalogue::{Catalogue, CatalogueView};

use crate::config::TrackerConfig;

/// Where the catalogue was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueSource {
    /// Dataset compiled into the binary.
    Bundled,
    /// A file given on the command line or in the config.
    File(PathBuf),
}

impl fmt::Display for CatalogueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueSource::Bundled => f.write_str("bundled dataset"),
            CatalogueSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// State shared by all subcommands.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Effective configuration.
    pub config: TrackerConfig,
    /// Origin of [`AppContext::catalogue`].
    pub source: CatalogueSource,
    /// The loaded catalogue.
    pub catalogue: Arc<Catalogue>,
}

impl AppContext {
    /// Load the catalogue named by `catalogue_override`, the config, or the
    /// bundled dataset, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue file cannot be read or parsed.
    pub fn load(config: TrackerConfig, catalogue_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let source = match catalogue_override.or_else(|| config.catalogue.clone()) {
            Some(path) => CatalogueSource::File(path),
            None => CatalogueSource::Bundled,
        };

        let catalogue = match &source {
            CatalogueSource::Bundled => Catalogue::bundled().context("Bundled catalogue is invalid")?,
            CatalogueSource::File(path) => Catalogue::load(path)
                .with_context(|| format!("Failed to load catalogue {}", path.display()))?,
        };

        info!(
            "loaded {} classes, {} items from {source}",
            catalogue.classes.len(),
            catalogue.item_count()
        );

        Ok(Self {
            config,
            source,
            catalogue: Arc::new(catalogue),
        })
    }

    /// Build a view model.
    ///
    /// An explicit `class` must exist. Without one the configured default is
    /// used, falling back to the first class when it is missing.
    pub fn view(&self, class: Option<&str>) -> anyhow::Result<CatalogueView> {
        let view = match class {
            Some(name) => CatalogueView::new(self.catalogue.clone(), name)?,
            None => CatalogueView::with_preferred_class(
                self.catalogue.clone(),
                self.config.default_class(),
            )?,
        };
        Ok(view)
    }
}
