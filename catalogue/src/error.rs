//! Error types and result definitions for catalogue operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or querying a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The catalogue file could not be read.
    #[error("failed to read catalogue {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid catalogue JSON.
    #[error("invalid catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid catalogue TOML.
    #[error("invalid catalogue TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension does not name a supported format.
    #[error("unsupported catalogue file extension: {0:?}")]
    UnsupportedFormat(String),

    /// A class name that is not part of the catalogue was requested.
    #[error("unknown class {name:?}, expected one of: {}", .known.join(", "))]
    UnknownClass { name: String, known: Vec<String> },

    /// Text that does not name a rarity tier.
    #[error("unknown rarity {0:?}, expected artifact, legendary, epic or any")]
    UnknownRarity(String),

    /// The catalogue declares no classes, so nothing can be selected.
    #[error("catalogue contains no classes")]
    EmptyCatalogue,
}

/// Result type used throughout the catalogue crate.
pub type Result<T> = std::result::Result<T, CatalogueError>;

impl CatalogueError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogueError::Io {
            path: path.into(),
            source,
        }
    }
}
