use serde::{Deserialize, Serialize};

use crate::data::rarity::Rarity;

/// Text shown in place of an empty location.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// A trackable piece of rare equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name, unique within its class.
    pub name: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Where the item is obtained. Empty when untracked.
    #[serde(default)]
    pub location: String,
    /// Names of the class specs the item is relevant to.
    #[serde(default)]
    pub specs: Vec<String>,
}

impl Item {
    /// Whether the item has a known location.
    pub fn has_location(&self) -> bool {
        !self.location.is_empty()
    }

    /// Location text, or [`UNKNOWN_LOCATION`] when untracked.
    pub fn location_or_unknown(&self) -> &str {
        if self.has_location() {
            &self.location
        } else {
            UNKNOWN_LOCATION
        }
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }

    /// Exact membership test on the spec set.
    pub fn has_spec(&self, spec: &str) -> bool {
        self.specs.iter().any(|s| s == spec)
    }
}
