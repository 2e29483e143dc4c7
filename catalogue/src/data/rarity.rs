use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogueError, Result};

/// Sentinel accepted by the rarity and spec filters meaning "no filter".
pub const ANY: &str = "any";

/// Rarity tier of an item, declared in display precedence order.
///
/// The derived ordering follows [`Rarity::rank`], so sorting a slice of
/// rarities puts artifacts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Artifact,
    Legendary,
    Epic,
}

impl Rarity {
    /// All tiers in rank order.
    pub const ALL: [Rarity; 3] = [Rarity::Artifact, Rarity::Legendary, Rarity::Epic];

    /// Sort rank, lower comes first.
    pub fn rank(self) -> u8 {
        match self {
            Rarity::Artifact => 0,
            Rarity::Legendary => 1,
            Rarity::Epic => 2,
        }
    }

    /// Serialized name, as stored in the dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Artifact => "artifact",
            Rarity::Legendary => "legendary",
            Rarity::Epic => "epic",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Artifact => "Artifact",
            Rarity::Legendary => "Legendary",
            Rarity::Epic => "Epic",
        }
    }

    /// Display colour as an `(r, g, b)` triple.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Rarity::Artifact => (0xa4, 0x84, 0x6c),
            Rarity::Legendary => (0xa0, 0x54, 0x09),
            Rarity::Epic => (0x72, 0x0d, 0x9a),
        }
    }

    /// Parse a filter value. `any` and the empty string clear the filter.
    pub fn parse_filter(s: &str) -> Result<Option<Rarity>> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ANY) {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl FromStr for Rarity {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogueError::UnknownRarity(s.to_string()))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
