use serde::{Deserialize, Serialize};

use crate::data::item::Item;

/// A named sub-role of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub name: String,
    /// Icon reference, opaque to this crate.
    #[serde(default)]
    pub icon: String,
}

/// A character class with its specs and rare equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub name: String,
    /// Icon reference, opaque to this crate.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub specs: Vec<Spec>,
    /// Items in dataset order.
    #[serde(rename = "res", alias = "items", default)]
    pub items: Vec<Item>,
}

impl ClassEntry {
    /// Spec names in declaration order.
    pub fn spec_names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.name.as_str())
    }

    /// Whether the class declares a spec with this exact name.
    pub fn has_spec(&self, name: &str) -> bool {
        self.specs.iter().any(|s| s.name == name)
    }
}
