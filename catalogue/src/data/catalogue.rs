use std::{collections::HashSet, fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    data::class::ClassEntry,
    error::{CatalogueError, Result},
};

/// Dataset compiled into the crate.
const BUNDLED_DB: &str = include_str!("../../assets/db.json");

/// The full static collection of classes.
///
/// Loaded once and never mutated; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub classes: Vec<ClassEntry>,
}

/// A violated data-integrity assumption found by [`Catalogue::integrity_issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// Two items of one class share a name.
    DuplicateItem { class: String, item: String },
    /// An item references a spec its class does not declare.
    UndeclaredSpec {
        class: String,
        item: String,
        spec: String,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::DuplicateItem { class, item } => {
                write!(f, "{class}: item {item:?} is listed more than once")
            }
            IntegrityIssue::UndeclaredSpec { class, item, spec } => {
                write!(f, "{class}: item {item:?} references undeclared spec {spec:?}")
            }
        }
    }
}

impl Catalogue {
    /// The dataset bundled with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_DB)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let catalogue: Catalogue = serde_json::from_str(s)?;
        catalogue.log_integrity();
        Ok(catalogue)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let catalogue: Catalogue = toml::from_str(s)?;
        catalogue.log_integrity();
        Ok(catalogue)
    }

    /// Load a catalogue file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        // Reject before touching the file system.
        if !matches!(ext.as_str(), "json" | "toml" | "tml") {
            return Err(CatalogueError::UnsupportedFormat(ext));
        }

        let content = fs::read_to_string(path).map_err(|e| CatalogueError::io(path, e))?;
        debug!("loading catalogue from {}", path.display());

        match ext.as_str() {
            "json" => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    /// Find a class by exact name.
    pub fn class(&self, name: &str) -> Option<&ClassEntry> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.class(name).is_some()
    }

    /// Class names in catalogue order.
    pub fn class_names(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.name.clone()).collect()
    }

    /// Total number of items over all classes.
    pub fn item_count(&self) -> usize {
        self.classes.iter().map(|c| c.items.len()).sum()
    }

    /// Look up a class or fail with the list of known names.
    pub fn require_class(&self, name: &str) -> Result<&ClassEntry> {
        self.class(name).ok_or_else(|| CatalogueError::UnknownClass {
            name: name.to_string(),
            known: self.class_names(),
        })
    }

    /// Report duplicate item names and undeclared spec references.
    ///
    /// These are assumptions about the dataset and are never enforced.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();
        for class in &self.classes {
            let mut seen = HashSet::new();
            for item in &class.items {
                if !seen.insert(item.name.as_str()) {
                    issues.push(IntegrityIssue::DuplicateItem {
                        class: class.name.clone(),
                        item: item.name.clone(),
                    });
                }
                for spec in &item.specs {
                    if !class.has_spec(spec) {
                        issues.push(IntegrityIssue::UndeclaredSpec {
                            class: class.name.clone(),
                            item: item.name.clone(),
                            spec: spec.clone(),
                        });
                    }
                }
            }
        }
        issues
    }

    fn log_integrity(&self) {
        for issue in self.integrity_issues() {
            warn!("catalogue integrity: {issue}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::Rarity;

    const PALADIN_JSON: &str = r#"{
        "classes": [{
            "name": "Paladin",
            "icon": "paladin.png",
            "specs": [
                {"name": "Holy", "icon": "holy.png"},
                {"name": "Retribution", "icon": "ret.png"}
            ],
            "res": [
                {"name": "Seal of Light", "rarity": "legendary", "location": "", "specs": ["Holy"]},
                {"name": "Ashbringer", "rarity": "artifact", "location": "Naxxramas", "specs": ["Retribution"]}
            ]
        }]
    }"#;

    #[test]
    fn test_parse_json() {
        let c = Catalogue::from_json_str(PALADIN_JSON).unwrap();
        assert_eq!(c.class_names(), vec!["Paladin"]);
        let paladin = c.class("Paladin").unwrap();
        assert_eq!(paladin.items.len(), 2);
        assert_eq!(paladin.items[1].rarity, Rarity::Artifact);
        assert_eq!(paladin.spec_names().collect::<Vec<_>>(), ["Holy", "Retribution"]);
        assert!(c.integrity_issues().is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let s = r#"
            [[classes]]
            name = "Mage"
            icon = "mage.png"

            [[classes.specs]]
            name = "Fire"
            icon = "fire.png"

            [[classes.res]]
            name = "Flamecaller"
            rarity = "epic"
            location = "Molten Core"
            specs = ["Fire"]
        "#;
        let c = Catalogue::from_toml_str(s).unwrap();
        let mage = c.require_class("Mage").unwrap();
        assert_eq!(mage.items[0].name, "Flamecaller");
        assert_eq!(c.item_count(), 1);
    }

    #[test]
    fn test_require_unknown_class() {
        let c = Catalogue::from_json_str(PALADIN_JSON).unwrap();
        let err = c.require_class("Bard").unwrap_err();
        assert!(matches!(
            err,
            CatalogueError::UnknownClass { ref name, ref known } if name == "Bard" && known == &["Paladin"]
        ));
    }

    #[test]
    fn test_integrity_issues() {
        let s = r#"{"classes": [{
            "name": "Rogue",
            "specs": [{"name": "Combat"}],
            "res": [
                {"name": "Dagger", "rarity": "epic", "specs": ["Combat"]},
                {"name": "Dagger", "rarity": "epic", "specs": ["Subtlety"]}
            ]
        }]}"#;
        let c = Catalogue::from_json_str(s).unwrap();
        let issues = c.integrity_issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0],
            IntegrityIssue::DuplicateItem {
                class: "Rogue".into(),
                item: "Dagger".into()
            }
        );
        assert_eq!(
            issues[1].to_string(),
            "Rogue: item \"Dagger\" references undeclared spec \"Subtlety\""
        );
    }

    #[test]
    fn test_unknown_rarity_is_parse_error() {
        let s = r#"{"classes": [{"name": "Rogue", "res": [{"name": "X", "rarity": "rare"}]}]}"#;
        assert!(matches!(
            Catalogue::from_json_str(s),
            Err(CatalogueError::Json(_))
        ));
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(PALADIN_JSON.as_bytes()).unwrap();
        let c = Catalogue::load(file.path()).unwrap();
        assert!(c.contains_class("Paladin"));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let err = Catalogue::load("catalogue.yaml").unwrap_err();
        assert!(matches!(err, CatalogueError::UnsupportedFormat(ext) if ext == "yaml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalogue::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogueError::Io { .. }));
    }

    #[test]
    fn test_bundled_parses() {
        let c = Catalogue::bundled().unwrap();
        assert!(c.contains_class("Paladin"));
        assert!(c.integrity_issues().is_empty());
    }
}
