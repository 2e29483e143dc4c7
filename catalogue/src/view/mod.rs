//! Catalogue view model.
//!
//! [`CatalogueView`] owns the selection state (current class, search text,
//! rarity and spec filters) over a shared, immutable [`Catalogue`] and keeps
//! the derived item list in sync with it. The list is recomputed only when a
//! setter actually changes the selection; the coverage statistic is computed
//! once per catalogue.

use std::sync::Arc;

use crate::{
    data::{ANY, Catalogue, ClassEntry, Item, Rarity},
    error::{CatalogueError, Result},
    stats::{self, Coverage},
};

/// Filtering and ordering of a class item list.
pub mod filter;

pub use filter::{Selection, collate, compare_items, visible_items};

/// Class selected when nothing else is configured.
pub const DEFAULT_CLASS: &str = "Paladin";

/// Selection state plus the lists derived from it.
#[derive(Debug, Clone)]
pub struct CatalogueView {
    catalogue: Arc<Catalogue>,
    selection: Selection,
    /// Position of the current class in `catalogue.classes`.
    class_index: usize,
    /// Indices into the current class items, in display order.
    visible: Vec<usize>,
    coverage: Coverage,
}

impl CatalogueView {
    /// Create a view with `class` selected and no filters.
    ///
    /// # Errors
    ///
    /// `EmptyCatalogue` when there is nothing to select, `UnknownClass` when
    /// `class` is not in the catalogue.
    pub fn new(catalogue: Arc<Catalogue>, class: &str) -> Result<Self> {
        if catalogue.classes.is_empty() {
            return Err(CatalogueError::EmptyCatalogue);
        }
        let class_index = Self::position(&catalogue, class)?;
        let coverage = stats::coverage(&catalogue);
        let mut view = Self {
            catalogue,
            selection: Selection::new(class),
            class_index,
            visible: Vec::new(),
            coverage,
        };
        view.refresh();
        Ok(view)
    }

    /// Like [`CatalogueView::new`], but falls back to the first class when
    /// `preferred` is missing.
    pub fn with_preferred_class(catalogue: Arc<Catalogue>, preferred: &str) -> Result<Self> {
        if !catalogue.contains_class(preferred) {
            let Some(first) = catalogue.classes.first().map(|c| c.name.clone()) else {
                return Err(CatalogueError::EmptyCatalogue);
            };
            warn!("class {preferred:?} not in catalogue, starting with {first:?}");
            return Self::new(catalogue, &first);
        }
        Self::new(catalogue, preferred)
    }

    fn position(catalogue: &Catalogue, name: &str) -> Result<usize> {
        catalogue
            .classes
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| CatalogueError::UnknownClass {
                name: name.to_string(),
                known: catalogue.class_names(),
            })
    }

    fn refresh(&mut self) {
        let class = &self.catalogue.classes[self.class_index];
        self.visible = filter::visible_indices(class, &self.selection);
    }

    /// Select a class, clearing every filter when it differs from the current one.
    ///
    /// Returns whether the class changed. Unknown names are rejected and leave
    /// the selection untouched.
    pub fn select_class(&mut self, name: &str) -> Result<bool> {
        if name == self.selection.current_class {
            return Ok(false);
        }
        self.class_index = Self::position(&self.catalogue, name)?;
        debug!("class {} -> {}", self.selection.current_class, name);
        self.selection = Selection::new(name);
        self.refresh();
        Ok(true)
    }

    /// Set the name search text. Returns whether it changed.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.selection.search_text {
            return false;
        }
        self.selection.search_text = text;
        self.refresh();
        true
    }

    /// Set or clear the rarity filter. Returns whether it changed.
    pub fn set_rarity_filter(&mut self, rarity: Option<Rarity>) -> bool {
        if rarity == self.selection.rarity_filter {
            return false;
        }
        self.selection.rarity_filter = rarity;
        self.refresh();
        true
    }

    /// Set the rarity filter from text; `any` clears it.
    pub fn set_rarity_filter_str(&mut self, value: &str) -> Result<bool> {
        Ok(self.set_rarity_filter(Rarity::parse_filter(value)?))
    }

    /// Set or clear the spec filter; `any` clears it. Returns whether it changed.
    ///
    /// The name is not checked against the class specs.
    pub fn set_spec_filter(&mut self, spec: Option<&str>) -> bool {
        let spec = spec.filter(|s| !s.is_empty() && *s != ANY);
        if spec == self.selection.spec_filter.as_deref() {
            return false;
        }
        self.selection.spec_filter = spec.map(str::to_string);
        self.refresh();
        true
    }

    /// Clear all filters, keeping the class. Returns whether anything changed.
    pub fn clear_filters(&mut self) -> bool {
        if !self.selection.has_filters() {
            return false;
        }
        self.selection.reset_filters();
        self.refresh();
        true
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn current_class(&self) -> &ClassEntry {
        &self.catalogue.classes[self.class_index]
    }

    /// Position of the current class in [`CatalogueView::class_options`].
    pub fn current_class_index(&self) -> usize {
        self.class_index
    }

    pub fn search_text(&self) -> &str {
        &self.selection.search_text
    }

    pub fn rarity_filter(&self) -> Option<Rarity> {
        self.selection.rarity_filter
    }

    pub fn spec_filter(&self) -> Option<&str> {
        self.selection.spec_filter.as_deref()
    }

    /// Filtered items of the current class, rarity first then name.
    pub fn visible_items(&self) -> Vec<&Item> {
        let class = self.current_class();
        self.visible.iter().map(|&idx| &class.items[idx]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The `pos`-th visible item.
    pub fn visible_item(&self, pos: usize) -> Option<&Item> {
        let idx = *self.visible.get(pos)?;
        self.current_class().items.get(idx)
    }

    /// Dataset-wide location coverage, independent of the selection.
    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    pub fn class_options(&self) -> impl Iterator<Item = &str> {
        self.catalogue.classes.iter().map(|c| c.name.as_str())
    }

    /// Spec names of the current class.
    pub fn spec_options(&self) -> impl Iterator<Item = &str> {
        self.current_class().spec_names()
    }

    pub fn rarity_options(&self) -> [Rarity; 3] {
        Rarity::ALL
    }
}
