use std::{cell::RefCell, cmp::Ordering};

use feruca::{Collator, Tailoring};

use crate::{
    data::{Catalogue, ClassEntry, Item, Rarity},
    error::Result,
};

/// Selection and filter state of the catalogue view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Name of the selected class.
    pub current_class: String,
    /// Case-insensitive name substring; empty matches everything.
    pub search_text: String,
    /// `None` means any rarity.
    pub rarity_filter: Option<Rarity>,
    /// `None` means any spec.
    pub spec_filter: Option<String>,
}

impl Selection {
    /// Selection of `class` with every filter cleared.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            current_class: class.into(),
            search_text: String::new(),
            rarity_filter: None,
            spec_filter: None,
        }
    }

    /// Clear search, rarity and spec filters, keeping the class.
    pub fn reset_filters(&mut self) {
        self.search_text.clear();
        self.rarity_filter = None;
        self.spec_filter = None;
    }

    pub fn has_filters(&self) -> bool {
        !self.search_text.is_empty() || self.rarity_filter.is_some() || self.spec_filter.is_some()
    }
}

/// Whether `item` passes all three filters of `selection`.
pub fn matches(item: &Item, selection: &Selection) -> bool {
    ItemPredicate::new(selection).matches(item)
}

/// Filters with the search needle lowercased once per pass.
struct ItemPredicate<'s> {
    needle: String,
    rarity: Option<Rarity>,
    spec: Option<&'s str>,
}

impl<'s> ItemPredicate<'s> {
    fn new(selection: &'s Selection) -> Self {
        Self {
            needle: selection.search_text.to_lowercase(),
            rarity: selection.rarity_filter,
            spec: selection.spec_filter.as_deref(),
        }
    }

    fn matches(&self, item: &Item) -> bool {
        item.name_contains(&self.needle)
            && self.rarity.is_none_or(|r| item.rarity == r)
            && self.spec.is_none_or(|s| item.has_spec(s))
    }
}

/// Indices into `class.items` of the visible items, in display order.
pub fn visible_indices(class: &ClassEntry, selection: &Selection) -> Vec<usize> {
    let predicate = ItemPredicate::new(selection);
    let mut indices: Vec<usize> = class
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| predicate.matches(item))
        .map(|(idx, _)| idx)
        .collect();
    indices.sort_by(|&a, &b| compare_items(&class.items[a], &class.items[b]));
    indices
}

/// Filtered and sorted items of the selected class.
///
/// Fails with `UnknownClass` when the selection names a class the catalogue
/// does not contain.
pub fn visible_items<'a>(catalogue: &'a Catalogue, selection: &Selection) -> Result<Vec<&'a Item>> {
    let class = catalogue.require_class(&selection.current_class)?;
    Ok(visible_indices(class, selection)
        .into_iter()
        .map(|idx| &class.items[idx])
        .collect())
}

/// Display order: rarity rank first, then name.
pub fn compare_items(a: &Item, b: &Item) -> Ordering {
    a.rarity
        .rank()
        .cmp(&b.rarity.rank())
        .then_with(|| collate(&a.name, &b.name))
}

thread_local! {
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::default(), false, true));
}

/// Locale-aware string ordering (Unicode collation, CLDR root order).
///
/// Accents and case only break ties between names with the same base
/// letters, lowercase first. Punctuation sorts before digits and letters.
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.with_borrow_mut(|collator| collator.collate(a, b))
}
