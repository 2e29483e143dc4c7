//! Location coverage statistics.
//!
//! Coverage is a property of the static dataset alone; it ignores the current
//! selection and filters.

use std::fmt;

use crate::data::{Catalogue, ClassEntry, Item};

/// How many items have a known location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coverage {
    pub total: usize,
    pub populated: usize,
}

impl Coverage {
    fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        items.into_iter().fold(Coverage::default(), |mut acc, item| {
            acc.total += 1;
            if item.has_location() {
                acc.populated += 1;
            }
            acc
        })
    }

    /// Populated share in percent, `None` for an empty dataset.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.populated as f64 * 100.0 / self.total as f64)
    }

    /// Items without a known location.
    pub fn missing(&self) -> usize {
        self.total - self.populated
    }

    /// Every item has a known location. An empty dataset is never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.populated == self.total
    }
}

impl fmt::Display for Coverage {
    /// Formats as `populated/total (pct)`, with `n/a` when nothing is tracked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} (", self.populated, self.total)?;
        match self.percentage() {
            Some(pct) => write!(f, "{pct:.2}%)"),
            None => write!(f, "n/a)"),
        }
    }
}

/// Coverage over every item of every class.
pub fn coverage(catalogue: &Catalogue) -> Coverage {
    Coverage::from_items(catalogue.classes.iter().flat_map(|c| c.items.iter()))
}

/// Coverage of a single class.
pub fn class_coverage(class: &ClassEntry) -> Coverage {
    Coverage::from_items(&class.items)
}

/// Per-class coverage in catalogue order.
pub fn coverage_by_class(catalogue: &Catalogue) -> Vec<(&str, Coverage)> {
    catalogue
        .classes
        .iter()
        .map(|c| (c.name.as_str(), class_coverage(c)))
        .collect()
}
