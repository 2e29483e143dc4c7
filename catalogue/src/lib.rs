//! # re-catalogue
//!
//! Data model and view model for the Bronzebeard rare equipment (RE) catalogue.
//!
//! The catalogue is a small static dataset of character classes, each with its
//! specs and a list of rare items. This crate loads it, lets a front end pick a
//! class and filter its items by name, rarity and spec, and reports how many
//! items have a known location.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use re_catalogue::{Catalogue, CatalogueView, Rarity};
//!
//! let catalogue = Arc::new(Catalogue::bundled().unwrap());
//! let mut view = CatalogueView::new(catalogue, "Paladin").unwrap();
//!
//! view.set_rarity_filter(Some(Rarity::Legendary));
//! for item in view.visible_items() {
//!     println!("{} - {}", item.name, item.location_or_unknown());
//! }
//! println!("known locations: {}", view.coverage());
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Catalogue structures and loading
//! - [`view`] - Selection state and the filtered item list
//! - [`stats`] - Location coverage statistics
//! - [`error`] - Error types and result definitions

#[macro_use]
extern crate log;

/// Catalogue structures and loading.
pub mod data;

/// Error types and result definitions.
pub mod error;

/// Location coverage statistics.
pub mod stats;

/// Selection state and the derived item list.
pub mod view;

pub use data::{ANY, Catalogue, ClassEntry, IntegrityIssue, Item, Rarity, Spec};
pub use error::{CatalogueError, Result};
pub use stats::{Coverage, coverage, coverage_by_class};
pub use view::{CatalogueView, DEFAULT_CLASS, Selection};
