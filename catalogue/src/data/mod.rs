//! Catalogue data structures and loading.
//!
//! The shapes mirror the dataset document:
//!
//! - [`catalogue`] - The whole collection, loading and integrity checks
//! - [`class`] - Character classes and their specs
//! - [`item`] - Individual rare equipment entries
//! - [`rarity`] - Rarity tiers and their precedence

/// Catalogue container, loading and integrity reporting.
pub mod catalogue;

/// Character classes and specs.
pub mod class;

/// Rare equipment entries.
pub mod item;

/// Rarity tiers.
pub mod rarity;

pub use catalogue::{Catalogue, IntegrityIssue};
pub use class::{ClassEntry, Spec};
pub use item::{Item, UNKNOWN_LOCATION};
pub use rarity::{ANY, Rarity};
