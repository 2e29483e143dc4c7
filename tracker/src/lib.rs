//! # re-tracker
//!
//! Terminal viewer for the Bronzebeard rare equipment (RE) catalogue.
//!
//! ## Features
//!
//! - **Viewer**: interactive TUI with class picker, search, rarity and spec
//!   filters and a collapsible item list showing where each item drops
//! - **Reports**: non-interactive listing, class overview and location
//!   coverage for scripts and pipes
//! - **Configuration**: optional `.re-tracker.toml` for the start class,
//!   catalogue file and log file
//!
//! ## Modules
//!
//! - [`config`] - Configuration file handling
//! - [`ctx`] - Application context and catalogue loading
//! - [`logging`] - Logger setup
//! - [`report`] - Plain-text output
//! - [`tui`] - Interactive viewer

/// Configuration file handling.
pub mod config;

/// Application context and catalogue loading.
pub mod ctx;

/// Logger setup.
pub mod logging;

/// Plain-text output for scripts and pipes.
pub mod report;

/// Interactive terminal viewer.
///
/// Renders the view model with ratatui and maps key presses onto its
/// operations.
pub mod tui;

#[macro_use]
extern crate log;
