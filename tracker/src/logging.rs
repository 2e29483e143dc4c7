//! Logger setup.
//!
//! Uses `env_logger` with the filter taken from `RUST_LOG` (default `warn`).
//! The TUI owns the terminal while it runs, so interactive sessions log to a
//! file or not at all.

use std::{fs::File, path::Path};

use anyhow::Context;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Install the global logger.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is
/// already installed.
pub fn init(log_file: Option<&Path>, interactive: bool) -> anyhow::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if interactive => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {}
    }

    builder.try_init()?;
    Ok(())
}
