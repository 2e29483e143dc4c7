use std::{io, path::PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use re_tracker::{
    config::TrackerConfig,
    ctx::AppContext,
    logging,
    report::{self, ListFilters},
    tui,
};

#[derive(Parser)]
#[command(
    name = "re-tracker",
    version,
    about = "Browse the Bronzebeard rare equipment catalogue"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Catalogue file (.json or .toml). Defaults to the bundled dataset.
    #[arg(long, value_name = "PATH", global = true)]
    catalogue: Option<PathBuf>,

    /// Config file. Defaults to .re-tracker.toml when present.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Write logs to a file.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive viewer (default).
    View {
        /// Class to start with.
        #[arg(long)]
        class: Option<String>,
    },
    /// Print the filtered items of a class.
    List(ListArgs),
    /// Print classes and their specs.
    Classes,
    /// Print location coverage.
    Stats,
}

#[derive(Args)]
struct ListArgs {
    /// Class to list. Defaults to the configured start class.
    #[arg(long)]
    class: Option<String>,

    /// Case-insensitive name substring.
    #[arg(short, long, default_value = "")]
    search: String,

    /// artifact, legendary, epic or any.
    #[arg(short, long, default_value = "any")]
    rarity: String,

    /// Spec name or any.
    #[arg(long, default_value = "any")]
    spec: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = TrackerConfig::load(cli.config.as_deref())?;

    let interactive = matches!(cli.command, None | Some(Command::View { .. }));
    let log_file = cli.log_file.or_else(|| config.log_file.clone());
    logging::init(log_file.as_deref(), interactive).context("Failed to set up logging")?;

    let ctx = AppContext::load(config, cli.catalogue)?;

    match cli.command.unwrap_or(Command::View { class: None }) {
        Command::View { class } => {
            let view = ctx.view(class.as_deref())?;
            tui::run(view)?;
        }
        Command::List(args) => {
            let mut view = ctx.view(args.class.as_deref())?;
            let filters = ListFilters {
                search: args.search,
                rarity: args.rarity,
                spec: args.spec,
            };
            report::write_list(&mut io::stdout().lock(), &mut view, &filters)?;
        }
        Command::Classes => report::write_classes(&mut io::stdout().lock(), &ctx.catalogue)?,
        Command::Stats => report::write_stats(&mut io::stdout().lock(), &ctx.catalogue)?,
    }
    Ok(())
}
