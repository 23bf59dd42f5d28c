use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::constants::{DEFAULT_HOST_PROCESS, DEFAULT_SEARCH_ROOT};
use crate::error::Result;
use crate::launchpad::KillallReloader;
use crate::workflow::{Outcome, Workflow};

use super::{context::CliContext, prompts::ConsoleSelector};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "padsweep",
    version = env!("CARGO_PKG_VERSION"),
    about = "Remove stale entries from the macOS Launchpad",
    after_help = "Launchpad is restarted (killall Dock) once the selected entries are removed."
)]
pub struct Args {
    /// Directory searched for the Launchpad database
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SEARCH_ROOT)]
    pub root: PathBuf,

    /// Use this database file instead of searching for it
    #[arg(long, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Process to terminate so Launchpad reloads its state
    #[arg(long, value_name = "NAME", default_value = DEFAULT_HOST_PROCESS)]
    pub process: String,

    /// Remove the entries but leave the Dock running
    #[arg(long)]
    pub no_restart: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub async fn run(args: Args) -> Result<Outcome> {
    let ctx = CliContext::from_args(args)?;
    let reloader = KillallReloader::new(ctx.settings().process.clone());

    Workflow::new(ctx.settings(), &ConsoleSelector, &reloader)
        .run()
        .await
}
