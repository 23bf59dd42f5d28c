mod cli;
mod config;
mod error;
mod launchpad;
mod utils;
mod workflow;

#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, run};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(outcome) => println!("{outcome}"),
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
