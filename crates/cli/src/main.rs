//! stemma CLI binary.

mod args;
mod commands;
mod demo;

use args::StemmaArgs;
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = StemmaArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
