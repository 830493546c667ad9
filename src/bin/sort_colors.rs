use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use flag_sort_research_rs::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().as_str().to_ascii_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if args.values.is_empty() {
        for line in cli::run_scenarios() {
            println!("{line}");
        }
    } else {
        println!("{}", cli::run_values(&args.values, args.colors, io::stdin().lock())?);
    }

    Ok(())
}
