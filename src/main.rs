use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod index;
mod matching;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("barcode_solver=debug,info")
    } else {
        EnvFilter::new("barcode_solver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Lookup(args) => {
            cli::lookup::run(args, cli.format)?;
        }
        cli::Commands::Substrings(args) => {
            cli::substrings::run(args, cli.format)?;
        }
        cli::Commands::Stats(args) => {
            cli::stats::run(args, cli.format)?;
        }
    }

    Ok(())
}
