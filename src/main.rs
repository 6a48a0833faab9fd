use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;
mod table;

#[derive(Parser)]
#[command(name = "tally", version, about = "Plain-text double-entry bookkeeping")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show rolled-up balances for every account
    Balance(cli::balance::Args),
    /// Check the integrity of ledger files
    Check(cli::check::Args),
    /// Show a running total for a single account
    Running(cli::running::Args),
    /// Convert CSV bank statements into ledger text
    Import(cli::import::Args),
    /// Reprint ledger files in canonical form
    Fmt(cli::fmt::Args),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("TALLY_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Commands::Balance(args) => cli::balance::run(&args),
        Commands::Check(args) => cli::check::run(&args),
        Commands::Running(args) => cli::running::run(&args),
        Commands::Import(args) => cli::import::run(&args),
        Commands::Fmt(args) => cli::fmt::run(&args),
    }
}
