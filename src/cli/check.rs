use std::io;
use std::path::PathBuf;

use anyhow::Result;
use libtally::{check, CheckSummary, Renderer, TransactionSet};

use crate::cli;

#[derive(clap::Args)]
pub struct Args {
    /// Ledger files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

pub fn run(args: &Args) -> Result<i32> {
    let mut summary = CheckSummary::default();
    let mut failed = false;

    for file in &args.files {
        match cli::load(file) {
            Ok(set) => summary = summary + check_file(&set)?,
            Err(err) => {
                eprintln!("{err:#}");
                failed = true;
            }
        }
    }

    println!(
        "Found {} problems in {} transactions",
        summary.problems, summary.transactions
    );
    Ok(if summary.problems > 0 || failed { 1 } else { 0 })
}

fn check_file(set: &TransactionSet) -> Result<CheckSummary> {
    let problems = check(set);
    let renderer = Renderer::new(set);
    let mut stdout = io::stdout();

    for (txn, found) in set.iter().zip(&problems) {
        if found.is_empty() {
            continue;
        }
        println!();
        renderer.write_transaction(txn, &mut stdout)?;
        for problem in found {
            println!("  !!! {problem}");
        }
        println!();
    }

    Ok(CheckSummary::of(set, &problems))
}
