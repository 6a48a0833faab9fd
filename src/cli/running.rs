use std::io;
use std::path::PathBuf;

use anyhow::Result;
use libtally::{format_amount, running, Account, TransactionSet};

use crate::cli;
use crate::table::{self, Column};

#[derive(clap::Args)]
pub struct Args {
    /// Account to follow (exact path, not hierarchy-inclusive)
    account: String,

    /// Ledger files, in chronological order
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

pub fn run(args: &Args) -> Result<i32> {
    let account = Account::new(args.account.as_str());
    let mut sets: Vec<TransactionSet> = Vec::new();
    let mut failed = false;

    for file in &args.files {
        match cli::load(file) {
            Ok(set) => sets.push(set),
            Err(err) => {
                eprintln!("{err:#}");
                failed = true;
            }
        }
    }

    let rows: Vec<Vec<String>> = running(&sets, &account)
        .into_iter()
        .map(|row| {
            vec![
                format_amount(row.balance),
                format_amount(row.amount),
                row.date.to_string(),
                row.description,
            ]
        })
        .collect();

    table::print_rows(
        &mut io::stdout(),
        &rows,
        &[
            Column::right(),
            Column::right(),
            Column::left(),
            Column::left(),
        ],
    )?;

    Ok(if failed { 1 } else { 0 })
}
