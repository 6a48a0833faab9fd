use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use libtally::{balances, format_amount, DateFilter, TransactionSet};

use crate::cli;
use crate::table::{self, Column};

#[derive(clap::Args)]
pub struct Args {
    /// Only include transactions on or after this date (YYYY-MM-DD)
    #[arg(short, long)]
    from: Option<NaiveDate>,

    /// Only include transactions on or before this date (YYYY-MM-DD)
    #[arg(short, long)]
    to: Option<NaiveDate>,

    /// Emit account,balance rows as CSV instead of a table
    #[arg(long)]
    csv: bool,

    /// Ledger files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

pub fn run(args: &Args) -> Result<i32> {
    let filter = DateFilter::new(args.from, args.to);
    let mut failed = false;

    for file in &args.files {
        match cli::load(file) {
            Ok(set) => print_balances(file, &set, &filter, args.csv)?,
            Err(err) => {
                eprintln!("{err:#}");
                failed = true;
            }
        }
    }

    Ok(if failed { 1 } else { 0 })
}

fn print_balances(
    path: &Path,
    set: &TransactionSet,
    filter: &DateFilter,
    as_csv: bool,
) -> Result<()> {
    let totals = balances(set, filter);
    let nonzero = totals.iter().filter(|(_, balance)| !balance.is_zero());

    if as_csv {
        let mut writer = csv::Writer::from_writer(io::stdout());
        for (account, balance) in nonzero {
            let amount = format_amount(*balance);
            writer.write_record([account.name(), amount.as_str()])?;
        }
        writer.flush()?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = nonzero
        .map(|(account, balance)| {
            vec![
                format!(
                    "{}{}",
                    "    ".repeat(account.depth()),
                    account.last_component()
                ),
                format_amount(*balance),
            ]
        })
        .collect();

    println!("{}", path.display());
    table::print_rows(
        &mut io::stdout(),
        &rows,
        &[Column::dotted(), Column::right()],
    )?;
    println!();
    Ok(())
}
