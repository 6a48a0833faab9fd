use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use libtally::{import_statement, Account, Renderer};

#[derive(clap::Args)]
pub struct Args {
    /// Source account the statement belongs to, e.g. assets:bank:main
    account: String,

    /// CSV statement files (date,description,amount rows)
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

pub fn run(args: &Args) -> Result<i32> {
    let account = Account::new(args.account.as_str());
    let mut failed = false;

    for file in &args.files {
        let imported = File::open(file)
            .with_context(|| format!("cannot open {}", file.display()))
            .and_then(|f| {
                import_statement(f, &account)
                    .with_context(|| format!("cannot import {}", file.display()))
            });
        match imported {
            Ok(set) => Renderer::new(&set).write_to(&mut io::stdout())?,
            Err(err) => {
                eprintln!("{err:#}");
                failed = true;
            }
        }
    }

    Ok(if failed { 1 } else { 0 })
}
