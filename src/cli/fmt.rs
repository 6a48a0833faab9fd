use std::io;
use std::path::PathBuf;

use anyhow::Result;
use libtally::Renderer;

use crate::cli;

#[derive(clap::Args)]
pub struct Args {
    /// Ledger files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

pub fn run(args: &Args) -> Result<i32> {
    let mut failed = false;

    for file in &args.files {
        match cli::load(file) {
            Ok(set) => Renderer::new(&set).write_to(&mut io::stdout())?,
            Err(err) => {
                eprintln!("{err:#}");
                failed = true;
            }
        }
    }

    Ok(if failed { 1 } else { 0 })
}
