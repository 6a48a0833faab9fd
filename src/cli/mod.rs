pub mod balance;
pub mod check;
pub mod fmt;
pub mod import;
pub mod running;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use libtally::TransactionSet;

/// Parse one ledger file. Failures carry the path; callers report them and
/// move on to the next file in the batch.
pub fn load(path: &Path) -> Result<TransactionSet> {
    let file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    libtally::parse(BufReader::new(file))
        .with_context(|| format!("cannot parse {}", path.display()))
}
