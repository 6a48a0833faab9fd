//! tally - a plain-text double-entry bookkeeping toolkit
//! ---
//!
//! Parses a line-oriented ledger format into immutable transaction values,
//! enforces double-entry balance invariants, and folds entries into
//! hierarchical account balances.
//!
//! The format is one transaction per block: a `YYYY-MM-DD <description>`
//! header followed by indented `<account:path>  <amount>` entry lines, where
//! an amount may be a `$_____` placeholder to be inferred so the transaction
//! balances. `#` starts a comment; tabs are forbidden.

/// Account paths, e.g. `assets:bank:checking`, with parent/depth/containment
/// queries. An account is a plain string value; its parent is a string
/// transform, not a stored reference, so hierarchy walks cannot cycle.
pub mod account;

/// Exact-decimal monetary values: fixed cent counts or unfixed placeholders.
pub mod amount;

/// Account-balance aggregation with hierarchy rollup, and date filtering.
pub mod balance;

/// Structural integrity diagnostics over a transaction set.
pub mod check;

/// Bank-statement import adapters producing transaction sets directly.
pub mod import;

/// The ledger text parser: a single forward pass with one line of pushback.
pub mod parser;

/// Canonical ledger-text rendering; round-trips through the parser.
pub mod render;

/// Running-balance projection for a single account's history.
pub mod running;

/// The core value types: entries, transactions, transaction sets.
pub mod transaction;

pub use account::Account;
pub use amount::Amount;
pub use balance::{balances, DateFilter};
pub use check::{check, CheckSummary, Problem};
pub use import::{import_statement, ImportError, PLACEHOLDER_ACCOUNT};
pub use parser::{parse, parse_str, ParseError};
pub use render::{format_amount, render, Renderer};
pub use running::{running, RunningEntry};
pub use transaction::{Entry, Transaction, TransactionSet};
