use std::fmt;
use std::ops::Add;

use crate::transaction::{Transaction, TransactionSet};

/// A structural problem found in a transaction. Problems are diagnostics,
/// not errors: the checker never rejects or mutates its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    Unbalanced,
    MissingEntries,
    TooManyPlaceholders,
    DatedBeforePrevious,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Problem::Unbalanced => "unbalanced",
            Problem::MissingEntries => "missing entries",
            Problem::TooManyPlaceholders => "too many placeholders",
            Problem::DatedBeforePrevious => "is dated before the previous transaction",
        };
        write!(f, "{text}")
    }
}

/// Problems for one transaction in isolation, in reporting order.
pub fn problems_for(txn: &Transaction) -> Vec<Problem> {
    let mut problems = Vec::new();
    if !txn.is_balanced() {
        problems.push(Problem::Unbalanced);
    }
    if txn.entries.len() < 2 {
        problems.push(Problem::MissingEntries);
    }
    if txn.placeholders() > 1 {
        problems.push(Problem::TooManyPlaceholders);
    }
    problems
}

/// Problems for every transaction in the set, parallel to its iteration
/// order, including the date-monotonicity check against the previous
/// transaction in the given order.
pub fn check(set: &TransactionSet) -> Vec<Vec<Problem>> {
    let mut last_date = None;
    set.iter()
        .map(|txn| {
            let mut problems = problems_for(txn);
            if let Some(previous) = last_date {
                if txn.date < previous {
                    problems.push(Problem::DatedBeforePrevious);
                }
            }
            last_date = Some(txn.date);
            problems
        })
        .collect()
}

/// Problem and transaction counts, summable across files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub problems: usize,
    pub transactions: usize,
}

impl CheckSummary {
    pub fn of(set: &TransactionSet, problems: &[Vec<Problem>]) -> CheckSummary {
        CheckSummary {
            problems: problems.iter().map(Vec::len).sum(),
            transactions: set.len(),
        }
    }
}

impl Add for CheckSummary {
    type Output = CheckSummary;

    fn add(self, rhs: CheckSummary) -> CheckSummary {
        CheckSummary {
            problems: self.problems + rhs.problems,
            transactions: self.transactions + rhs.transactions,
        }
    }
}
