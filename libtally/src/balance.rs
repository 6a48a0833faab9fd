use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::account::Account;
use crate::amount::Amount;
use crate::transaction::TransactionSet;

/// Inclusive `[from, to]` date window; either bound may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateFilter {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> DateFilter {
        DateFilter { from, to }
    }

    pub fn unbounded() -> DateFilter {
        DateFilter::default()
    }

    pub fn includes(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// Net balance per account, with every posting propagated into all of its
/// ancestors.
///
/// Placeholders are resolved through `normalized_entries` before
/// accumulation. The `BTreeMap` keys come back in lexicographic path order,
/// which is also the display order. Zero balances stay in the map; dropping
/// them is a presentation concern.
pub fn balances(set: &TransactionSet, filter: &DateFilter) -> BTreeMap<Account, Amount> {
    let mut totals: BTreeMap<Account, Amount> = BTreeMap::new();

    for txn in set {
        if !filter.includes(txn.date) {
            continue;
        }
        for entry in txn.normalized_entries() {
            let total = totals.entry(entry.account).or_insert(Amount::ZERO);
            *total = *total + entry.amount;
        }
    }

    // roll up into parents from a snapshot of the direct totals; walking the
    // live map while inserting into it would double count
    let direct: Vec<(Account, Amount)> = totals
        .iter()
        .map(|(account, balance)| (account.clone(), *balance))
        .collect();
    for (account, balance) in direct {
        let mut current = account;
        while let Some(parent) = current.parent() {
            let total = totals.entry(parent.clone()).or_insert(Amount::ZERO);
            *total = *total + balance;
            current = parent;
        }
    }

    totals
}
