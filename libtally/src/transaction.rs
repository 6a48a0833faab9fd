use chrono::NaiveDate;

use crate::account::Account;
use crate::amount::Amount;

/// An atomic posting: one account paired with one amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub account: Account,
    pub amount: Amount,
}

impl Entry {
    pub fn new(account: Account, amount: Amount) -> Entry {
        Entry { account, amount }
    }
}

/// A dated, described, ordered list of entries.
///
/// Constructed once by the parser or an import adapter and never mutated;
/// all derived values below are pure functions of the entry list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub entries: Vec<Entry>,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, entries: Vec<Entry>) -> Transaction {
        Transaction {
            date,
            description: description.into(),
            entries,
        }
    }

    /// True iff every entry's amount is fixed.
    pub fn is_fixed(&self) -> bool {
        self.entries.iter().all(|e| e.amount.is_fixed())
    }

    /// Sum of all entry amounts when fixed; an unresolved transaction
    /// reports zero rather than failing.
    pub fn balance(&self) -> Amount {
        if self.is_fixed() {
            self.fixed_balance()
        } else {
            Amount::ZERO
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.balance().is_zero()
    }

    /// Sum of the fixed entry amounts only, ignoring placeholders.
    pub fn fixed_balance(&self) -> Amount {
        Amount::Fixed(
            self.entries
                .iter()
                .filter(|e| e.amount.is_fixed())
                .map(|e| e.amount.cents())
                .sum(),
        )
    }

    /// Number of entries whose amount is unfixed.
    pub fn placeholders(&self) -> usize {
        self.entries.iter().filter(|e| !e.amount.is_fixed()).count()
    }

    /// The entries with every unfixed amount replaced by the negated fixed
    /// balance, i.e. the value that makes the transaction balance.
    ///
    /// When more than one entry is unfixed, each one receives that same
    /// value. The integrity checker flags such transactions; normalization
    /// itself does not reject them.
    pub fn normalized_entries(&self) -> Vec<Entry> {
        if self.is_fixed() {
            return self.entries.clone();
        }

        let fill = -self.fixed_balance();
        self.entries
            .iter()
            .map(|e| {
                if e.amount.is_fixed() {
                    e.clone()
                } else {
                    Entry::new(e.account.clone(), fill)
                }
            })
            .collect()
    }
}

/// An ordered, immutable collection of transactions; the parser's output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionSet {
    transactions: Vec<Transaction>,
}

impl TransactionSet {
    pub fn new(transactions: Vec<Transaction>) -> TransactionSet {
        TransactionSet { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl<'a> IntoIterator for &'a TransactionSet {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

impl FromIterator<Transaction> for TransactionSet {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> TransactionSet {
        TransactionSet::new(iter.into_iter().collect())
    }
}
