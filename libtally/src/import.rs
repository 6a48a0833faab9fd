use std::io::Read;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::account::Account;
use crate::amount::Amount;
use crate::transaction::{Entry, Transaction, TransactionSet};

/// Account that takes the unfixed side of every imported transaction, to be
/// renamed by hand once the posting is categorized.
pub const PLACEHOLDER_ACCOUNT: &str = "-----";

/// Failure while importing an external statement; aborts that file only.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("record {0}: missing {1} field")]
    MissingField(usize, &'static str),
    #[error("record {0}: invalid date {1:?}")]
    InvalidDate(usize, String),
    #[error("record {0}: invalid amount {1:?}")]
    InvalidAmount(usize, String),
}

/// Import a bank-statement CSV export (`date,description,amount` rows, no
/// header, ISO dates) against a source account.
///
/// Each record becomes a transaction with a fixed entry against the source
/// account and an unfixed entry against [`PLACEHOLDER_ACCOUNT`], which
/// normalization later resolves to the balancing value. The result is sorted
/// by date.
pub fn import_statement<R: Read>(
    input: R,
    account: &Account,
) -> Result<TransactionSet, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut transactions = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 1;

        let date_str = record
            .get(0)
            .ok_or(ImportError::MissingField(row, "date"))?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| ImportError::InvalidDate(row, date_str.to_string()))?;
        let description = record
            .get(1)
            .ok_or(ImportError::MissingField(row, "description"))?
            .to_string();
        let amount_str = record
            .get(2)
            .ok_or(ImportError::MissingField(row, "amount"))?;
        let cents = parse_cents(amount_str)
            .ok_or_else(|| ImportError::InvalidAmount(row, amount_str.to_string()))?;

        transactions.push(Transaction::new(
            date,
            description,
            vec![
                Entry::new(account.clone(), Amount::Fixed(cents)),
                Entry::new(Account::new(PLACEHOLDER_ACCOUNT), Amount::Unfixed),
            ],
        ));
    }

    transactions.sort_by_key(|txn| txn.date);
    debug!(count = transactions.len(), "imported statement");
    Ok(TransactionSet::new(transactions))
}

/// `-12.34`, `$1,234.56`, or `-12` (whole dollars). Two decimal digits when a
/// point is present.
fn parse_cents(raw: &str) -> Option<i64> {
    let number: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|&c| c != ',')
        .collect();

    let (dollars, cents) = match number.split_once('.') {
        Some((dollars, cents)) if cents.len() == 2 => (dollars, cents),
        Some(_) => return None,
        None => (number.as_str(), "00"),
    };
    let sign = if dollars.starts_with('-') { -1 } else { 1 };
    let dollars: i64 = dollars.parse().ok()?;
    let cents: i64 = cents.parse().ok()?;

    Some(dollars * 100 + sign * cents)
}

#[cfg(test)]
mod tests {
    use crate::account::Account;
    use crate::amount::Amount;
    use crate::import::{import_statement, ImportError, PLACEHOLDER_ACCOUNT};

    use anyhow::Result;

    #[test]
    fn records_become_fixed_plus_placeholder_pairs() -> Result<()> {
        let csv = "2021-02-03,COFFEE SHOP,-4.50\n2021-02-01,SALARY,2500.00\n";
        let set = import_statement(csv.as_bytes(), &Account::new("assets:bank:main"))?;

        assert_eq!(set.len(), 2);
        // sorted by date
        let first = &set.transactions()[0];
        assert_eq!(first.description, "SALARY");
        assert_eq!(first.entries[0].account, Account::new("assets:bank:main"));
        assert_eq!(first.entries[0].amount, Amount::Fixed(250_000));
        assert_eq!(first.entries[1].account, Account::new(PLACEHOLDER_ACCOUNT));
        assert_eq!(first.entries[1].amount, Amount::Unfixed);

        // normalization resolves the placeholder side
        let second = &set.transactions()[1];
        assert_eq!(second.normalized_entries()[1].amount, Amount::Fixed(450));
        Ok(())
    }

    #[test]
    fn whole_dollar_and_grouped_amounts() -> Result<()> {
        let csv = "2021-02-01,A,-12\n2021-02-02,B,\"$1,234.56\"\n";
        let set = import_statement(csv.as_bytes(), &Account::new("assets:bank"))?;
        assert_eq!(set.transactions()[0].entries[0].amount, Amount::Fixed(-1200));
        assert_eq!(set.transactions()[1].entries[0].amount, Amount::Fixed(123_456));
        Ok(())
    }

    #[test]
    fn bad_date_aborts_with_the_record_number() {
        let csv = "2021-02-01,A,-1.00\nnot-a-date,B,-1.00\n";
        let err = import_statement(csv.as_bytes(), &Account::new("assets:bank")).unwrap_err();
        assert_eq!(
            format!("{err}"),
            "record 2: invalid date \"not-a-date\""
        );
    }

    #[test]
    fn bad_amount_aborts_with_the_record_number() {
        let csv = "2021-02-01,A,1.2\n";
        let err = import_statement(csv.as_bytes(), &Account::new("assets:bank")).unwrap_err();
        assert!(matches!(err, ImportError::InvalidAmount(1, _)));
    }

    #[test]
    fn short_records_are_rejected() {
        let csv = "2021-02-01,missing amount\n";
        let err = import_statement(csv.as_bytes(), &Account::new("assets:bank")).unwrap_err();
        assert!(matches!(err, ImportError::MissingField(1, "amount")));
    }
}
