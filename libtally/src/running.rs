use chrono::NaiveDate;

use crate::account::Account;
use crate::amount::Amount;
use crate::transaction::TransactionSet;

/// One row of an account history: the entry itself plus the cumulative
/// balance after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunningEntry {
    pub balance: Amount,
    pub amount: Amount,
    pub date: NaiveDate,
    pub description: String,
}

/// Running total for a single account (exact match, not hierarchy-inclusive)
/// across one or more transaction sets, in the given order.
///
/// Works over `normalized_entries` so placeholder postings contribute their
/// resolved values.
pub fn running<'a, I>(sets: I, account: &Account) -> Vec<RunningEntry>
where
    I: IntoIterator<Item = &'a TransactionSet>,
{
    let mut balance = Amount::ZERO;
    let mut rows = Vec::new();

    for set in sets {
        for txn in set {
            for entry in txn.normalized_entries() {
                if entry.account == *account {
                    balance = balance + entry.amount;
                    rows.push(RunningEntry {
                        balance,
                        amount: entry.amount,
                        date: txn.date,
                        description: txn.description.clone(),
                    });
                }
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use crate::account::Account;
    use crate::amount::Amount;
    use crate::parser::parse_str;
    use crate::running::running;

    use anyhow::Result;

    #[test]
    fn accumulates_postings_to_the_target_account() -> Result<()> {
        let set = parse_str(
            "2021-02-01 deposit\n  assets:bank  $100.00\n  income:salary  $-100.00\n\
             2021-02-02 bar\n  assets:bank  $-24.00\n  expenses:alcohol  $_____\n",
        )?;
        let rows = running([&set], &Account::new("assets:bank"));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, Amount::Fixed(10_000));
        assert_eq!(rows[0].balance, Amount::Fixed(10_000));
        assert_eq!(rows[1].amount, Amount::Fixed(-2400));
        assert_eq!(rows[1].balance, Amount::Fixed(7600));
        assert_eq!(rows[1].description, "bar");
        Ok(())
    }

    #[test]
    fn resolved_placeholders_are_visible() -> Result<()> {
        let set = parse_str(
            "2021-02-01 bar\n  assets:bank  $-24.00\n  expenses:alcohol  $_____\n",
        )?;
        let rows = running([&set], &Account::new("expenses:alcohol"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, Amount::Fixed(2400));
        Ok(())
    }

    #[test]
    fn exact_match_only_never_hierarchy() -> Result<()> {
        let set = parse_str(
            "2021-02-01 x\n  assets:bank:main  $5.00\n  income:misc  $-5.00\n",
        )?;
        assert!(running([&set], &Account::new("assets:bank")).is_empty());
        Ok(())
    }

    #[test]
    fn balance_carries_across_sets() -> Result<()> {
        let first = parse_str("2021-01-31 a\n  a:b  $1.00\n  a:c  $-1.00\n")?;
        let second = parse_str("2021-02-01 b\n  a:b  $2.00\n  a:c  $-2.00\n")?;
        let rows = running([&first, &second], &Account::new("a:b"));
        assert_eq!(rows[1].balance, Amount::Fixed(300));
        Ok(())
    }
}
