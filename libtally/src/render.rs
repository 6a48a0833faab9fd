use std::io::{self, Write};

use crate::amount::Amount;
use crate::transaction::{Transaction, TransactionSet};

/// Canonical display string for an amount: signed, comma-grouped dollars
/// with two decimal places, or the placeholder glyph for an unfixed amount.
pub fn format_amount(amount: Amount) -> String {
    match amount {
        Amount::Unfixed => "_____".to_string(),
        Amount::Fixed(cents) => {
            let sign = if cents < 0 { "-" } else { "" };
            let dollars = group_thousands(cents.abs() / 100);
            format!("{sign}{dollars}.{:02}", cents.abs() % 100)
        }
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Serializes a transaction set back to ledger text.
///
/// Account and amount columns are aligned to the widest member of the whole
/// set. The output re-parses to an equal set (the unfixed glyph is itself a
/// valid placeholder token).
pub struct Renderer<'a> {
    set: &'a TransactionSet,
    account_width: usize,
    amount_width: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(set: &'a TransactionSet) -> Renderer<'a> {
        let entries = || set.iter().flat_map(|txn| txn.entries.iter());
        Renderer {
            set,
            account_width: entries()
                .map(|e| e.account.name().chars().count())
                .max()
                .unwrap_or(0),
            // one extra column for the `$` prefix
            amount_width: entries()
                .map(|e| format_amount(e.amount).chars().count() + 1)
                .max()
                .unwrap_or(0),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for txn in self.set {
            self.write_transaction(txn, out)?;
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn write_transaction<W: Write>(&self, txn: &Transaction, out: &mut W) -> io::Result<()> {
        if txn.description.is_empty() {
            writeln!(out, "{}", txn.date)?;
        } else {
            writeln!(out, "{} {}", txn.date, txn.description)?;
        }
        for entry in &txn.entries {
            // the `$` stays glued to the number so the amount survives the
            // parser's last-whitespace-run split
            let amount = format!("${}", format_amount(entry.amount));
            writeln!(
                out,
                "  {:<account_width$}  {:>amount_width$}",
                entry.account.name(),
                amount,
                account_width = self.account_width,
                amount_width = self.amount_width,
            )?;
        }
        Ok(())
    }
}

/// Convenience for callers that want the text in memory.
pub fn render(set: &TransactionSet) -> String {
    let mut buf = Vec::new();
    Renderer::new(set)
        .write_to(&mut buf)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("rendered ledger text is UTF-8")
}

#[cfg(test)]
mod tests {
    use crate::amount::Amount;
    use crate::parser::parse_str;
    use crate::render::{format_amount, render};

    use anyhow::Result;

    #[test]
    fn amounts_are_signed_grouped_two_decimal() {
        assert_eq!(format_amount(Amount::Fixed(0)), "0.00");
        assert_eq!(format_amount(Amount::Fixed(-2400)), "-24.00");
        assert_eq!(format_amount(Amount::Fixed(5)), "0.05");
        assert_eq!(format_amount(Amount::Fixed(123_456_789)), "1,234,567.89");
        assert_eq!(format_amount(Amount::Fixed(-100_000)), "-1,000.00");
    }

    #[test]
    fn unfixed_renders_as_the_placeholder_glyph() {
        assert_eq!(format_amount(Amount::Unfixed), "_____");
    }

    #[test]
    fn rendered_text_round_trips_through_the_parser() -> Result<()> {
        let set = parse_str(
            "2021-02-01 Went to the bar\n  assets:bank  $-24.00\n  expenses:alcohol  $24.00\n\
             2021-02-02 payday\n  assets:bank  $1,234.56\n  income:salary  $-1,234.56\n",
        )?;
        let text = render(&set);
        assert_eq!(parse_str(&text)?, set);
        Ok(())
    }

    #[test]
    fn placeholders_round_trip_too() -> Result<()> {
        let set = parse_str(
            "2021-02-01 bar\n  assets:bank  $-24.00\n  expenses:alcohol  $___\n",
        )?;
        let text = render(&set);
        assert!(text.contains("$_____"));
        assert_eq!(parse_str(&text)?, set);
        Ok(())
    }

    #[test]
    fn columns_align_to_the_widest_entry() -> Result<()> {
        let set = parse_str(
            "2021-02-01 x\n  assets:bank:checking  $-1,000.00\n  expenses:rent  $1,000.00\n",
        )?;
        let text = render(&set);
        assert_eq!(
            text,
            "2021-02-01 x\n\
             \x20 assets:bank:checking  $-1,000.00\n\
             \x20 expenses:rent          $1,000.00\n\
             \n",
        );
        Ok(())
    }
}
