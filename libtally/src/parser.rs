use std::io::BufRead;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::account::Account;
use crate::amount::Amount;
use crate::transaction::{Entry, Transaction, TransactionSet};

/// Failure while parsing ledger text, carrying the 1-based line number and
/// the raw offending line.
#[derive(Debug, Error)]
#[error("{msg} -- line {line}: {text}")]
pub struct ParseError {
    pub line: usize,
    pub text: String,
    pub msg: String,
}

/// Parse a ledger text stream into a [`TransactionSet`].
///
/// Single forward pass; the only lookahead is a one-line pushback used to
/// detect the end of a transaction's entry list.
pub fn parse<R: BufRead>(input: R) -> Result<TransactionSet, ParseError> {
    Parser::new(input).transaction_set()
}

pub fn parse_str(input: &str) -> Result<TransactionSet, ParseError> {
    parse(input.as_bytes())
}

/// Pull-based line reader with a one-line pushback slot.
///
/// `next_line` hands out lines with comments and trailing whitespace already
/// stripped, skipping lines that become empty. The raw line and its number
/// are kept for error reporting.
struct LineReader<R> {
    input: R,
    line_no: usize,
    raw: String,
    pushback: Option<String>,
}

impl<R: BufRead> LineReader<R> {
    fn new(input: R) -> LineReader<R> {
        LineReader {
            input,
            line_no: 0,
            raw: String::new(),
            pushback: None,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        if let Some(line) = self.pushback.take() {
            return Ok(Some(line));
        }

        loop {
            let mut buf = String::new();
            let read = self
                .input
                .read_line(&mut buf)
                .map_err(|e| self.error(format!("read error: {e}")))?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            while buf.ends_with('\n') || buf.ends_with('\r') {
                buf.pop();
            }
            self.raw = buf;

            let line = self.raw.split('#').next().unwrap_or("").trim_end();
            if line.contains('\t') {
                return Err(self.error("found a tab character (not allowed)"));
            }
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }

    fn push_back(&mut self, line: String) {
        self.pushback = Some(line);
    }

    fn error(&self, msg: impl Into<String>) -> ParseError {
        ParseError {
            line: self.line_no,
            text: self.raw.clone(),
            msg: msg.into(),
        }
    }
}

struct Parser<R> {
    lines: LineReader<R>,
}

impl<R: BufRead> Parser<R> {
    fn new(input: R) -> Parser<R> {
        Parser {
            lines: LineReader::new(input),
        }
    }

    fn transaction_set(mut self) -> Result<TransactionSet, ParseError> {
        let mut transactions = Vec::new();
        while let Some(txn) = self.next_transaction()? {
            transactions.push(txn);
        }
        debug!(count = transactions.len(), "parsed ledger");
        Ok(TransactionSet::new(transactions))
    }

    fn next_transaction(&mut self) -> Result<Option<Transaction>, ParseError> {
        let header = match self.lines.next_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let (date_str, description) = match header.split_once(' ') {
            Some((date, rest)) => (date, rest.trim()),
            None => (header.as_str(), ""),
        };
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| self.lines.error(format!("invalid date {date_str:?}")))?;
        let description = description.to_string();
        let entries = self.entries()?;

        Ok(Some(Transaction::new(date, description, entries)))
    }

    fn entries(&mut self) -> Result<Vec<Entry>, ParseError> {
        let mut entries = Vec::new();
        while let Some(entry) = self.entry()? {
            entries.push(entry);
        }
        Ok(entries)
    }

    fn entry(&mut self) -> Result<Option<Entry>, ParseError> {
        let line = match self.lines.next_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        if !line.starts_with(' ') {
            // not an entry; read off the end of the transaction
            self.lines.push_back(line);
            return Ok(None);
        }

        // the amount is the token after the last run of whitespace, so the
        // account column may be freely aligned with spaces
        let split = match line.rfind(' ') {
            Some(idx) => idx,
            None => return Err(self.lines.error("invalid entry")),
        };
        let account = line[..split].trim();
        let amount = &line[split + 1..];
        if account.is_empty() {
            return Err(self.lines.error("invalid entry"));
        }

        Ok(Some(Entry::new(
            Account::new(account),
            self.amount(amount)?,
        )))
    }

    fn amount(&self, token: &str) -> Result<Amount, ParseError> {
        // $____ or ____
        let bare = token.strip_prefix('$').unwrap_or(token);
        if !bare.is_empty() && bare.chars().all(|c| c == '_') {
            return Ok(Amount::Unfixed);
        }

        let invalid = || self.lines.error(format!("invalid amount {token:?}"));

        // skip any currency symbol in front of the number
        let start = token
            .find(|c: char| c.is_ascii_digit() || c == '-' || c == '.')
            .ok_or_else(invalid)?;
        let number: String = token[start..].chars().filter(|&c| c != ',').collect();

        if number.matches('.').count() > 1 {
            return Err(invalid());
        }
        let number = if number.contains('.') {
            number
        } else {
            format!("{number}.00")
        };

        let (dollars, cents) = number.split_once('.').ok_or_else(invalid)?;
        if cents.len() != 2 {
            return Err(invalid());
        }
        let sign = if dollars.starts_with('-') { -1 } else { 1 };
        let dollars: i64 = dollars.parse().map_err(|_| invalid())?;
        let cents: i64 = cents.parse().map_err(|_| invalid())?;

        Ok(Amount::Fixed(dollars * 100 + sign * cents))
    }
}
