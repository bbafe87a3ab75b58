//! The on-disk record format.
//!
//! One transaction per line, five fields separated by `|`:
//!
//! ```text
//! 2023-04-15|10:13:25|ergonomic keyboard|Amazon|89.50
//! ```
//!
//! The sign of the amount is authoritative: deposits are stored positive,
//! payments negative. Only a zero amount is treated as corruption. Parsing
//! works on in-memory text so it can be exercised without touching files.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::RecordError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const SEPARATOR: char = '|';

const FIELDS: usize = 5;

/// Parses one persisted line into a transaction.
pub fn parse_line(line: &str) -> Result<Transaction, RecordError> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() != FIELDS {
        return Err(RecordError::FieldCount(fields.len()));
    }
    let date = NaiveDate::parse_from_str(fields[0], DATE_FORMAT)
        .map_err(|_| RecordError::Date(fields[0].to_string()))?;
    let time = NaiveTime::parse_from_str(fields[1], TIME_FORMAT)
        .map_err(|_| RecordError::Time(fields[1].to_string()))?;
    let amount = Decimal::from_str(fields[4].trim())
        .map_err(|_| RecordError::Amount(fields[4].to_string()))?;
    if amount.is_zero() {
        return Err(RecordError::ZeroAmount);
    }
    Ok(Transaction::new(
        date,
        time,
        fields[2].to_string(),
        fields[3].to_string(),
        amount,
    ))
}

/// Parses a whole ledger body, in line order.
///
/// Bad lines never abort the parse; they come back with their 1-based line
/// number so the caller can report them.
pub fn parse_ledger(content: &str) -> (Vec<Transaction>, Vec<(usize, RecordError)>) {
    let mut transactions = Vec::new();
    let mut skipped = Vec::new();
    for (index, line) in content.lines().enumerate() {
        match parse_line(line) {
            Ok(transaction) => transactions.push(transaction),
            Err(error) => skipped.push((index + 1, error)),
        }
    }
    (transactions, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_line_round_trips() {
        let line = "2023-04-15|10:13:25|ergonomic keyboard|Amazon|89.50";
        let transaction = parse_line(line).unwrap();
        assert_eq!(
            transaction.date,
            NaiveDate::from_ymd_opt(2023, 4, 15).unwrap()
        );
        assert_eq!(
            transaction.time,
            NaiveTime::from_hms_opt(10, 13, 25).unwrap()
        );
        assert_eq!(transaction.description, "ergonomic keyboard");
        assert_eq!(transaction.vendor, "Amazon");
        assert_eq!(transaction.amount, Decimal::from_str("89.50").unwrap());
        assert_eq!(transaction.record(), line);
    }

    #[test]
    fn negative_amount_is_a_valid_payment() {
        let transaction = parse_line("2023-04-16|09:00:00|coffee|Starbucks|-4.75").unwrap();
        assert!(!transaction.is_deposit());
        assert_eq!(transaction.amount, Decimal::from_str("-4.75").unwrap());
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert_eq!(
            parse_line("garbage line"),
            Err(RecordError::FieldCount(1))
        );
        assert_eq!(
            parse_line("2023-04-15|10:13:25|a|b|1.00|extra"),
            Err(RecordError::FieldCount(6))
        );
    }

    #[test]
    fn unparseable_fields_are_rejected() {
        assert_eq!(
            parse_line("15/04/2023|10:13:25|a|b|1.00"),
            Err(RecordError::Date("15/04/2023".to_string()))
        );
        assert_eq!(
            parse_line("2023-04-15|10:13|a|b|1.00"),
            Err(RecordError::Time("10:13".to_string()))
        );
        assert_eq!(
            parse_line("2023-04-15|10:13:25|a|b|lots"),
            Err(RecordError::Amount("lots".to_string()))
        );
    }

    #[test]
    fn zero_amount_is_corruption() {
        assert_eq!(
            parse_line("2023-04-15|10:13:25|a|b|0.00"),
            Err(RecordError::ZeroAmount)
        );
    }

    #[test]
    fn bad_lines_do_not_abort_the_parse() {
        let content = "2023-04-15|10:13:25|ergonomic keyboard|Amazon|89.50\n\
                       2023-04-16|09:00:00|coffee|Starbucks|-4.75\n\
                       garbage line\n";
        let (transactions, skipped) = parse_ledger(content);
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].vendor, "Amazon");
        assert_eq!(transactions[1].vendor, "Starbucks");
        assert_eq!(skipped, vec![(3, RecordError::FieldCount(1))]);
    }

    #[test]
    fn empty_body_parses_to_nothing() {
        let (transactions, skipped) = parse_ledger("");
        assert!(transactions.is_empty());
        assert!(skipped.is_empty());
    }
}
