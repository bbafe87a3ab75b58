use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::parser::{DATE_FORMAT, DATE_TIME_FORMAT, SEPARATOR, TIME_FORMAT};
use crate::EntryError;

/// One ledger entry. Immutable once stored.
///
/// Positive amounts are deposits, negative amounts payments; zero never
/// occurs in a stored transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub vendor: String,
    pub amount: Decimal,
}

impl Transaction {
    pub fn new<S: Into<String>>(
        date: NaiveDate,
        time: NaiveTime,
        description: S,
        vendor: S,
        amount: Decimal,
    ) -> Self {
        Transaction {
            date,
            time,
            description: description.into(),
            vendor: vendor.into(),
            amount,
        }
    }

    pub fn is_deposit(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// The canonical persisted line for this transaction.
    pub fn record(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.date.format(DATE_FORMAT),
            self.time.format(TIME_FORMAT),
            self.description,
            self.vendor,
            self.amount
        )
    }

    /// Flips the sign. Payments are entered as positive magnitudes and
    /// negated before storage.
    pub fn negated(mut self) -> Self {
        self.amount = -self.amount;
        self
    }
}

/// Validates raw interactive input and builds a positive-amount transaction.
///
/// The caller decides the sign: deposits keep it, payments negate it. On any
/// failure nothing is built, so a rejected entry cannot touch the ledger.
pub fn parse_entry(
    date_time: &str,
    description: &str,
    vendor: &str,
    amount: &str,
) -> Result<Transaction, EntryError> {
    let date_time = NaiveDateTime::parse_from_str(date_time.trim(), DATE_TIME_FORMAT)
        .map_err(|_| EntryError::InvalidDateTime)?;
    if description.contains(SEPARATOR) {
        return Err(EntryError::ReservedCharacter("description"));
    }
    if vendor.contains(SEPARATOR) {
        return Err(EntryError::ReservedCharacter("vendor"));
    }
    let amount = Decimal::from_str(amount.trim()).map_err(|_| EntryError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(EntryError::NonPositiveAmount);
    }
    Ok(Transaction::new(
        date_time.date(),
        date_time.time(),
        description.trim(),
        vendor.trim(),
        amount,
    ))
}
