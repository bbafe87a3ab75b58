use chrono::{Local, NaiveDate};

use crate::commands::transaction_table;
use crate::filter::{self, Period};
use crate::models::{Ledger, Transaction};

const EMPTY_RANGE: &str = "No transactions found within the specified date range.";

/// Runs one of the canned reports against today's date.
pub fn execute_period(ledger: &Ledger, period: Period) {
    let today = Local::now().date_naive();
    let (begin, end) = period.range(today);
    println!("{} ({} to {})", period.title(), begin, end);
    print!("{}", render_range(ledger.all(), begin, end));
}

pub fn execute_range(ledger: &Ledger, begin: NaiveDate, end: NaiveDate) {
    print!("{}", render_range(ledger.all(), begin, end));
}

/// Renders every transaction dated inside `[begin, end]`, store order
/// preserved, or the empty-range message.
pub fn render_range(transactions: &[Transaction], begin: NaiveDate, end: NaiveDate) -> String {
    let rows: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| filter::within(transaction, begin, end))
        .collect();
    if rows.is_empty() {
        return format!("{}\n", EMPTY_RANGE);
    }
    transaction_table(rows).to_string()
}

pub fn execute_vendor(ledger: &Ledger, vendor: &str) {
    print!("{}", render_vendor(ledger.all(), vendor));
}

/// Renders every transaction whose vendor equals `vendor`, case folded.
pub fn render_vendor(transactions: &[Transaction], vendor: &str) -> String {
    let rows: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| filter::vendor_matches(transaction, vendor))
        .collect();
    if rows.is_empty() {
        return format!("No transactions found for vendor: {}\n", vendor);
    }
    transaction_table(rows).to_string()
}
