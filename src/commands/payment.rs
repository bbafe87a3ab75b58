use crate::models::{parse_entry, Ledger};
use crate::GenericError;

/// Validates and records a payment. The user enters a positive magnitude;
/// the stored amount is its negation.
pub fn execute(
    ledger: &mut Ledger,
    date_time: &str,
    description: &str,
    vendor: &str,
    amount: &str,
) -> Result<(), GenericError> {
    let transaction = parse_entry(date_time, description, vendor, amount)?;
    ledger.append(transaction.negated())?;
    println!("Payment added successfully.");
    Ok(())
}
