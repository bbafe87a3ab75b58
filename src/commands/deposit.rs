use crate::models::{parse_entry, Ledger};
use crate::GenericError;

/// Validates and records a deposit. The amount is stored as entered
/// (positive).
pub fn execute(
    ledger: &mut Ledger,
    date_time: &str,
    description: &str,
    vendor: &str,
    amount: &str,
) -> Result<(), GenericError> {
    let transaction = parse_entry(date_time, description, vendor, amount)?;
    ledger.append(transaction)?;
    println!("Deposit added successfully.");
    Ok(())
}
