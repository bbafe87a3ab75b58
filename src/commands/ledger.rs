use crate::commands::transaction_table;
use crate::models::{Ledger, Transaction};

/// Which slice of the ledger to display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    All,
    Deposits,
    Payments,
}

impl View {
    fn includes(&self, transaction: &Transaction) -> bool {
        match self {
            View::All => true,
            View::Deposits => transaction.is_deposit(),
            View::Payments => !transaction.is_deposit(),
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            View::All => "The ledger has no transactions.",
            View::Deposits => "No deposits found.",
            View::Payments => "No payments found.",
        }
    }
}

pub fn execute(ledger: &Ledger, view: View) {
    print!("{}", render(ledger.all(), view));
}

/// Renders the view as a table, or the designated message when the view is
/// empty. Store order is preserved.
pub fn render(transactions: &[Transaction], view: View) -> String {
    let rows: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| view.includes(transaction))
        .collect();
    if rows.is_empty() {
        return format!("{}\n", view.empty_message());
    }
    transaction_table(rows).to_string()
}
