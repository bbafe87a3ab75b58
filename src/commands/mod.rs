pub mod deposit;
pub mod ledger;
pub mod payment;
pub mod reports;

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator};
use prettytable::{Cell, Row, Table};

use crate::models::Transaction;
use crate::parser::{DATE_FORMAT, TIME_FORMAT};

/// The five-column report table shared by every view: left-justified Date,
/// Time, Description, Vendor and Amount (two decimal places), a header row
/// and a dashed separator under it.
pub(crate) fn transaction_table<'a, I>(transactions: I) -> Table
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut table = Table::new();
    table.set_format(
        FormatBuilder::new()
            .column_separator(' ')
            .separators(
                &[LinePosition::Title],
                LineSeparator::new('-', '-', '-', '-'),
            )
            .padding(0, 2)
            .build(),
    );
    table.set_titles(Row::new(
        ["Date", "Time", "Description", "Vendor", "Amount"]
            .iter()
            .map(|header| Cell::new(header))
            .collect(),
    ));
    for transaction in transactions {
        table.add_row(Row::new(vec![
            Cell::new(&transaction.date.format(DATE_FORMAT).to_string()),
            Cell::new(&transaction.time.format(TIME_FORMAT).to_string()),
            Cell::new(&transaction.description),
            Cell::new(&transaction.vendor),
            Cell::new(&format!("{:.2}", transaction.amount.round_dp(2))),
        ]));
    }
    table
}
