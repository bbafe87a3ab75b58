//! A menu driven personal finance ledger.
//!
//! Transactions live in a plain text file, one pipe delimited record per
//! line. The interactive shell lets the user add deposits and payments and
//! browse the history, filtered by date range or vendor.

mod app;
pub mod commands;
mod error;
pub mod filter;
pub mod models;
pub mod parser;

pub use app::{run_app, Opt};
pub use error::{EntryError, GenericError, RecordError};
