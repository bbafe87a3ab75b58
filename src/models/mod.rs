use std::fs::{read_to_string, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;

pub use transaction::{parse_entry, Transaction};

mod transaction;

use crate::parser;
use crate::GenericError;

/// The ordered transaction history plus its backing file.
///
/// There is exactly one of these per session. Every mutation goes through
/// [`Ledger::append`], which persists the record before the in-memory
/// history changes, so a reload always reconstructs the full history.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// An empty ledger over `path`. Used when loading fails; the session
    /// still runs, it just starts with no history.
    pub fn empty<P: Into<PathBuf>>(path: P) -> Self {
        Ledger {
            path: path.into(),
            transactions: vec![],
        }
    }

    /// Loads the ledger file, creating it empty when absent.
    ///
    /// Malformed lines are reported to stderr and skipped; they never abort
    /// the load. Only failing to create or read the file is an error.
    pub fn load<P: Into<PathBuf>>(path: P) -> Result<Self, GenericError> {
        let path = path.into();
        if !path.exists() {
            File::create(&path)?;
            println!("Creating a new ledger file: {}", path.display());
            return Ok(Ledger::empty(path));
        }
        let content = read_to_string(&path)?;
        let (transactions, skipped) = parser::parse_ledger(&content);
        for (line, reason) in skipped {
            eprintln!(
                "{}",
                format!("Skipping line {} of {}: {}", line, path.display(), reason).yellow()
            );
        }
        Ok(Ledger { path, transactions })
    }

    /// Appends a transaction durably.
    ///
    /// The record is written to the backing file first; the in-memory
    /// history only changes once the write has succeeded. The file handle
    /// lives for the duration of the write and no longer.
    pub fn append(&mut self, transaction: Transaction) -> Result<(), GenericError> {
        {
            let mut file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(&self.path)?;
            writeln!(file, "{}", transaction.record())?;
        }
        self.transactions.push(transaction);
        Ok(())
    }

    /// The full history in file/insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
