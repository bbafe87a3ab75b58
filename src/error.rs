use colored::{ColoredString, Colorize};
use rustyline::error::ReadlineError;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;

/// A persisted line that cannot become a transaction.
///
/// These are recovered locally: the loader reports the line and skips it.
#[derive(Debug, PartialEq)]
pub enum RecordError {
    FieldCount(usize),
    Date(String),
    Time(String),
    Amount(String),
    ZeroAmount,
}
impl Error for RecordError {}
impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::FieldCount(found) => write!(f, "expected 5 fields, found {}", found),
            RecordError::Date(raw) => write!(f, "invalid date {:?}", raw),
            RecordError::Time(raw) => write!(f, "invalid time {:?}", raw),
            RecordError::Amount(raw) => write!(f, "invalid amount {:?}", raw),
            RecordError::ZeroAmount => write!(f, "amount must not be zero"),
        }
    }
}

/// A rejected interactive entry. Nothing reaches the ledger.
#[derive(Debug, PartialEq)]
pub enum EntryError {
    InvalidDateTime,
    InvalidAmount,
    NonPositiveAmount,
    ReservedCharacter(&'static str),
}
impl Error for EntryError {}
impl Display for EntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::InvalidDateTime => {
                write!(f, "Invalid date and time format. Please use yyyy-MM-dd HH:mm:ss.")
            }
            EntryError::InvalidAmount => {
                write!(f, "Invalid amount entered. Please enter a valid number.")
            }
            EntryError::NonPositiveAmount => write!(f, "Amount must be positive."),
            EntryError::ReservedCharacter(field) => {
                write!(f, "The {} must not contain the '|' character.", field)
            }
        }
    }
}

#[derive(Debug)]
pub struct GenericError {
    pub message: Vec<ColoredString>,
}

impl Error for GenericError {}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ColoredStrings(&self.message))
    }
}

impl From<EntryError> for GenericError {
    fn from(error: EntryError) -> Self {
        GenericError {
            message: vec![format!("{}", error).as_str().red()],
        }
    }
}

impl From<io::Error> for GenericError {
    fn from(error: io::Error) -> Self {
        GenericError {
            message: vec![format!("{}", error).as_str().bold().bright_red()],
        }
    }
}

impl From<ReadlineError> for GenericError {
    fn from(error: ReadlineError) -> Self {
        GenericError {
            message: vec![format!("{}", error).as_str().red()],
        }
    }
}

struct ColoredStrings<'a>(pub &'a Vec<ColoredString>);

impl<'a> fmt::Display for ColoredStrings<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iter().fold(Ok(()), |result, partial| {
            result.and_then(|_| write!(f, "{}", partial))
        })
    }
}
