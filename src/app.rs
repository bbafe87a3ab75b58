//! The interactive application: options and the menu loop.

use std::path::PathBuf;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use structopt::StructOpt;

use crate::commands::{deposit, ledger, payment, reports};
use crate::filter::Period;
use crate::models::Ledger;
use crate::GenericError;

#[derive(Debug, StructOpt)]
#[structopt(about = "Menu driven personal finance ledger",
version = env!("CARGO_PKG_VERSION"),
name = "fintrack"
)]
pub struct Opt {
    /// Ledger file
    #[structopt(
        name = "FILE",
        short = "f",
        long = "file",
        parse(from_os_str),
        default_value = "transactions.csv"
    )]
    pub file: PathBuf,
}

/// The menu the loop is currently showing. Unrecognized input redisplays
/// the same menu; only an explicit exit (or end of input) leaves the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Menu {
    Home,
    Ledger,
    Reports,
}

#[derive(Debug, Clone, Copy)]
enum EntryKind {
    Deposit,
    Payment,
}

impl EntryKind {
    fn noun(&self) -> &'static str {
        match self {
            EntryKind::Deposit => "deposit",
            EntryKind::Payment => "payment",
        }
    }
}

/// Entry point for the interactive session.
///
/// Loads the ledger (an unreadable file is reported and the session starts
/// empty), then drives the blocking menu loop until the user exits. No
/// failure inside the loop terminates the process.
pub fn run_app(args: Vec<String>) -> Result<(), GenericError> {
    let opt: Opt = Opt::from_iter(args.iter());

    println!("Welcome to TransactionApp");
    let mut store = match Ledger::load(&opt.file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}", e);
            Ledger::empty(&opt.file)
        }
    };

    let mut rl = Editor::<()>::new();
    let mut menu = Menu::Home;
    loop {
        print_menu(menu);
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", format!("{}", e).red());
                break;
            }
        };
        let token = line.trim().to_uppercase();
        if token.is_empty() {
            continue;
        }
        rl.add_history_entry(token.as_str());

        match menu {
            Menu::Home => match token.as_str() {
                "D" => report(prompt_entry(&mut rl, &mut store, EntryKind::Deposit)),
                "P" => report(prompt_entry(&mut rl, &mut store, EntryKind::Payment)),
                "L" => menu = Menu::Ledger,
                "X" => break,
                _ => println!("Invalid option"),
            },
            Menu::Ledger => match token.as_str() {
                "A" => ledger::execute(&store, ledger::View::All),
                "D" => ledger::execute(&store, ledger::View::Deposits),
                "P" => ledger::execute(&store, ledger::View::Payments),
                "R" => menu = Menu::Reports,
                "H" => menu = Menu::Home,
                _ => println!("Invalid option"),
            },
            Menu::Reports => match token.as_str() {
                "1" => reports::execute_period(&store, Period::MonthToDate),
                "2" => reports::execute_period(&store, Period::PreviousMonth),
                "3" => reports::execute_period(&store, Period::YearToDate),
                "4" => reports::execute_period(&store, Period::PreviousYear),
                "5" => report(prompt_vendor(&mut rl, &store)),
                "0" => menu = Menu::Ledger,
                _ => println!("Invalid option"),
            },
        }
    }
    Ok(())
}

/// Surfaces an operation failure and returns to the menu.
fn report(result: Result<(), GenericError>) {
    if let Err(e) = result {
        eprintln!("{}", e);
    }
}

fn prompt(rl: &mut Editor<()>, text: &str) -> Result<String, GenericError> {
    let line = rl.readline(text)?;
    Ok(line)
}

fn prompt_entry(
    rl: &mut Editor<()>,
    store: &mut Ledger,
    kind: EntryKind,
) -> Result<(), GenericError> {
    let date_time = prompt(
        rl,
        &format!(
            "Enter the {} date and time (yyyy-MM-dd HH:mm:ss): ",
            kind.noun()
        ),
    )?;
    let description = prompt(rl, &format!("Enter the description of the {}: ", kind.noun()))?;
    let vendor = prompt(rl, "Enter the vendor: ")?;
    let amount = prompt(rl, "Enter the amount (positive number): ")?;
    match kind {
        EntryKind::Deposit => deposit::execute(store, &date_time, &description, &vendor, &amount),
        EntryKind::Payment => payment::execute(store, &date_time, &description, &vendor, &amount),
    }
}

fn prompt_vendor(rl: &mut Editor<()>, store: &Ledger) -> Result<(), GenericError> {
    let vendor = prompt(rl, "Enter the vendor name: ")?;
    reports::execute_vendor(store, vendor.trim());
    Ok(())
}

fn print_menu(menu: Menu) {
    match menu {
        Menu::Home => {
            println!();
            println!("Choose an option:");
            println!("D) Add Deposit");
            println!("P) Make Payment (Debit)");
            println!("L) Ledger");
            println!("X) Exit");
        }
        Menu::Ledger => {
            println!();
            println!("{}", "Ledger".bold());
            println!("Choose an option:");
            println!("A) All");
            println!("D) Deposits");
            println!("P) Payments");
            println!("R) Reports");
            println!("H) Home");
        }
        Menu::Reports => {
            println!();
            println!("{}", "Reports".bold());
            println!("Choose an option:");
            println!("1) Month To Date");
            println!("2) Previous Month");
            println!("3) Year To Date");
            println!("4) Previous Year");
            println!("5) Search by Vendor");
            println!("0) Back");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_file_defaults_to_transactions_csv() {
        let opt = Opt::from_iter(vec!["fintrack"].iter());
        assert_eq!(opt.file, PathBuf::from("transactions.csv"));
    }

    #[test]
    fn ledger_file_can_be_selected() {
        let opt = Opt::from_iter(vec!["fintrack", "-f", "demo.csv"].iter());
        assert_eq!(opt.file, PathBuf::from("demo.csv"));
    }
}
