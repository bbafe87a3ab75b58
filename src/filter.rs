//! Pure selection predicates over the transaction history.

use chrono::{Datelike, NaiveDate};

use crate::models::Transaction;

/// True when the transaction date falls inside `[begin, end]`, both ends
/// inclusive. A reversed range matches nothing.
pub fn within(transaction: &Transaction, begin: NaiveDate, end: NaiveDate) -> bool {
    transaction.date >= begin && transaction.date <= end
}

/// Exact vendor equality, ignoring case. Not a substring match.
pub fn vendor_matches(transaction: &Transaction, vendor: &str) -> bool {
    transaction.vendor.to_lowercase() == vendor.to_lowercase()
}

/// The canned reporting periods.
///
/// Each resolves to a `(begin, end)` date pair against a supplied `today`,
/// so reports stay reproducible in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Period {
    MonthToDate,
    PreviousMonth,
    YearToDate,
    PreviousYear,
}

impl Period {
    pub fn title(&self) -> &'static str {
        match self {
            Period::MonthToDate => "Month To Date",
            Period::PreviousMonth => "Previous Month",
            Period::YearToDate => "Year To Date",
            Period::PreviousYear => "Previous Year",
        }
    }

    pub fn range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Period::MonthToDate => (first_of_month(today), today),
            Period::PreviousMonth => {
                let last = first_of_month(today).pred_opt().unwrap();
                (first_of_month(last), last)
            }
            Period::YearToDate => (
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap(),
                today,
            ),
            Period::PreviousYear => (
                NaiveDate::from_ymd_opt(today.year() - 1, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(today.year() - 1, 12, 31).unwrap(),
            ),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    fn dated(date: NaiveDate) -> Transaction {
        Transaction::new(
            date,
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            "lunch",
            "Deli",
            Decimal::new(-1250, 2),
        )
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let begin = day(2023, 4, 10);
        let end = day(2023, 4, 20);
        assert!(within(&dated(day(2023, 4, 10)), begin, end));
        assert!(within(&dated(day(2023, 4, 20)), begin, end));
        assert!(within(&dated(day(2023, 4, 15)), begin, end));
        assert!(!within(&dated(day(2023, 4, 9)), begin, end));
        assert!(!within(&dated(day(2023, 4, 21)), begin, end));
    }

    #[test]
    fn reversed_range_matches_nothing() {
        let transaction = dated(day(2023, 4, 15));
        assert!(!within(&transaction, day(2023, 4, 20), day(2023, 4, 10)));
    }

    #[test]
    fn vendor_match_folds_case_but_stays_exact() {
        let transaction = Transaction::new(
            day(2023, 4, 15),
            NaiveTime::from_hms_opt(10, 13, 25).unwrap(),
            "ergonomic keyboard",
            "Amazon",
            Decimal::new(8950, 2),
        );
        assert!(vendor_matches(&transaction, "amazon"));
        assert!(vendor_matches(&transaction, "AMAZON"));
        assert!(vendor_matches(&transaction, "Amazon"));
        assert!(!vendor_matches(&transaction, "Amazon Prime"));
        assert!(!vendor_matches(&transaction, "Ama"));
    }

    #[test]
    fn month_to_date_starts_on_the_first() {
        assert_eq!(
            Period::MonthToDate.range(day(2023, 4, 15)),
            (day(2023, 4, 1), day(2023, 4, 15))
        );
    }

    #[test]
    fn previous_month_covers_the_whole_month() {
        assert_eq!(
            Period::PreviousMonth.range(day(2023, 4, 15)),
            (day(2023, 3, 1), day(2023, 3, 31))
        );
    }

    #[test]
    fn previous_month_rolls_over_the_year() {
        assert_eq!(
            Period::PreviousMonth.range(day(2023, 1, 10)),
            (day(2022, 12, 1), day(2022, 12, 31))
        );
    }

    #[test]
    fn previous_month_handles_leap_february() {
        assert_eq!(
            Period::PreviousMonth.range(day(2024, 3, 5)),
            (day(2024, 2, 1), day(2024, 2, 29))
        );
    }

    #[test]
    fn year_to_date_starts_in_january() {
        assert_eq!(
            Period::YearToDate.range(day(2023, 4, 15)),
            (day(2023, 1, 1), day(2023, 4, 15))
        );
    }

    #[test]
    fn previous_year_is_the_full_calendar_year() {
        assert_eq!(
            Period::PreviousYear.range(day(2023, 4, 15)),
            (day(2022, 1, 1), day(2022, 12, 31))
        );
    }
}
