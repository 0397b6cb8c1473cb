/// Calendar helpers for date fields stored as ISO `YYYY-MM-DD` text
use chrono::{Datelike, NaiveDate};
use contracts::shared::parse_iso_date;

/// Local calendar day
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY-MM-DD`, the format of record date fields and date inputs
pub fn to_iso(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Whether the ISO date `text` falls in the month and year of `today`.
/// Unparsable text never does.
pub fn is_same_month(text: &str, today: NaiveDate) -> bool {
    parse_iso_date(text).is_some_and(|day| day.year() == today.year() && day.month() == today.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_to_iso() {
        assert_eq!(to_iso(day(2024, 3, 5)), "2024-03-05");
    }

    #[test]
    fn test_same_month() {
        let today = day(2024, 2, 20);
        assert!(is_same_month("2024-02-01", today));
        assert!(is_same_month("2024-02-29", today));
        assert!(!is_same_month("2024-01-31", today));
        assert!(!is_same_month("2023-02-10", today));
        assert!(!is_same_month("n/a", today));
    }
}
