use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Parse an ISO `YYYY-MM-DD` field value
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Inclusive range of calendar days selected on the reports page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// The 30 days before `today`, through `today`
    pub fn last_30_days(today: NaiveDate) -> Self {
        let start = today.checked_sub_days(Days::new(30)).unwrap_or(today);
        Self::new(start, today)
    }

    /// First of the current month through `today`
    pub fn this_month(today: NaiveDate) -> Self {
        Self::new(today.with_day(1).unwrap_or(today), today)
    }

    pub fn with_start(self, start_date: NaiveDate) -> Self {
        Self { start_date, ..self }
    }

    pub fn with_end(self, end_date: NaiveDate) -> Self {
        Self { end_date, ..self }
    }

    /// A range whose start is after its end contains nothing
    pub fn is_empty(&self) -> bool {
        self.start_date > self.end_date
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Same as [`DateRange::contains`] for an ISO date field. Text that is
    /// not a date lies outside every range.
    pub fn contains_iso(&self, text: &str) -> bool {
        parse_iso_date(text).is_some_and(|day| self.contains(day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_presets() {
        let today = day(2024, 3, 15);
        assert_eq!(
            DateRange::last_30_days(today),
            DateRange::new(day(2024, 2, 14), today)
        );
        assert_eq!(
            DateRange::this_month(today),
            DateRange::new(day(2024, 3, 1), today)
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new(day(2024, 1, 10), day(2024, 1, 20));
        assert!(range.contains(day(2024, 1, 10)));
        assert!(range.contains(day(2024, 1, 20)));
        assert!(!range.contains(day(2024, 1, 21)));
        assert!(!range.contains(day(2024, 1, 9)));
    }

    #[test]
    fn test_iso_text_fields() {
        let range = DateRange::new(day(2024, 1, 10), day(2024, 1, 20));
        assert!(range.contains_iso("2024-01-15"));
        assert!(range.contains_iso(" 2024-01-15 "));
        assert!(!range.contains_iso("15/01/2024"));
        assert!(!range.contains_iso(""));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::new(day(2024, 2, 1), day(2024, 1, 1));
        assert!(range.is_empty());
        assert!(!range.contains(day(2024, 1, 15)));
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 31));
        let value = serde_json::to_value(range).unwrap();
        assert_eq!(value["startDate"], "2024-01-01");
        assert_eq!(value["endDate"], "2024-01-31");
    }
}
