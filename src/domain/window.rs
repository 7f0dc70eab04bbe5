//! Calendar windows used to filter the transaction record.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A named time range used to filter transactions for display or
/// aggregation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    Today,
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl From<&str> for TimeFilter {
    /// Unrecognized names select `All`: the fallback range is the whole
    /// history, never an error.
    fn from(raw: &str) -> Self {
        match raw {
            "today" => TimeFilter::Today,
            "week" => TimeFilter::Week,
            "month" => TimeFilter::Month,
            "year" => TimeFilter::Year,
            _ => TimeFilter::All,
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeFilter::Today => "today",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::Year => "year",
            TimeFilter::All => "all",
        };
        f.write_str(label)
    }
}

/// Boundary dates for the calendar windows anchored at `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub today: NaiveDate,
    pub start_of_week: NaiveDate,
    pub start_of_month: NaiveDate,
    pub start_of_year: NaiveDate,
}

impl WindowBounds {
    /// Week start is the most recent Sunday on or before `today`;
    /// month and year start on their first calendar day.
    pub fn at(today: NaiveDate) -> Self {
        let days_since_sunday = u64::from(today.weekday().num_days_from_sunday());
        let start_of_week = today
            .checked_sub_days(Days::new(days_since_sunday))
            .unwrap_or(today);
        let start_of_month = today.with_day(1).unwrap_or(today);
        let start_of_year = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
        Self {
            today,
            start_of_week,
            start_of_month,
            start_of_year,
        }
    }

    /// Window membership. `Today` is exact equality; the span windows
    /// cover `start..=today`, so a future-dated entry is visible only
    /// under `All`. `NaiveDate` ordering coincides with the
    /// lexicographic order of zero-padded ISO-8601 date strings, which
    /// is the comparison the persisted format was built around.
    pub fn contains(&self, filter: TimeFilter, date: NaiveDate) -> bool {
        match filter {
            TimeFilter::Today => date == self.today,
            TimeFilter::Week => self.start_of_week <= date && date <= self.today,
            TimeFilter::Month => self.start_of_month <= date && date <= self.today,
            TimeFilter::Year => self.start_of_year <= date && date <= self.today,
            TimeFilter::All => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bounds_for_a_mid_march_friday() {
        let bounds = WindowBounds::at(date(2024, 3, 15));
        assert_eq!(bounds.start_of_week, date(2024, 3, 10));
        assert_eq!(bounds.start_of_month, date(2024, 3, 1));
        assert_eq!(bounds.start_of_year, date(2024, 1, 1));
    }

    #[test]
    fn sunday_starts_its_own_week() {
        let bounds = WindowBounds::at(date(2024, 3, 10));
        assert_eq!(bounds.start_of_week, date(2024, 3, 10));
    }

    #[test]
    fn month_start_can_reach_into_the_previous_month_for_week() {
        // 2024-03-01 is a Friday, so its week began on 2024-02-25.
        let bounds = WindowBounds::at(date(2024, 3, 1));
        assert_eq!(bounds.start_of_week, date(2024, 2, 25));
    }

    #[test]
    fn start_of_month_is_in_month_and_year_but_not_week_or_today() {
        let bounds = WindowBounds::at(date(2024, 3, 15));
        let txn_date = date(2024, 3, 1);
        assert!(bounds.contains(TimeFilter::Month, txn_date));
        assert!(bounds.contains(TimeFilter::Year, txn_date));
        assert!(!bounds.contains(TimeFilter::Week, txn_date));
        assert!(!bounds.contains(TimeFilter::Today, txn_date));
        assert!(bounds.contains(TimeFilter::All, txn_date));
    }

    #[test]
    fn future_dates_only_appear_under_all() {
        let bounds = WindowBounds::at(date(2024, 3, 15));
        let tomorrow = date(2024, 3, 16);
        assert!(!bounds.contains(TimeFilter::Week, tomorrow));
        assert!(!bounds.contains(TimeFilter::Month, tomorrow));
        assert!(!bounds.contains(TimeFilter::Year, tomorrow));
        assert!(bounds.contains(TimeFilter::All, tomorrow));
    }

    #[test]
    fn today_belongs_to_every_span_window() {
        let today = date(2024, 3, 15);
        let bounds = WindowBounds::at(today);
        assert!(bounds.contains(TimeFilter::Today, today));
        assert!(bounds.contains(TimeFilter::Week, today));
        assert!(bounds.contains(TimeFilter::Month, today));
        assert!(bounds.contains(TimeFilter::Year, today));
    }

    #[test]
    fn unknown_filter_names_fall_back_to_all() {
        assert_eq!(TimeFilter::from("fortnight"), TimeFilter::All);
        assert_eq!(TimeFilter::from(""), TimeFilter::All);
        assert_eq!(TimeFilter::from("week"), TimeFilter::Week);
    }
}
