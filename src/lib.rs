mod consts;
mod date;
mod format;
mod picker;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;
mod week;

pub use consts::*;
pub use date::{CalendarDate, Weekday};
pub use format::{
    LabelStyle, day_label, format_day, format_month, format_week, format_year, granularity_label,
    month_label,
};
pub use picker::{Granularity, PickerConfig, PickerError, SelectionCallback, TimePicker};
pub use types::{Day, Month, Year, clamp_day, days_in_month, is_leap_year};
pub use week::{WeekDescriptor, WeekStart, week_of_year, weeks_overlapping};

use crate::prelude::*;

/// Error type for calendar component and parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (supported {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// A picker selection at one of the four granularities.
///
/// Recomputed synchronously by `TimePicker` whenever a cursor moves and
/// owned by the caller driving the picker; deliberately not serializable
/// (selections are never persisted). `Display` renders a compact ISO-style
/// form; locale-aware captions live in the formatter functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Selection {
    /// A whole year
    #[display(fmt = "{:04}", "_0.get()")]
    Year(Year),
    /// A month of a year
    #[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
    Month { year: Year, month: Month },
    /// A calendar week; `end` is its last day (inclusive)
    #[display(fmt = "{start}/{end} (W{week_number})")]
    Week {
        start: CalendarDate,
        end: CalendarDate,
        week_number: u8,
    },
    /// A single day
    #[display(fmt = "{_0}")]
    Day(CalendarDate),
}

impl Selection {
    /// The granularity this selection was made at
    pub const fn granularity(&self) -> Granularity {
        match self {
            Self::Year(_) => Granularity::Year,
            Self::Month { .. } => Granularity::Month,
            Self::Week { .. } => Granularity::Week,
            Self::Day(_) => Granularity::Day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, month, year};

    #[test]
    fn test_selection_display() {
        assert_eq!(Selection::Year(year(2024)).to_string(), "2024");
        assert_eq!(
            Selection::Month {
                year: year(2024),
                month: month(5)
            }
            .to_string(),
            "2024-05"
        );
        assert_eq!(
            Selection::Week {
                start: date(2024, 12, 30),
                end: date(2025, 1, 5),
                week_number: 1
            }
            .to_string(),
            "2024-12-30/2025-01-05 (W1)"
        );
        assert_eq!(Selection::Day(date(2024, 5, 15)).to_string(), "2024-05-15");
    }

    #[test]
    fn test_selection_granularity() {
        assert_eq!(
            Selection::Year(year(2024)).granularity(),
            Granularity::Year
        );
        assert_eq!(
            Selection::Day(date(2024, 5, 15)).granularity(),
            Granularity::Day
        );
    }

    #[test]
    fn test_date_error_display() {
        assert_eq!(
            DateError::InvalidYear(10000).to_string(),
            "Invalid year: 10000 (supported 1-9999)"
        );
        assert_eq!(
            DateError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
    }

    #[test]
    fn test_partition_to_caption_round_trip() {
        // The full pipeline a week wheel drives: partition, then caption rows
        let locale: unic_langid::LanguageIdentifier = "en-US".parse().unwrap();
        let weeks = weeks_overlapping(year(2024), month(12), WeekStart::Monday).unwrap();
        let captions: Vec<String> = weeks.iter().map(|w| format_week(w, &locale)).collect();
        assert_eq!(captions.first().unwrap(), "Nov 25 to Dec 1 (Week 48)");
        assert_eq!(
            captions.last().unwrap(),
            "Dec 30, 2024 to Jan 5, 2025 (Week 1)"
        );
    }
}
