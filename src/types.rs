use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A Gregorian year in the supported range `1..=9999`.
/// Backed by `NonZeroU16`, so 0 is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new `Year`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is outside `1..=9999`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(i32::from(value)));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(DateError::InvalidYear(i32::from(value)))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year is a Gregorian leap year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month number in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new `Month`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > 12.
    pub fn new(value: u8) -> Result<Self, DateError> {
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(DateError::InvalidMonth(value))
    }

    /// Returns the month number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of month, validated against the length of its year/month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new `Day` for the given year and month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or exceeds
    /// `days_in_month(year, month)`.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month,
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid.clone())?;
        if value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Pure calendar arithmetic shared by the partitioner and the picker.

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    debug_assert!(year >= MIN_YEAR && year <= MAX_YEAR);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Clamps a day-of-month cursor to the length of the given month.
/// Total and idempotent: `clamp_day(clamp_day(d, y, m), y, m) == clamp_day(d, y, m)`.
pub const fn clamp_day(day: u8, year: u16, month: u8) -> u8 {
    let max = days_in_month(year, month);
    if day > max { max } else { day }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_limits() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(DateError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(DateError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_conversions() {
        let year: Year = 2024.try_into().unwrap();
        assert_eq!(year.get(), 2024);
        assert_eq!(u16::from(year), 2024);
        assert_eq!(year.to_string(), "2024");
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");
        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let rejected: Result<Year, _> = serde_json::from_str("10000");
        assert!(rejected.is_err());
    }

    #[test]
    fn test_month_limits() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_day_validation_tracks_month_length() {
        assert!(Day::new(31, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());
        assert!(matches!(
            Day::new(0, 2024, 1),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(DateError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32
            })
        ));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
            assert_eq!(Year::new(case.year).unwrap().is_leap(), case.is_leap);
        }
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(days_in_month(2023, month), expected[month as usize]);
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29, "century divisible by 400");
        assert_eq!(days_in_month(1900, 2), 28, "century not divisible by 400");
    }

    #[test]
    fn test_clamp_day() {
        assert_eq!(clamp_day(31, 2023, 2), 28);
        assert_eq!(clamp_day(31, 2024, 2), 29);
        assert_eq!(clamp_day(31, 2024, 4), 30);
        assert_eq!(clamp_day(15, 2024, 4), 15);
    }

    #[test]
    fn test_clamp_day_idempotent() {
        for day in 0..=40 {
            for month in 1..=12 {
                let once = clamp_day(day, 2023, month);
                assert_eq!(clamp_day(once, 2023, month), once);
            }
        }
    }
}
