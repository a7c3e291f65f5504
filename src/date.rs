use std::str::FromStr;

use crate::DateError;
use crate::consts::{DATE_SEPARATOR, DAYS_BEFORE_MONTH, FEBRUARY, MAX_YEAR, MIN_YEAR};
use crate::prelude::*;
use crate::types::{Day, Month, Year};

/// An opaque Gregorian calendar date with no time-of-day.
///
/// Every value is constructible by the calendar: day 31 of a 30-day month
/// cannot exist. All arithmetic is calendar-based and crosses month and
/// year boundaries correctly. Displays and parses as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Position counted from Monday, `1..=7`
    pub const fn number_from_monday(self) -> u8 {
        self as u8 + 1
    }

    /// Position counted from Sunday, `1..=7`
    pub const fn number_from_sunday(self) -> u8 {
        (self as u8 + 1) % 7 + 1
    }

    pub(crate) const fn from_epoch_days(days: i64) -> Self {
        // 1970-01-01 was a Thursday
        match (days + 3).rem_euclid(7) {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }
}

impl CalendarDate {
    /// Creates a date from raw components, validating all three.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` for
    /// components the Gregorian calendar cannot construct.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Creates a date from already-validated year and month, checking only
    /// the day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in the month.
    pub fn from_ymd(year: Year, month: Month, day: u8) -> Result<Self, DateError> {
        let day_t = Day::new(day, year.get(), month.get())?;
        Ok(Self {
            year,
            month,
            day: day_t,
        })
    }

    /// Returns the year component
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(self) -> Month {
        self.month
    }

    /// Day of week for this date
    pub fn weekday(self) -> Weekday {
        Weekday::from_epoch_days(self.to_epoch_days())
    }

    /// One-based day of year (`1..=366`)
    pub fn ordinal(self) -> u16 {
        let mut ordinal =
            DAYS_BEFORE_MONTH[self.month.get() as usize] + u16::from(self.day.get());
        if self.month.get() > FEBRUARY && self.year.is_leap() {
            ordinal += 1;
        }
        ordinal
    }

    /// Adds (or with a negative argument, subtracts) whole calendar days.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when the result leaves the
    /// supported range `1..=9999`.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        Self::from_epoch_days(self.to_epoch_days() + days)
    }

    pub(crate) fn to_epoch_days(self) -> i64 {
        days_from_civil(i32::from(self.year.get()), self.month.get(), self.day.get())
    }

    pub(crate) fn from_epoch_days(days: i64) -> Result<Self, DateError> {
        let (year, month, day) = civil_from_days(days);
        if !(i32::from(MIN_YEAR)..=i32::from(MAX_YEAR)).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        Self::new(year as u16, month, day)
    }
}

/// Weekday of a raw (year, month, day) triple. Caller contract: components
/// are valid; used where constructing a full `CalendarDate` would be noise.
pub(crate) fn weekday_of(year: u16, month: u8, day: u8) -> Weekday {
    Weekday::from_epoch_days(days_from_civil(i32::from(year), month, day))
}

// Field-wise conversion between dates and day counts relative to the Unix
// epoch, on the proleptic Gregorian calendar.

fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = i64::from(if month > 2 { month - 3 } else { month + 9 });
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month as u8, day as u8)
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };

        let year = year
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
