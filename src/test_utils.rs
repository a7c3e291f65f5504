//! Shared constructors for unit tests.

use crate::date::CalendarDate;
use crate::types::{Month, Year};

pub(crate) fn year(value: u16) -> Year {
    Year::new(value).unwrap()
}

pub(crate) fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub(crate) fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}
