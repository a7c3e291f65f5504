//! Partitioning of a month into the calendar weeks that overlap it.
//!
//! Week numbering follows the ISO 8601 rule generalized over the configured
//! week start: week 1 of a year is the first week holding at least four days
//! of that year, so weeks at year boundaries can belong to the adjacent
//! year (`year_for_week != year`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::DateError;
use crate::consts::{DAYS_PER_WEEK, DECEMBER, MIN_DAY};
use crate::date::{CalendarDate, Weekday, weekday_of};
use crate::prelude::*;
use crate::types::{Month, Year, days_in_month};

/// First day of the week. Shifts both week boundaries and numbering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Position of `weekday` within a week under this convention, `1..=7`.
    const fn position(self, weekday: Weekday) -> u8 {
        match self {
            Self::Monday => weekday.number_from_monday(),
            Self::Sunday => weekday.number_from_sunday(),
        }
    }
}

/// One calendar week intersecting a month.
///
/// `end` is the last day belonging to the week (always `start + 6`), not an
/// exclusive boundary. `(year_for_week, week_number)` identify the week in
/// its numbering year, which differs from the month's year for weeks
/// straddling a year boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{start}/{end}")]
pub struct WeekDescriptor {
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub week_number: u8,
    pub year_for_week: Year,
}

/// Numbering-year and week number of the week containing `date`.
///
/// # Errors
/// Returns `DateError::InvalidYear` when the week belongs to a numbering
/// year outside `1..=9999` (only possible in the first or last days of the
/// extreme supported years).
pub fn week_of_year(date: CalendarDate, week_start: WeekStart) -> Result<(Year, u8), DateError> {
    let position = i32::from(week_start.position(date.weekday()));
    let week = (i32::from(date.ordinal()) - position + 10) / 7;
    let year = date.year_typed();

    if week < 1 {
        // Belongs to the closing week of the previous year
        let previous = Year::new(year.get() - 1)?;
        Ok((previous, weeks_in_year(previous, week_start)))
    } else if week > i32::from(weeks_in_year(year, week_start)) {
        Ok((Year::new(year.get() + 1)?, 1))
    } else {
        Ok((year, week as u8))
    }
}

/// Number of numbered weeks in `year` (52 or 53).
fn weeks_in_year(year: Year, week_start: WeekStart) -> u8 {
    // December 28 always lies inside the year's last numbered week.
    let ordinal: i32 = if year.is_leap() { 363 } else { 362 };
    let position = i32::from(week_start.position(weekday_of(year.get(), DECEMBER, 28)));
    ((ordinal - position + 10) / 7) as u8
}

/// Inclusive `[start, end]` of the week containing `date`.
fn week_interval(
    date: CalendarDate,
    week_start: WeekStart,
) -> Result<(CalendarDate, CalendarDate), DateError> {
    let offset = i64::from(week_start.position(date.weekday())) - 1;
    let start = date.add_days(-offset)?;
    let end = start.add_days(i64::from(DAYS_PER_WEEK) - 1)?;
    Ok((start, end))
}

/// Enumerates the calendar weeks overlapping the given month, ordered by
/// `start` ascending and de-duplicated by `(year_for_week, week_number)`.
///
/// The union of the returned `[start, end]` ranges covers the whole month
/// with no gaps; the first and last descriptors may extend into the
/// adjacent months.
///
/// # Errors
/// Total for years `2..=9998`. At the extreme supported years an edge week
/// can leave the representable range, in which case the call reports
/// `DateError::InvalidYear`.
pub fn weeks_overlapping(
    year: Year,
    month: Month,
    week_start: WeekStart,
) -> Result<Vec<WeekDescriptor>, DateError> {
    let first = CalendarDate::from_ymd(year, month, MIN_DAY)?;
    let last = CalendarDate::from_ymd(year, month, days_in_month(year.get(), month.get()))?;

    let mut weeks = Vec::new();
    let mut seen: HashSet<(Year, u8)> = HashSet::new();

    let mut current = first;
    loop {
        let (start, end) = week_interval(current, week_start)?;
        let (year_for_week, week_number) = week_of_year(current, week_start)?;

        if !seen.contains(&(year_for_week, week_number)) && end >= first && start <= last {
            seen.insert((year_for_week, week_number));
            weeks.push(WeekDescriptor {
                start,
                end,
                week_number,
                year_for_week,
            });
        }

        if current == last {
            break;
        }
        current = current.add_days(1)?;
    }

    Ok(weeks)
}
