use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_DAY;
use crate::date::CalendarDate;
use crate::prelude::*;
use crate::types::{Month, Year, clamp_day};
use crate::week::{WeekDescriptor, WeekStart, weeks_overlapping};
use crate::{DateError, Selection};

/// Picker granularity. Each variant has a canonical caption independent of
/// the current selection (see `format::granularity_label`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "day")]
    Day,
}

impl Granularity {
    /// All four granularities in display order
    pub const ALL: [Self; 4] = [Self::Year, Self::Month, Self::Week, Self::Day];
}

/// Error type for picker operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// The granularity is not in the picker's allowed set.
    #[error("Granularity '{0}' is not enabled for this picker")]
    DisallowedGranularity(Granularity),

    /// Invalid date component.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Static picker configuration supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Granularity active when the picker opens
    pub initial: Granularity,
    /// Reachable granularities; `initial` must be among them
    pub allowed: Vec<Granularity>,
    /// Week boundary and numbering convention
    pub week_start: WeekStart,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial: Granularity::Year,
            allowed: Granularity::ALL.to_vec(),
            week_start: WeekStart::default(),
        }
    }
}

impl PickerConfig {
    fn single(granularity: Granularity) -> Self {
        Self {
            initial: granularity,
            allowed: vec![granularity],
            ..Self::default()
        }
    }

    /// A picker locked to year selection
    pub fn year_only() -> Self {
        Self::single(Granularity::Year)
    }

    /// A picker locked to month selection
    pub fn month_only() -> Self {
        Self::single(Granularity::Month)
    }

    /// A picker locked to week selection
    pub fn week_only() -> Self {
        Self::single(Granularity::Week)
    }

    /// A picker locked to day selection
    pub fn day_only() -> Self {
        Self::single(Granularity::Day)
    }

    /// A picker over an arbitrary granularity set. With no explicit initial
    /// granularity the first allowed one is used, defaulting to `Year`.
    pub fn custom(allowed: Vec<Granularity>, initial: Option<Granularity>) -> Self {
        let initial = initial
            .or_else(|| allowed.first().copied())
            .unwrap_or(Granularity::Year);
        Self {
            initial,
            allowed,
            ..Self::default()
        }
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }
}

/// Callback invoked synchronously after every state-consistent recompute.
pub type SelectionCallback = Box<dyn FnMut(&Selection)>;

/// The selection state machine behind a wheel-style picker.
///
/// Holds the raw index cursors (year, month, day, week index) and the
/// concrete date they resolve to, and keeps both consistent on every
/// mutation. All transitions are synchronous; by the time any setter
/// returns, `selection()` reflects the new state and the change callback
/// (if any) has already observed it. Instances are single-owner; callers
/// serialize access.
pub struct TimePicker {
    granularity: Granularity,
    allowed: Vec<Granularity>,
    week_start: WeekStart,
    selected_year: Year,
    selected_month: Month,
    selected_day: u8,
    selected_week_index: usize,
    date: CalendarDate,
    on_change: Option<SelectionCallback>,
}

impl fmt::Debug for TimePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimePicker")
            .field("granularity", &self.granularity)
            .field("date", &self.date)
            .field("selected_week_index", &self.selected_week_index)
            .field("week_start", &self.week_start)
            .finish_non_exhaustive()
    }
}

impl TimePicker {
    /// Creates a picker positioned on `today` (supplied by the caller; the
    /// engine never reads a clock).
    ///
    /// # Errors
    /// Returns `PickerError::DisallowedGranularity` if the configured
    /// initial granularity is not in the allowed set.
    pub fn new(config: PickerConfig, today: CalendarDate) -> Result<Self, PickerError> {
        let PickerConfig {
            initial,
            allowed,
            week_start,
        } = config;
        if !allowed.contains(&initial) {
            return Err(PickerError::DisallowedGranularity(initial));
        }
        Ok(Self {
            granularity: initial,
            allowed,
            week_start,
            selected_year: today.year_typed(),
            selected_month: today.month_typed(),
            selected_day: today.day(),
            selected_week_index: 0,
            date: today,
            on_change: None,
        })
    }

    /// Registers the change callback, replacing any previous one.
    pub fn on_selection_changed<F>(&mut self, callback: F)
    where
        F: FnMut(&Selection) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Switches granularity, re-deriving the index cursors from the held
    /// date and rewinding the week cursor.
    ///
    /// # Errors
    /// Returns `PickerError::DisallowedGranularity` for granularities
    /// outside the allowed set; the state is left untouched.
    pub fn set_granularity(&mut self, granularity: Granularity) -> Result<(), PickerError> {
        if !self.allowed.contains(&granularity) {
            return Err(PickerError::DisallowedGranularity(granularity));
        }
        self.granularity = granularity;
        self.sync_indices_from_date();
        self.notify();
        Ok(())
    }

    /// Moves the year cursor.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for years outside `1..=9999`.
    pub fn set_year(&mut self, year: u16) -> Result<(), PickerError> {
        self.selected_year = Year::new(year)?;
        self.selected_week_index = 0;
        if self.granularity == Granularity::Day {
            self.clamp_day_cursor();
        }
        self.sync_date_from_indices();
        self.notify();
        Ok(())
    }

    /// Moves the month cursor.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for months outside `1..=12`.
    pub fn set_month(&mut self, month: u8) -> Result<(), PickerError> {
        self.selected_month = Month::new(month)?;
        self.selected_week_index = 0;
        if self.granularity == Granularity::Day {
            self.clamp_day_cursor();
        }
        self.sync_date_from_indices();
        self.notify();
        Ok(())
    }

    /// Moves the day cursor. Out-of-range days are clamped into the current
    /// month, never rejected.
    pub fn set_day(&mut self, day: u8) {
        self.selected_day = clamp_day(
            day.max(MIN_DAY),
            self.selected_year.get(),
            self.selected_month.get(),
        );
        self.sync_date_from_indices();
        self.notify();
    }

    /// Moves the week cursor. An index beyond the current month's weeks is
    /// kept and resolves to the month fallback in `selection()`.
    pub fn set_week_index(&mut self, index: usize) {
        self.selected_week_index = index;
        self.notify();
    }

    /// The selection derived from the current state.
    ///
    /// In `Week` granularity a stale week cursor (or a partition
    /// unavailable at the extreme supported years) degrades to the month
    /// selection rather than failing.
    pub fn selection(&self) -> Selection {
        match self.granularity {
            Granularity::Year => Selection::Year(self.selected_year),
            Granularity::Month => self.month_selection(),
            Granularity::Week => match self.weeks() {
                Ok(weeks) => weeks.get(self.selected_week_index).map_or_else(
                    || self.month_selection(),
                    |week| Selection::Week {
                        start: week.start,
                        end: week.end,
                        week_number: week.week_number,
                    },
                ),
                Err(_) => self.month_selection(),
            },
            Granularity::Day => Selection::Day(self.date),
        }
    }

    /// The week rows a UI renders for the current year/month cursor.
    ///
    /// # Errors
    /// See `weeks_overlapping`.
    pub fn weeks(&self) -> Result<Vec<WeekDescriptor>, DateError> {
        weeks_overlapping(self.selected_year, self.selected_month, self.week_start)
    }

    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn allowed(&self) -> &[Granularity] {
        &self.allowed
    }

    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// The concrete date the cursors resolve to
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    pub const fn selected_year(&self) -> u16 {
        self.selected_year.get()
    }

    pub const fn selected_month(&self) -> u8 {
        self.selected_month.get()
    }

    pub const fn selected_day(&self) -> u8 {
        self.selected_day
    }

    pub const fn selected_week_index(&self) -> usize {
        self.selected_week_index
    }

    fn month_selection(&self) -> Selection {
        Selection::Month {
            year: self.selected_year,
            month: self.selected_month,
        }
    }

    fn sync_indices_from_date(&mut self) {
        self.selected_year = self.date.year_typed();
        self.selected_month = self.date.month_typed();
        self.selected_day = self.date.day();
        self.selected_week_index = 0;
    }

    fn sync_date_from_indices(&mut self) {
        let day = clamp_day(
            self.selected_day,
            self.selected_year.get(),
            self.selected_month.get(),
        );
        if let Ok(date) = CalendarDate::from_ymd(self.selected_year, self.selected_month, day) {
            self.date = date;
        }
    }

    fn clamp_day_cursor(&mut self) {
        self.selected_day = clamp_day(
            self.selected_day,
            self.selected_year.get(),
            self.selected_month.get(),
        );
    }

    fn notify(&mut self) {
        let selection = self.selection();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&selection);
        }
    }
}
