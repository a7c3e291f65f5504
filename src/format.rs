use unic_langid::LanguageIdentifier;

use crate::consts::{MONTH_ABBREVIATIONS, MONTH_NAMES};
use crate::date::CalendarDate;
use crate::picker::Granularity;
use crate::types::{Month, Year};
use crate::week::WeekDescriptor;

/// Label family for a locale, selected from its language subtag.
///
/// Styles are pure rendering strategies; adding one is a new variant here
/// and leaves the partitioning logic untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    /// Western order with English month names (`May 2024`, `Week 20`)
    Latin,
    /// Dense CJK order with unit suffixes (`2024年5月`, `第20周`)
    Cjk,
}

impl LabelStyle {
    pub fn for_locale(locale: &LanguageIdentifier) -> Self {
        match locale.language.as_str() {
            "zh" => Self::Cjk,
            _ => Self::Latin,
        }
    }
}

fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[usize::from(month.get()) - 1]
}

fn month_abbreviation(month: Month) -> &'static str {
    MONTH_ABBREVIATIONS[usize::from(month.get()) - 1]
}

/// `"2024"` / `"2024年"`
pub fn format_year(year: Year, locale: &LanguageIdentifier) -> String {
    match LabelStyle::for_locale(locale) {
        LabelStyle::Latin => year.get().to_string(),
        LabelStyle::Cjk => format!("{}年", year.get()),
    }
}

/// `"May 2024"` / `"2024年5月"`
pub fn format_month(year: Year, month: Month, locale: &LanguageIdentifier) -> String {
    match LabelStyle::for_locale(locale) {
        LabelStyle::Latin => format!("{} {}", month_name(month), year.get()),
        LabelStyle::Cjk => format!("{}年{}月", year.get(), month.get()),
    }
}

/// `"May 15, 2024"` / `"2024年5月15日"`
pub fn format_day(date: CalendarDate, locale: &LanguageIdentifier) -> String {
    match LabelStyle::for_locale(locale) {
        LabelStyle::Latin => format!(
            "{} {}, {}",
            month_name(date.month_typed()),
            date.day(),
            date.year()
        ),
        LabelStyle::Cjk => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
    }
}

/// Week caption with its number; both years are spelled out when the week
/// straddles a year boundary, omitted otherwise.
///
/// `"Dec 30, 2024 to Jan 5, 2025 (Week 1)"`, `"May 13 to May 19 (Week 20)"`,
/// `"2024年12月30日 至 2025年1月5日 (第1周)"`, `"5月13日 至 5月19日 (第20周)"`
pub fn format_week(week: &WeekDescriptor, locale: &LanguageIdentifier) -> String {
    let (start, end) = (week.start, week.end);
    let crosses_year = start.year() != end.year();

    match LabelStyle::for_locale(locale) {
        LabelStyle::Latin => {
            let from = format!("{} {}", month_abbreviation(start.month_typed()), start.day());
            let to = format!("{} {}", month_abbreviation(end.month_typed()), end.day());
            if crosses_year {
                format!(
                    "{from}, {} to {to}, {} (Week {})",
                    start.year(),
                    end.year(),
                    week.week_number
                )
            } else {
                format!("{from} to {to} (Week {})", week.week_number)
            }
        }
        LabelStyle::Cjk => {
            if crosses_year {
                format!(
                    "{}年{}月{}日 至 {}年{}月{}日 (第{}周)",
                    start.year(),
                    start.month(),
                    start.day(),
                    end.year(),
                    end.month(),
                    end.day(),
                    week.week_number
                )
            } else {
                format!(
                    "{}月{}日 至 {}月{}日 (第{}周)",
                    start.month(),
                    start.day(),
                    end.month(),
                    end.day(),
                    week.week_number
                )
            }
        }
    }
}

/// Wheel-row caption for a month: `"May"` / `"5月"`
pub fn month_label(month: Month, locale: &LanguageIdentifier) -> String {
    match LabelStyle::for_locale(locale) {
        LabelStyle::Latin => month_name(month).to_owned(),
        LabelStyle::Cjk => format!("{}月", month.get()),
    }
}

/// Wheel-row caption for a day of month: `"5"` / `"5日"`
pub fn day_label(day: u8, locale: &LanguageIdentifier) -> String {
    match LabelStyle::for_locale(locale) {
        LabelStyle::Latin => day.to_string(),
        LabelStyle::Cjk => format!("{day}日"),
    }
}

/// Segmented-control caption for a granularity
pub fn granularity_label(granularity: Granularity, locale: &LanguageIdentifier) -> &'static str {
    match LabelStyle::for_locale(locale) {
        LabelStyle::Latin => match granularity {
            Granularity::Year => "Year",
            Granularity::Month => "Month",
            Granularity::Week => "Week",
            Granularity::Day => "Day",
        },
        LabelStyle::Cjk => match granularity {
            Granularity::Year => "年",
            Granularity::Month => "月",
            Granularity::Week => "周",
            Granularity::Day => "日",
        },
    }
}
