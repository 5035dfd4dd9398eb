use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::era::{Era, era_of};

/// A date expressed relative to its era. Always derived from a [`NaiveDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraYearDate {
    pub era: Era,
    /// Era-relative year; 1 is the gannen.
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl EraYearDate {
    /// The `YYMMDD` digits used while editing.
    pub fn short(&self) -> String {
        format!("{:02}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Long form, e.g. `令和01年05月01日`.
impl fmt::Display for EraYearDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:02}年{:02}月{:02}日",
            self.era.name(),
            self.year,
            self.month,
            self.day
        )
    }
}

/// Converts a date to its era-relative form, or `None` if it predates every era.
pub fn to_era_year_date(date: NaiveDate) -> Option<EraYearDate> {
    let era = era_of(date)?;
    // era_of guarantees date.year() >= era.start_year().
    let year = (date.year() - era.start_year() + 1) as u32;
    Some(EraYearDate {
        era,
        year,
        month: date.month(),
        day: date.day(),
    })
}

/// Formats a date for display at rest. Empty when absent or before Meiji.
pub fn format_long(date: Option<NaiveDate>) -> String {
    date.and_then(to_era_year_date)
        .map(|d| d.to_string())
        .unwrap_or_default()
}

/// Formats a date as the six editing digits `YYMMDD`. Empty when no era applies.
pub fn format_short(date: NaiveDate) -> String {
    to_era_year_date(date)
        .map(|d| d.short())
        .unwrap_or_default()
}

/// Formats the era year and month, e.g. `平成31年04月`.
pub fn format_year_month(date: NaiveDate) -> String {
    to_era_year_date(date)
        .map(|d| format!("{}{:02}年{:02}月", d.era.name(), d.year, d.month))
        .unwrap_or_default()
}
