use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A Japanese era (gengō), anchored to the Gregorian date it began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Era {
    #[default]
    Reiwa,
    Heisei,
    Showa,
    Meiji,
}

/// Newest first. Lookup takes the first era whose start is on or before the date.
static ALL_ERAS: &[Era] = &[Era::Reiwa, Era::Heisei, Era::Showa, Era::Meiji];

impl Era {
    /// Returns the era name as written in a formatted date.
    pub fn name(&self) -> &'static str {
        match self {
            Era::Reiwa => "令和",
            Era::Heisei => "平成",
            Era::Showa => "昭和",
            Era::Meiji => "明治",
        }
    }

    /// Returns the ASCII romanization, used in log output.
    pub fn romaji(&self) -> &'static str {
        match self {
            Era::Reiwa => "Reiwa",
            Era::Heisei => "Heisei",
            Era::Showa => "Showa",
            Era::Meiji => "Meiji",
        }
    }

    fn start_ymd(&self) -> (i32, u32, u32) {
        match self {
            Era::Reiwa => (2019, 5, 1),
            Era::Heisei => (1989, 1, 8),
            Era::Showa => (1926, 12, 25),
            Era::Meiji => (1868, 1, 25),
        }
    }

    /// Returns the first day of the era.
    pub fn start(&self) -> NaiveDate {
        let (y, m, d) = self.start_ymd();
        NaiveDate::from_ymd_opt(y, m, d).expect("valid hardcoded era start")
    }

    /// Returns the Gregorian year of era-year 1 (gannen).
    pub fn start_year(&self) -> i32 {
        self.start().year()
    }

    /// Returns all eras, newest first.
    pub fn all() -> &'static [Era] {
        ALL_ERAS
    }

    /// Returns the newest era.
    pub fn newest() -> Era {
        ALL_ERAS[0]
    }

    /// Returns the oldest era. Dates before its start have no era.
    pub fn oldest() -> Era {
        ALL_ERAS[ALL_ERAS.len() - 1]
    }
}

#[mutants::skip]
impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the era `date` falls in, or `None` if it predates the Meiji start.
pub fn era_of(date: NaiveDate) -> Option<Era> {
    Era::all().iter().copied().find(|era| era.start() <= date)
}
