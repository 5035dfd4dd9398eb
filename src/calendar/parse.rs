use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use super::era::Era;

/// Why a `YYMMDD` string did not resolve to a date.
///
/// Only used for diagnostics; callers that edit dates treat every variant the
/// same way (keep the previous value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected exactly 6 digits, got {0:?}")]
    Malformed(String),
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    CalendarInvalid { year: i32, month: u32, day: u32 },
    #[error("{date} is before the start of {}", .era.romaji())]
    BeforeEraStart { era: Era, date: NaiveDate },
}

// ASCII only: `\d` would also accept other Unicode digits.
static SIX_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("valid hardcoded regex"));

static EDIT_BUFFER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{0,6}$").expect("valid hardcoded regex"));

/// Returns `true` if `text` may sit in an edit buffer: up to six ASCII digits.
pub fn is_edit_buffer(text: &str) -> bool {
    EDIT_BUFFER_RE.is_match(text)
}

/// Parses `YYMMDD` as a date in `era`, reporting why it failed.
pub fn try_parse(input: &str, era: Era) -> Result<NaiveDate, ParseError> {
    if !SIX_DIGITS_RE.is_match(input) {
        return Err(ParseError::Malformed(input.to_string()));
    }
    let field = |range: std::ops::Range<usize>| -> u32 {
        input[range]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    };
    let (yy, month, day) = (field(0..2), field(2..4), field(4..6));

    // Era-year 1 is the start year itself.
    let year = era.start_year() + yy as i32 - 1;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ParseError::CalendarInvalid { year, month, day })?;
    if date < era.start() {
        return Err(ParseError::BeforeEraStart { era, date });
    }
    Ok(date)
}

/// Parses `YYMMDD` as a date in `era`. `None` on any failure.
pub fn parse(input: &str, era: Era) -> Option<NaiveDate> {
    try_parse(input, era).ok()
}

#[cfg(test)]
mod tests {
    use chrono::Days;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::calendar::{era_of, format_short};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- accepted input ---

    #[test]
    fn reiwa_gannen() {
        assert_eq!(parse("010501", Era::Reiwa), Some(ymd(2019, 5, 1)));
    }

    #[test]
    fn heisei_start_day_is_parseable() {
        assert_eq!(parse("010108", Era::Heisei), Some(ymd(1989, 1, 8)));
    }

    #[test]
    fn leap_day() {
        // Reiwa 2 = 2020.
        assert_eq!(parse("020229", Era::Reiwa), Some(ymd(2020, 2, 29)));
    }

    #[test]
    fn era_year_past_the_era_end_is_still_gregorian() {
        // Heisei 35 never existed but resolves arithmetically to 2023.
        assert_eq!(parse("350101", Era::Heisei), Some(ymd(2023, 1, 1)));
    }

    // --- malformed ---

    #[test]
    fn too_short() {
        assert_eq!(
            try_parse("01050", Era::Reiwa),
            Err(ParseError::Malformed("01050".to_string()))
        );
    }

    #[test]
    fn too_long() {
        assert_eq!(parse("0105011", Era::Reiwa), None);
    }

    #[test]
    fn empty() {
        assert_eq!(parse("", Era::Reiwa), None);
    }

    #[test]
    fn non_digit() {
        assert_eq!(parse("01-501", Era::Reiwa), None);
        assert_eq!(parse(" 10501", Era::Reiwa), None);
    }

    #[test]
    fn fullwidth_digits_rejected() {
        assert_eq!(parse("０１０５０１", Era::Reiwa), None);
    }

    // --- calendar-invalid ---

    #[test]
    fn february_thirtieth() {
        assert_eq!(
            try_parse("190230", Era::Reiwa),
            Err(ParseError::CalendarInvalid {
                year: 2037,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn non_leap_february_29() {
        assert_eq!(parse("030229", Era::Reiwa), None);
    }

    #[test]
    fn month_zero_and_thirteen() {
        assert_eq!(parse("050001", Era::Reiwa), None);
        assert_eq!(parse("051301", Era::Reiwa), None);
    }

    #[test]
    fn day_zero() {
        assert_eq!(parse("050100", Era::Reiwa), None);
    }

    #[test]
    fn invalid_month_nines() {
        assert_eq!(parse("999999", Era::Reiwa), None);
    }

    // --- before era start ---

    #[test]
    fn showa_gannen_january_first() {
        assert_eq!(
            try_parse("010101", Era::Showa),
            Err(ParseError::BeforeEraStart {
                era: Era::Showa,
                date: ymd(1926, 1, 1)
            })
        );
    }

    #[test]
    fn day_before_reiwa_start() {
        assert_eq!(parse("010430", Era::Reiwa), None);
    }

    #[test]
    fn year_zero() {
        assert_eq!(parse("000601", Era::Reiwa), None);
    }

    // --- edit buffer ---

    #[test]
    fn edit_buffer_allow_list() {
        assert!(is_edit_buffer(""));
        assert!(is_edit_buffer("0"));
        assert!(is_edit_buffer("010501"));
        assert!(!is_edit_buffer("0105011"));
        assert!(!is_edit_buffer("01a"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseError::Malformed("1".into()).to_string(),
            "expected exactly 6 digits, got \"1\""
        );
        assert_eq!(
            ParseError::BeforeEraStart {
                era: Era::Showa,
                date: ymd(1926, 1, 1)
            }
            .to_string(),
            "1926-01-01 is before the start of Showa"
        );
    }

    // --- properties ---

    #[quickcheck]
    fn short_form_round_trips(offset: u32) -> bool {
        // Meiji start through 2117-12-31, where era-years stay two digits.
        let span = (ymd(2117, 12, 31) - Era::Meiji.start()).num_days() as u32 + 1;
        let date = Era::Meiji.start() + Days::new(u64::from(offset % span));
        let Some(era) = era_of(date) else {
            return false;
        };
        parse(&format_short(date), era) == Some(date)
    }

    #[quickcheck]
    fn rejects_wrong_length(s: String) -> bool {
        if s.chars().count() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
            return true; // skip well-formed input
        }
        Era::all().iter().all(|era| parse(&s, *era).is_none())
    }

    #[quickcheck]
    fn rejects_non_digit_in_any_position(pos: u8, ch: char) -> bool {
        if ch.is_ascii_digit() {
            return true;
        }
        let pos = usize::from(pos % 6);
        let mut input: Vec<char> = "020202".chars().collect();
        input[pos] = ch;
        let input: String = input.into_iter().collect();
        parse(&input, Era::Reiwa).is_none()
    }
}
