//! Japanese era calendar: era lookup, era-relative formatting, and `YYMMDD` parsing.
//!
//! Everything here is pure. Failure is reported as `None` (or an empty
//! string when formatting); [`ParseError`] exists only for diagnostics.

mod convert;
mod era;
mod parse;

pub use convert::{EraYearDate, format_long, format_short, format_year_month, to_era_year_date};
pub use era::{Era, era_of};
pub use parse::{ParseError, is_edit_buffer, parse, try_parse};
