#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Japanese era (gengō) date entry for a terminal data grid.
//!
//! [`calendar`] converts between calendar dates and era-relative text,
//! [`field`] holds the per-field editing state machine, and [`tui`] wires
//! both into a ratatui grid with a calendar picker.

pub mod calendar;
pub mod field;
pub mod logging;
pub mod model;
pub mod tui;
