//! Reusable TUI widgets.

pub mod calendar;
pub mod date_box;
pub mod status_bar;

pub use calendar::{CalendarPicker, PickerEvent, draw_calendar};
pub use date_box::{DateBox, draw_date_box};
pub use status_bar::{StatusBarContext, draw_status_bar};
