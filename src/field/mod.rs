//! Date field interaction: focus/blur mode switching, keystroke buffering,
//! spin buttons, and the per-field memory of the last resolved era.

mod date_field;

pub use date_field::{Commit, DateField, FocusState, Spin};
