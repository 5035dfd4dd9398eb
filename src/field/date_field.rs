//! Edit state for a single era date input.

use chrono::{Days, Local, NaiveDate};
use tracing::debug;

use crate::calendar::{Era, era_of, format_long, format_short, is_edit_buffer, try_parse};

/// Whether the field is showing the raw edit text or the formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// At rest: the long form is displayed.
    #[default]
    Blurred,
    /// Editing: the `YYMMDD` form or the raw buffer is displayed.
    Focused,
}

/// Direction of a spin-button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Up,
    Down,
}

impl Spin {
    /// Moves `date` one day in this direction. `None` at the edge of chrono's range.
    fn apply(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Spin::Up => date.checked_add_days(Days::new(1)),
            Spin::Down => date.checked_sub_days(Days::new(1)),
        }
    }
}

/// A value written by the field that the host should store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit(pub Option<NaiveDate>);

/// Per-instance state of an era date input.
///
/// Never shared: each field remembers its own last resolved era, which decides
/// how the next six typed digits are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateField {
    committed: Option<NaiveDate>,
    /// `None` means nothing was typed since focus.
    raw_buffer: Option<String>,
    focus: FocusState,
    last_era: Era,
    /// Initial value waiting for [`DateField::settle`].
    pending_initial: Option<Option<NaiveDate>>,
}

impl Default for DateField {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DateField {
    /// Creates a blurred field holding `initial`. The last era starts at the newest era.
    pub fn new(initial: Option<NaiveDate>) -> Self {
        Self {
            committed: initial,
            raw_buffer: None,
            focus: FocusState::Blurred,
            last_era: Era::newest(),
            pending_initial: None,
        }
    }

    /// Returns the last accepted date.
    pub fn committed(&self) -> Option<NaiveDate> {
        self.committed
    }

    /// Returns the in-progress keystroke buffer, if anything was typed since focus.
    pub fn raw_buffer(&self) -> Option<&str> {
        self.raw_buffer.as_deref()
    }

    /// Returns whether the field is editing or at rest.
    pub fn focus_state(&self) -> FocusState {
        self.focus
    }

    /// Returns `true` while the field is in edit mode.
    pub fn is_focused(&self) -> bool {
        self.focus == FocusState::Focused
    }

    /// Returns the era used to read the next `YYMMDD` entry.
    pub fn last_era(&self) -> Era {
        self.last_era
    }

    /// Returns the text the hosting widget should show.
    pub fn display(&self) -> String {
        match self.focus {
            FocusState::Focused => match (&self.raw_buffer, self.committed) {
                (Some(buffer), _) => buffer.clone(),
                (None, Some(date)) => format_short(date),
                (None, None) => String::new(),
            },
            FocusState::Blurred => format_long(self.committed),
        }
    }

    /// Enters edit mode with an empty keystroke history.
    pub fn focus(&mut self) {
        self.focus = FocusState::Focused;
        self.raw_buffer = None;
    }

    /// Replaces the edit buffer with `text`.
    ///
    /// Only accepted while focused and only if `text` is at most six ASCII
    /// digits; otherwise the buffer is left as it was and `false` is returned.
    pub fn keystroke(&mut self, text: &str) -> bool {
        if !self.is_focused() || !is_edit_buffer(text) {
            return false;
        }
        self.raw_buffer = Some(text.to_string());
        true
    }

    /// Leaves edit mode, resolving the buffer against the last era.
    ///
    /// An empty buffer clears the value. A buffer that does not parse is
    /// dropped and the previous value kept. Returns the commit, if any.
    pub fn blur(&mut self) -> Option<Commit> {
        self.focus = FocusState::Blurred;
        let buffer = self.raw_buffer.take()?;
        if buffer.is_empty() {
            debug!("date field cleared");
            return Some(self.commit(None));
        }
        match try_parse(&buffer, self.last_era) {
            Ok(date) => Some(self.commit(Some(date))),
            Err(err) => {
                debug!(%err, era = self.last_era.romaji(), "date edit discarded");
                None
            }
        }
    }

    /// Applies a calendar-picker result. `None` means the picker was cleared.
    pub fn picker_select(&mut self, date: Option<NaiveDate>) -> Commit {
        self.commit(date)
    }

    /// Moves the value one day, starting from the local date if empty.
    pub fn spin(&mut self, spin: Spin) -> Option<Commit> {
        self.spin_from(spin, Local::now().date_naive())
    }

    /// Moves the value one day, starting from `today` if empty.
    ///
    /// The field ends up focused with a fresh keystroke history.
    pub fn spin_from(&mut self, spin: Spin, today: NaiveDate) -> Option<Commit> {
        let next = spin.apply(self.committed.unwrap_or(today))?;
        self.focus = FocusState::Focused;
        self.raw_buffer = None;
        Some(self.commit(Some(next)))
    }

    /// Schedules `value` to replace the committed value on the next [`settle`](Self::settle).
    ///
    /// Hosts call this while handling an event and settle after rendering, so
    /// the field never changes in the middle of a draw.
    pub fn sync_initial(&mut self, value: Option<NaiveDate>) {
        self.pending_initial = Some(value);
    }

    /// Applies a scheduled initial value. Returns `true` if one was applied.
    pub fn settle(&mut self) -> bool {
        match self.pending_initial.take() {
            Some(value) => {
                debug!(?value, "date field settled");
                self.committed = value;
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, date: Option<NaiveDate>) -> Commit {
        if let Some(era) = date.and_then(era_of) {
            self.last_era = era;
        }
        self.committed = date;
        Commit(date)
    }
}
