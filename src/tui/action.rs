//! Actions returned by screen event handlers.

use chrono::NaiveDate;
use crossterm::event::KeyEvent;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the row model and navigate between
/// screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Store a committed date in the row at the given index.
    UpdateRow(usize, Option<NaiveDate>),
    /// Quit the application.
    Quit,
}

/// Common behavior for screens that need no outside context to handle keys.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
