//! Era date input box: a [`DateField`] plus the text-selection behaviour of a
//! terminal input.

use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::field::{Commit, DateField, Spin};

/// A date input box.
///
/// Focusing (or spinning) selects the whole text, so the next digit or
/// Backspace replaces it instead of editing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBox {
    field: DateField,
    select_all: bool,
}

impl DateBox {
    /// Creates a blurred box holding `initial`.
    pub fn new(initial: Option<NaiveDate>) -> Self {
        Self {
            field: DateField::new(initial),
            select_all: false,
        }
    }

    /// Returns the wrapped field.
    pub fn field(&self) -> &DateField {
        &self.field
    }

    /// Returns the wrapped field for direct updates such as `sync_initial`.
    pub fn field_mut(&mut self) -> &mut DateField {
        &mut self.field
    }

    /// Returns `true` if the next edit replaces the whole text.
    pub fn is_selecting_all(&self) -> bool {
        self.select_all
    }

    /// Focuses the field and selects its whole text.
    pub fn focus(&mut self) {
        self.field.focus();
        self.select_all = true;
    }

    /// Drops the selection and blurs the field, returning its commit.
    pub fn blur(&mut self) -> Option<Commit> {
        self.select_all = false;
        self.field.blur()
    }

    /// Types `ch` at the end of the text (or over the selection).
    pub fn type_char(&mut self, ch: char) -> bool {
        let mut next = if self.select_all {
            String::new()
        } else {
            self.field.display()
        };
        next.push(ch);
        self.replace_text(&next)
    }

    /// Deletes the last character (or the selection).
    pub fn backspace(&mut self) -> bool {
        let next = if self.select_all {
            String::new()
        } else {
            let mut text = self.field.display();
            text.pop();
            text
        };
        self.replace_text(&next)
    }

    /// Spins the field one day and selects the new text.
    pub fn spin(&mut self, spin: Spin) -> Option<Commit> {
        let commit = self.field.spin(spin);
        if commit.is_some() {
            self.select_all = true;
        }
        commit
    }

    /// Forwards a calendar-picker result to the field.
    pub fn picker_select(&mut self, date: Option<NaiveDate>) -> Commit {
        self.field.picker_select(date)
    }

    fn replace_text(&mut self, text: &str) -> bool {
        let accepted = self.field.keystroke(text);
        if accepted {
            self.select_all = false;
        }
        accepted
    }
}

/// Renders a date box with `label` as its title.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_date_box(date_box: &DateBox, label: &str, frame: &mut Frame, area: Rect) {
    let focused = date_box.field().is_focused();
    let border_color = if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let text_style = if focused && date_box.is_selecting_all() {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let mut spans = vec![Span::styled(date_box.field().display(), text_style)];
    if focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
