//! Data grid screen: rows with an era date column and an in-cell date editor.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Row, Table};

use crate::calendar::format_long;
use crate::field::{Commit, Spin};
use crate::model::GridRow;
use crate::tui::action::Action;
use crate::tui::widgets::{
    CalendarPicker, DateBox, PickerEvent, StatusBarContext, draw_calendar, draw_date_box,
    draw_status_bar,
};

/// An open date editor on the selected row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Editor {
    date_box: DateBox,
    /// Row value when the editor opened, restored by Ctrl+Z.
    original: Option<NaiveDate>,
    picker: Option<CalendarPicker>,
}

/// State for the grid screen.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    /// Index of the highlighted row (0-based).
    selected: usize,
    editor: Option<Editor>,
}

impl GridState {
    /// Creates a new state with the cursor on the first row and no editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently selected row index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns `true` while a date editor is open.
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Returns `true` while the calendar picker is open.
    pub fn is_picking(&self) -> bool {
        self.editor.as_ref().is_some_and(|e| e.picker.is_some())
    }

    /// Returns the open editor's input box.
    pub fn date_box(&self) -> Option<&DateBox> {
        self.editor.as_ref().map(|e| &e.date_box)
    }

    /// Returns the open calendar picker.
    pub fn picker(&self) -> Option<&CalendarPicker> {
        self.editor.as_ref().and_then(|e| e.picker.as_ref())
    }

    /// Applies any initial value scheduled on the open editor. Called after each draw.
    pub fn settle(&mut self) -> bool {
        self.editor
            .as_mut()
            .is_some_and(|e| e.date_box.field_mut().settle())
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, rows: &[GridRow]) -> Action {
        if self.is_picking() {
            return self.handle_picker_key(key);
        }
        if self.is_editing() {
            return self.handle_editor_key(key);
        }
        self.handle_browse_key(key, rows)
    }

    fn handle_browse_key(&mut self, key: KeyEvent, rows: &[GridRow]) -> Action {
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if !rows.is_empty() {
                    self.selected = (self.selected + 1).min(rows.len() - 1);
                }
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = rows.len().saturating_sub(1),
            KeyCode::Enter => self.open_editor(rows),
            KeyCode::F(4) => {
                self.open_editor(rows);
                self.open_picker();
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                self.open_editor(rows);
                if let Some(editor) = self.editor.as_mut() {
                    editor.date_box.type_char(ch);
                }
            }
            _ => {}
        }
        Action::None
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Action {
        let Some(editor) = self.editor.as_mut() else {
            return Action::None;
        };
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('z') {
            let original = editor.original;
            editor.date_box.field_mut().sync_initial(original);
            return Action::UpdateRow(self.selected, original);
        }
        match key.code {
            KeyCode::Char('+') | KeyCode::Up => {
                let commit = editor.date_box.spin(Spin::Up);
                self.commit_action(commit)
            }
            KeyCode::Char('-') | KeyCode::Down => {
                let commit = editor.date_box.spin(Spin::Down);
                self.commit_action(commit)
            }
            KeyCode::Char(ch) => {
                editor.date_box.type_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                editor.date_box.backspace();
                Action::None
            }
            KeyCode::Enter | KeyCode::Tab => self.close_editor(),
            KeyCode::Esc => {
                self.editor = None;
                Action::None
            }
            KeyCode::F(4) => {
                self.open_picker();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) -> Action {
        let Some(editor) = self.editor.as_mut() else {
            return Action::None;
        };
        let Some(picker) = editor.picker.as_mut() else {
            return Action::None;
        };
        let picked = match picker.handle_key(key) {
            PickerEvent::None => return Action::None,
            PickerEvent::Closed => {
                editor.picker = None;
                return Action::None;
            }
            PickerEvent::Picked(date) => Some(date),
            PickerEvent::Cleared => None,
        };
        let commit = editor.date_box.picker_select(picked);
        // Picking a day finishes the edit.
        self.editor = None;
        self.commit_action(Some(commit))
    }

    fn open_editor(&mut self, rows: &[GridRow]) {
        let Some(row) = rows.get(self.selected) else {
            return;
        };
        let mut date_box = DateBox::new(row.date);
        date_box.focus();
        self.editor = Some(Editor {
            date_box,
            original: row.date,
            picker: None,
        });
    }

    fn open_picker(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            let start = editor
                .date_box
                .field()
                .committed()
                .unwrap_or_else(|| Local::now().date_naive());
            editor.picker = Some(CalendarPicker::new(start));
        }
    }

    fn close_editor(&mut self) -> Action {
        let commit = self.editor.take().and_then(|mut e| e.date_box.blur());
        self.commit_action(commit)
    }

    fn commit_action(&self, commit: Option<Commit>) -> Action {
        match commit {
            Some(Commit(date)) => Action::UpdateRow(self.selected, date),
            None => Action::None,
        }
    }
}

/// Renders the grid screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_grid(state: &GridState, rows: &[GridRow], frame: &mut Frame, area: Rect) {
    let [status_area, table_area, editor_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let ctx = StatusBarContext {
        editing: state.is_editing(),
        last_era: state.date_box().map(|b| b.field().last_era()),
        row_count: rows.len(),
    };
    draw_status_bar(&ctx, frame, status_area);

    let header = Row::new(vec!["ID", "名前", "世代", "日付"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = i == state.selected();
            let date_text = match state.date_box() {
                Some(date_box) if selected => date_box.field().display(),
                _ => format_long(row.date),
            };
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                row.id.to_string(),
                row.name.clone(),
                row.generation.clone(),
                date_text,
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Min(20),
    ];
    frame.render_widget(Table::new(table_rows, widths).header(header), table_area);

    if let Some(date_box) = state.date_box() {
        draw_date_box(date_box, "日付", frame, editor_area);
    }

    let hint = if state.is_picking() {
        "←→↑↓: move  PgUp/PgDn: month  Enter: pick  Del: clear  Esc: close"
    } else if state.is_editing() {
        "digits: type  +/-: spin  F4: calendar  Enter/Tab: commit  Esc: cancel  Ctrl+Z: revert"
    } else {
        "↑↓: navigate  Enter/digit: edit date  F4: calendar  F1: help  q: quit"
    };
    let footer = Paragraph::new(Line::from(hint)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some(picker) = state.picker() {
        draw_calendar(picker, frame, area);
    }
}
