//! Month-view calendar picker popup.

use chrono::{Datelike, Days, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::calendar::{Era, format_year_month};

const WEEKDAY_HEADER: &str = "日 月 火 水 木 金 土";

/// What the picker wants the host to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    None,
    Picked(NaiveDate),
    Cleared,
    Closed,
}

/// A calendar with a day cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarPicker {
    cursor: NaiveDate,
}

impl CalendarPicker {
    /// Opens the picker with the cursor on `cursor`, or on the Meiji start
    /// if `cursor` is earlier.
    pub fn new(cursor: NaiveDate) -> Self {
        Self {
            cursor: cursor.max(Era::oldest().start()),
        }
    }

    /// Returns the highlighted day.
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Handles a key event.
    ///
    /// ←/→ move a day, ↑/↓ a week, PageUp/PageDown a month. Enter picks,
    /// Delete clears, Esc closes. Moves stop at the Meiji start.
    pub fn handle_key(&mut self, key: KeyEvent) -> PickerEvent {
        let moved = match key.code {
            KeyCode::Left => self.cursor.checked_sub_days(Days::new(1)),
            KeyCode::Right => self.cursor.checked_add_days(Days::new(1)),
            KeyCode::Up => self.cursor.checked_sub_days(Days::new(7)),
            KeyCode::Down => self.cursor.checked_add_days(Days::new(7)),
            KeyCode::PageUp => self.cursor.checked_sub_months(Months::new(1)),
            KeyCode::PageDown => self.cursor.checked_add_months(Months::new(1)),
            KeyCode::Enter => return PickerEvent::Picked(self.cursor),
            KeyCode::Delete => return PickerEvent::Cleared,
            KeyCode::Esc => return PickerEvent::Closed,
            _ => return PickerEvent::None,
        };
        if let Some(date) = moved {
            self.cursor = date.max(Era::oldest().start());
        }
        PickerEvent::None
    }

    /// First day of the cursor's month.
    fn month_start(&self) -> NaiveDate {
        self.cursor - Days::new(u64::from(self.cursor.day0()))
    }

    /// Days of the cursor's month laid out Sunday-first, one array per week.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let first = self.month_start();
        let lead = first.weekday().num_days_from_sunday() as usize;
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = lead;
        for day in first.iter_days().take_while(|d| d.month() == first.month()) {
            week[slot] = Some(day);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }
        weeks
    }

    /// Popup title: era year and month.
    pub fn title(&self) -> String {
        format_year_month(self.cursor)
    }
}

/// Renders the picker as a popup centered in `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_calendar(picker: &CalendarPicker, frame: &mut Frame, area: Rect) {
    let [popup] = Layout::horizontal([Constraint::Length(36)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(11)])
        .flex(Flex::Center)
        .areas(popup);

    let block = Block::default()
        .title(format!(" {} ", picker.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let header_style = Style::default().fg(Color::DarkGray);
    let cursor_style = Style::default().fg(Color::Black).bg(Color::Yellow);

    let mut lines = vec![Line::from(Span::styled(WEEKDAY_HEADER, header_style))];
    for week in picker.weeks() {
        let spans: Vec<Span> = week
            .iter()
            .enumerate()
            .flat_map(|(i, day)| {
                let text = day.map_or("  ".to_string(), |d| format!("{:>2}", d.day()));
                let style = if *day == Some(picker.cursor()) {
                    cursor_style
                } else {
                    Style::default()
                };
                let sep = if i < 6 { " " } else { "" };
                [Span::styled(text, style), Span::raw(sep)]
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        "Enter 選択  Del 消去  Esc 閉じる",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
