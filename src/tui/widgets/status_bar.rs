//! Status bar widget: one-line editing context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::calendar::Era;

/// Data passed to the status bar widget; decoupled from the grid state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Whether a date editor is open.
    pub editing: bool,
    /// The open editor's last resolved era.
    pub last_era: Option<Era>,
    /// Number of rows in the grid.
    pub row_count: usize,
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned):
/// - Editing: `入力 [令和]  3 rows`  (mode and era in Yellow)
/// - Browsing: `表示  3 rows`  (Cyan)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let yellow = Style::default().fg(Color::Yellow);

    let mut spans: Vec<Span> = Vec::new();
    if ctx.editing {
        spans.push(Span::styled("入力", yellow));
        if let Some(era) = ctx.last_era {
            spans.push(Span::styled(format!(" [{}]", era.name()), yellow));
        }
    } else {
        spans.push(Span::styled("表示", cyan));
    }
    spans.push(Span::styled(format!("  {} rows", ctx.row_count), cyan));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
