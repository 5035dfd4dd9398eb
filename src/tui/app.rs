use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};
use tracing::{debug, info, warn};

use crate::calendar::format_long;
use crate::model::GridRow;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{GridState, HelpState, draw_grid, draw_help};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The data grid with its date column.
    Grid,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    rows: Vec<GridRow>,
    grid: GridState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` showing `rows` on the [`Screen::Grid`] screen.
    pub fn new(rows: Vec<GridRow>) -> Self {
        Self {
            screen: Screen::Grid,
            rows,
            grid: GridState::new(),
            help: HelpState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → settle → read event → dispatch → check quit.
    ///
    /// Initial values scheduled by an editor are applied only after the frame
    /// showing the previous value has been drawn.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if self.grid.settle() {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Grid => draw_grid(&self.grid, &self.rows, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    ///
    /// Global keys are suspended while a date is being edited so that the
    /// editor sees `q`, `?` and Esc itself.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.screen {
            Screen::Help => self.help.handle_key(key),
            Screen::Grid if self.grid.is_editing() => self.grid.handle_key(key, &self.rows),
            Screen::Grid => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                KeyCode::Char('?') | KeyCode::F(1) => Action::Navigate(Screen::Help),
                _ => self.grid.handle_key(key, &self.rows),
            },
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                debug!(?screen, "navigate");
                if screen == Screen::Help {
                    self.help.reset();
                }
                self.screen = screen;
            }
            Action::UpdateRow(index, date) => match self.rows.get_mut(index) {
                Some(row) => {
                    info!(id = row.id, date = %format_long(date), "row date committed");
                    row.date = date;
                }
                None => warn!(index, "commit for missing row dropped"),
            },
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the grid rows.
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Returns the grid screen state.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }
}
