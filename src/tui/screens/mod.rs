//! TUI screen implementations.

pub mod grid;
pub mod help;

pub use grid::{GridState, draw_grid};
pub use help::{HelpState, draw_help};
