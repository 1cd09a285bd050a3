// Terminal UI implementation using ratatui

pub mod app;
pub mod runner;
pub mod ui;

pub use app::{App, InputMode, SearchPhase};
pub use runner::{run_tui, AppEvent};
