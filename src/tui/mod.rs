//! Terminal User Interface module
//!
//! Interactive ratatui front end: a budget summary header, the recent
//! expenses table, and modal dialogs for adding an expense, confirming a
//! deletion and editing the budget.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
