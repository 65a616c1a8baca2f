//! TUI Views module
//!
//! The summary header, the expense table and the status bar, plus the
//! dialog and toast overlays drawn on top of them.

pub mod expenses;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    summary::render(frame, app, layout.header);
    expenses::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.tracker.form().visible {
        dialogs::expense_form::render(frame, app);
    }

    match &app.active_dialog {
        ActiveDialog::ConfirmDelete(_) => dialogs::confirm::render(frame, app),
        ActiveDialog::EditBudget => dialogs::budget::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(44, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
