//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Expense and budget state lives in the [`ExpenseTracker`]; the App only
//! adds what the terminal needs on top of it.

use std::time::Instant;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::models::{Expense, ExpenseId};
use crate::services::{today, ExpenseTracker};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Currently active dialog (if any)
///
/// The add-expense form is not listed here; its visibility is tracker state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    ConfirmDelete(ExpenseId),
    EditBudget,
}

/// Field focused in the add-expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Amount,
    Category,
    Date,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Title,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Date,
            Self::Amount => Self::Title,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// Main application state
pub struct App<'a> {
    pub tracker: &'a mut ExpenseTracker,

    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    /// Focused field while the add-expense form is shown
    pub form_field: FormField,

    /// Selected row in the expense table
    pub selected_index: usize,

    /// Budget dialog input
    pub budget_input: TextInput,

    pub notifications: NotificationQueue,

    /// Date the month-to-date summary is computed for
    pub today: NaiveDate,
}

impl<'a> App<'a> {
    pub fn new(tracker: &'a mut ExpenseTracker, settings: &'a Settings) -> Self {
        let mut app = Self {
            tracker,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            form_field: FormField::default(),
            selected_index: 0,
            budget_input: TextInput::new().label("Budget").focused(true),
            notifications: NotificationQueue::new(),
            today: today(),
        };
        app.collect_notices();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether a modal (dialog or form) currently owns the keyboard
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None || self.tracker.form().visible
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Open the budget dialog seeded with the current budget
    pub fn open_budget_dialog(&mut self) {
        self.budget_input
            .set_value(self.tracker.budget().to_input_string());
        self.open_dialog(ActiveDialog::EditBudget);
    }

    /// Show or hide the add-expense form, focusing its first field
    pub fn toggle_form(&mut self) {
        self.tracker.toggle_form();
        self.form_field = FormField::Title;
    }

    /// The expense under the cursor
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.tracker.expenses().get(self.selected_index)
    }

    pub fn move_down(&mut self) {
        let count = self.tracker.expenses().len();
        if count > 0 && self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Keep the selection inside the list after a removal
    pub fn clamp_selection(&mut self) {
        let count = self.tracker.expenses().len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Move tracker notices (load fallbacks, failed writes) into toasts
    pub fn collect_notices(&mut self) {
        for notice in self.tracker.take_notices() {
            self.notifications.push(Notification::warning(notice));
        }
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired(Instant::now());
        self.today = today();
    }
}
