//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. Answers given in dialogs are replayed to the tracker
//! through [`PresetAnswers`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::ClearCoinError;
use crate::models::ExpenseId;
use crate::services::PresetAnswers;

use super::app::{ActiveDialog, App, FormField};
use super::dialogs::expense_form;
use super::event::Event;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
    app.collect_notices();
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.tracker.form().visible {
        return handle_form_key(app, key);
    }

    match app.active_dialog.clone() {
        ActiveDialog::ConfirmDelete(id) => handle_confirm_key(app, key, id),
        ActiveDialog::EditBudget => handle_budget_key(app, key),
        ActiveDialog::None => handle_normal_key(app, key),
    }
}

/// Handle keys when no dialog is open
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.tracker.expenses().len().saturating_sub(1);
        }

        KeyCode::Char('a') | KeyCode::Char('n') => app.toggle_form(),

        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_expense().map(|e| e.id.clone()) {
                app.open_dialog(ActiveDialog::ConfirmDelete(id));
            }
        }

        KeyCode::Char('b') => app.open_budget_dialog(),

        _ => {}
    }
}

/// Handle keys while the add-expense form is shown
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.toggle_form(),

        KeyCode::Tab => app.form_field = app.form_field.next(),
        KeyCode::BackTab => app.form_field = app.form_field.prev(),

        KeyCode::Left if app.form_field == FormField::Category => {
            let form = app.tracker.form_mut();
            form.category = form.category.prev();
        }
        KeyCode::Right if app.form_field == FormField::Category => {
            let form = app.tracker.form_mut();
            form.category = form.category.next();
        }

        KeyCode::Enter => match app.tracker.submit_form() {
            Ok(expense) => {
                let message = format!("Added {}", expense.title);
                app.selected_index = 0;
                app.form_field = FormField::Title;
                app.notify(Notification::success(message));
            }
            Err(e) => app.notify(Notification::error(user_message(e))),
        },

        KeyCode::Backspace => expense_form::backspace(app.tracker.form_mut(), app.form_field),

        KeyCode::Char(c) => expense_form::insert_char(app.tracker.form_mut(), app.form_field, c),

        _ => {}
    }
}

/// Handle keys in the delete confirmation
fn handle_confirm_key(app: &mut App, key: KeyEvent, id: ExpenseId) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.close_dialog();
            if app.tracker.delete_expense(&id, &mut PresetAnswers::yes()) {
                app.clamp_selection();
                app.notify(Notification::success("Expense deleted"));
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}

/// Handle keys in the budget dialog
fn handle_budget_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),

        KeyCode::Enter => {
            let mut answer = PresetAnswers::text(app.budget_input.value());
            match app.tracker.edit_budget(&mut answer) {
                Ok(_) => {
                    app.close_dialog();
                    let budget = app
                        .tracker
                        .budget()
                        .format_with_symbol(&app.settings.currency_symbol);
                    app.notify(Notification::success(format!("Budget set to {}", budget)));
                }
                // Leave the dialog open so the value can be corrected
                Err(e) => app.notify(Notification::error(user_message(e))),
            }
        }

        KeyCode::Backspace => app.budget_input.backspace(),
        KeyCode::Left => app.budget_input.move_left(),
        KeyCode::Right => app.budget_input.move_right(),
        KeyCode::Char(c) => app.budget_input.insert(c),

        _ => {}
    }
}

/// Text shown to the user for a failed action
fn user_message(error: ClearCoinError) -> String {
    match error {
        ClearCoinError::Validation(message) => message,
        other => other.to_string(),
    }
}
