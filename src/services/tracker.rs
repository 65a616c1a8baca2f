//! Expense tracker state
//!
//! `ExpenseTracker` is the single owner of the expense collection, the
//! budget and the add-expense form. Every change to the collection or the
//! budget is written through the persistence adapter and then announced to
//! subscribers, synchronously and in that order.

use std::cell::Cell;

use chrono::{Datelike, Local, NaiveDate, Utc};
use tracing::{info, warn};

use crate::error::{ClearCoinError, ClearCoinResult};
use crate::models::{Category, Expense, ExpenseForm, ExpenseId, Money};
use crate::storage::Persistence;

use super::prompt::UserPrompt;
use super::summary::{summarize, Summary};

/// Message shown when a new expense is rejected
pub const INVALID_EXPENSE_MESSAGE: &str = "Please enter a valid title and amount.";

/// Message shown when a new budget is rejected
pub const INVALID_BUDGET_MESSAGE: &str = "Please enter a valid number for the budget.";

/// Question asked before deleting an expense
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this expense?";

/// Question asked when editing the budget
pub const BUDGET_PROMPT_MESSAGE: &str = "Enter your new monthly budget:";

/// Change notifications delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// The expense collection changed (add or delete)
    ExpensesChanged,
    /// The budget was replaced
    BudgetChanged(Money),
    /// The form was shown, hidden or reset
    FormChanged,
}

type Listener = Box<dyn FnMut(&StateEvent)>;

/// Memo key: (revision, year, month)
type SummaryKey = (u64, i32, u32);

/// Owner of all tracker state
pub struct ExpenseTracker {
    expenses: Vec<Expense>,
    budget: Money,
    form: ExpenseForm,
    persistence: Persistence,
    listeners: Vec<Listener>,
    /// Bumped on every change to expenses or budget
    revision: u64,
    summary_cache: Cell<Option<(SummaryKey, Summary)>>,
    /// Set while the most recent write failed
    degraded: bool,
    notices: Vec<String>,
}

impl ExpenseTracker {
    /// Hydrate a tracker from persistence
    pub fn load(persistence: Persistence) -> Self {
        let hydrated = persistence.hydrate();
        Self {
            expenses: hydrated.expenses,
            budget: hydrated.budget,
            form: ExpenseForm::new(today()),
            persistence,
            listeners: Vec::new(),
            revision: 0,
            summary_cache: Cell::new(None),
            degraded: false,
            notices: hydrated.warnings,
        }
    }

    /// Expenses, newest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budget(&self) -> Money {
        self.budget
    }

    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    /// Edit form fields in place; visibility goes through [`toggle_form`](Self::toggle_form)
    pub fn form_mut(&mut self) -> &mut ExpenseForm {
        &mut self.form
    }

    /// Look up an expense by id
    pub fn find(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Whether the last write to storage failed
    pub fn persistence_degraded(&self) -> bool {
        self.degraded
    }

    /// Drain messages meant for the user (load fallbacks, failed writes)
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Register a callback invoked after every state change
    pub fn subscribe(&mut self, listener: impl FnMut(&StateEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Validate and record a new expense at the front of the list
    ///
    /// On success the form is reset and hidden. On failure nothing changes.
    pub fn add_expense(
        &mut self,
        title: &str,
        amount_text: &str,
        category: Category,
        date: NaiveDate,
    ) -> ClearCoinResult<&Expense> {
        let title = title.trim();
        let amount = Money::parse(amount_text).ok().filter(|a| a.is_positive());
        let amount = match amount {
            Some(amount) if !title.is_empty() => amount,
            _ => return Err(ClearCoinError::Validation(INVALID_EXPENSE_MESSAGE.into())),
        };

        let id = ExpenseId::unique_from(Utc::now(), |candidate| {
            self.expenses.iter().any(|e| &e.id == candidate)
        });
        let expense = Expense::new(id, title, amount, category, date);
        expense
            .validate()
            .map_err(|e| ClearCoinError::Validation(e.to_string()))?;

        info!(id = %expense.id, amount = %expense.amount, "Adding expense");
        self.expenses.insert(0, expense);
        self.expenses_changed();

        self.form.reset(today());
        self.notify(StateEvent::FormChanged);

        Ok(&self.expenses[0])
    }

    /// Submit the add-expense form
    pub fn submit_form(&mut self) -> ClearCoinResult<&Expense> {
        let form = self.form.clone();
        let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d").map_err(|_| {
            ClearCoinError::Validation("Please enter a valid date (YYYY-MM-DD).".into())
        })?;
        self.add_expense(&form.title, &form.amount, form.category, date)
    }

    /// Delete an expense after the user confirms
    ///
    /// Returns `true` if an expense was removed. An unknown id is a no-op
    /// and the user is not asked.
    pub fn delete_expense(&mut self, id: &ExpenseId, prompt: &mut dyn UserPrompt) -> bool {
        let Some(index) = self.expenses.iter().position(|e| &e.id == id) else {
            return false;
        };

        if !prompt.confirm(CONFIRM_DELETE_MESSAGE) {
            return false;
        }

        let removed = self.expenses.remove(index);
        info!(id = %removed.id, "Deleted expense");
        self.expenses_changed();
        true
    }

    /// Ask the user for a new budget, seeded with the current one
    ///
    /// Returns `Ok(false)` if the prompt was cancelled.
    pub fn edit_budget(&mut self, prompt: &mut dyn UserPrompt) -> ClearCoinResult<bool> {
        let Some(input) = prompt.prompt_text(BUDGET_PROMPT_MESSAGE, &self.budget.to_input_string())
        else {
            return Ok(false);
        };

        let budget = Money::parse(&input)
            .map_err(|_| ClearCoinError::Validation(INVALID_BUDGET_MESSAGE.into()))?;
        self.set_budget(budget)?;
        Ok(true)
    }

    /// Replace the budget
    pub fn set_budget(&mut self, budget: Money) -> ClearCoinResult<()> {
        if budget.is_negative() {
            return Err(ClearCoinError::Validation(INVALID_BUDGET_MESSAGE.into()));
        }

        info!(budget = %budget, "Setting budget");
        self.budget = budget;
        self.revision += 1;
        if let Err(e) = self.persistence.save_budget(self.budget) {
            self.write_failed("budget", e);
        } else {
            self.degraded = false;
        }
        self.notify(StateEvent::BudgetChanged(budget));
        Ok(())
    }

    /// Show or hide the add-expense form
    pub fn toggle_form(&mut self) {
        self.form.visible = !self.form.visible;
        self.notify(StateEvent::FormChanged);
    }

    /// Summary for the month containing `today`
    pub fn summary(&self, today: NaiveDate) -> Summary {
        let key = (self.revision, today.year(), today.month());
        if let Some((cached_key, summary)) = self.summary_cache.get() {
            if cached_key == key {
                return summary;
            }
        }

        let summary = summarize(&self.expenses, self.budget, today);
        self.summary_cache.set(Some((key, summary)));
        summary
    }

    /// Summary for the current local month
    pub fn current_summary(&self) -> Summary {
        self.summary(today())
    }

    fn expenses_changed(&mut self) {
        self.revision += 1;
        if let Err(e) = self.persistence.save_expenses(&self.expenses) {
            self.write_failed("expenses", e);
        } else {
            self.degraded = false;
        }
        self.notify(StateEvent::ExpensesChanged);
    }

    fn write_failed(&mut self, what: &str, error: ClearCoinError) {
        warn!(error = %error, "Failed to save {}; keeping changes in memory only", what);
        self.degraded = true;
        self.notices.push(format!("Failed to save {}: {}", what, error));
    }

    fn notify(&mut self, event: StateEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompt::PresetAnswers;
    use crate::services::summary::BudgetStatus;
    use crate::storage::{MemoryStore, BUDGET_KEY, EXPENSES_KEY};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tracker() -> (MemoryStore, ExpenseTracker) {
        let store = MemoryStore::new();
        let tracker = ExpenseTracker::load(Persistence::new(store.clone(), Money::DEFAULT_BUDGET));
        (store, tracker)
    }

    fn add(tracker: &mut ExpenseTracker, title: &str, amount: &str) -> ExpenseId {
        tracker
            .add_expense(title, amount, Category::Food, today())
            .unwrap()
            .id
            .clone()
    }

    #[test]
    fn test_defaults_on_empty_storage() {
        let (_store, tracker) = tracker();
        assert!(tracker.expenses().is_empty());
        assert_eq!(tracker.budget(), Money::DEFAULT_BUDGET);
        assert!(!tracker.form().visible);
    }

    #[test]
    fn test_add_prepends() {
        let (_store, mut tracker) = tracker();
        add(&mut tracker, "Coffee", "4.50");
        let second = add(&mut tracker, "Lunch", "12");

        assert_eq!(tracker.expenses().len(), 2);
        assert_eq!(tracker.expenses()[0].id, second);
        assert_eq!(tracker.expenses()[0].title, "Lunch");
        assert_eq!(tracker.expenses()[1].title, "Coffee");
        assert_ne!(tracker.expenses()[0].id, tracker.expenses()[1].id);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (store, mut tracker) = tracker();
        add(&mut tracker, "Coffee", "4.50");
        let writes = store.write_count();

        let invalid = [
            ("", "5"),
            ("   ", "5"),
            ("Tea", "0"),
            ("Tea", "-2"),
            ("Tea", "abc"),
            ("Tea", ""),
        ];
        for (title, amount) in invalid {
            let err = tracker
                .add_expense(title, amount, Category::Food, today())
                .unwrap_err();
            assert!(err.is_validation(), "{:?}/{:?}", title, amount);
        }

        assert_eq!(tracker.expenses().len(), 1);
        assert_eq!(store.write_count(), writes);
    }

    #[test]
    fn test_add_resets_and_hides_form() {
        let (_store, mut tracker) = tracker();
        tracker.toggle_form();
        tracker.form_mut().title = "Taxi".into();
        tracker.form_mut().amount = "18.20".into();
        tracker.form_mut().category = Category::Transport;

        let expense = tracker.submit_form().unwrap();
        assert_eq!(expense.category, Category::Transport);
        assert_eq!(expense.amount, Money::from_cents(1820));

        assert_eq!(tracker.form(), &ExpenseForm::new(today()));
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let (_store, mut tracker) = tracker();
        tracker.toggle_form();
        tracker.form_mut().title = "Taxi".into();
        tracker.form_mut().amount = "0".into();

        assert!(tracker.submit_form().is_err());
        assert!(tracker.form().visible);
        assert_eq!(tracker.form().title, "Taxi");

        tracker.form_mut().amount = "5".into();
        tracker.form_mut().date = "14/03/2025".into();
        assert!(tracker.submit_form().unwrap_err().is_validation());
        assert!(tracker.expenses().is_empty());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_store, mut tracker) = tracker();
        let keep = add(&mut tracker, "Coffee", "4.50");
        let target = add(&mut tracker, "Lunch", "12");

        let mut no = PresetAnswers::no();
        assert!(!tracker.delete_expense(&target, &mut no));
        assert_eq!(tracker.expenses().len(), 2);
        assert_eq!(no.asked, vec![CONFIRM_DELETE_MESSAGE]);

        assert!(tracker.delete_expense(&target, &mut PresetAnswers::yes()));
        assert_eq!(tracker.expenses().len(), 1);
        assert_eq!(tracker.expenses()[0].id, keep);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let (_store, mut tracker) = tracker();
        add(&mut tracker, "Coffee", "4.50");

        let mut yes = PresetAnswers::yes();
        assert!(!tracker.delete_expense(&ExpenseId::from("missing"), &mut yes));
        assert_eq!(tracker.expenses().len(), 1);
        assert!(yes.asked.is_empty());
    }

    #[test]
    fn test_edit_budget() {
        let (store, mut tracker) = tracker();

        assert!(tracker.edit_budget(&mut PresetAnswers::text("250.75")).unwrap());
        assert_eq!(tracker.budget(), Money::from_cents(25_075));
        assert_eq!(store.raw(BUDGET_KEY).as_deref(), Some("250.75"));

        assert!(tracker.edit_budget(&mut PresetAnswers::text("0")).unwrap());
        assert_eq!(tracker.budget(), Money::zero());
    }

    #[test]
    fn test_edit_budget_rejects_invalid_and_cancel() {
        let (_store, mut tracker) = tracker();

        for input in ["-5", "lots", ""] {
            let err = tracker
                .edit_budget(&mut PresetAnswers::text(input))
                .unwrap_err();
            assert!(err.is_validation());
        }
        assert!(!tracker.edit_budget(&mut PresetAnswers::no()).unwrap());
        assert_eq!(tracker.budget(), Money::DEFAULT_BUDGET);
    }

    #[test]
    fn test_toggle_form() {
        let (_store, mut tracker) = tracker();
        tracker.toggle_form();
        assert!(tracker.form().visible);
        tracker.toggle_form();
        assert!(!tracker.form().visible);
    }

    #[test]
    fn test_notifications_follow_mutations() {
        let (_store, mut tracker) = tracker();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        tracker.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        tracker.toggle_form();
        let id = add(&mut tracker, "Coffee", "4.50");
        tracker.set_budget(Money::from_cents(500)).unwrap();
        tracker.delete_expense(&id, &mut PresetAnswers::yes());
        let _ = tracker.add_expense("", "1", Category::Food, today());

        assert_eq!(
            *events.borrow(),
            vec![
                StateEvent::FormChanged,
                StateEvent::ExpensesChanged,
                StateEvent::FormChanged,
                StateEvent::BudgetChanged(Money::from_cents(500)),
                StateEvent::ExpensesChanged,
            ]
        );
    }

    #[test]
    fn test_every_change_is_persisted() {
        let (store, mut tracker) = tracker();
        add(&mut tracker, "Coffee", "4.50");
        tracker.set_budget(Money::from_cents(20_000)).unwrap();

        let reloaded = ExpenseTracker::load(Persistence::new(store.clone(), Money::DEFAULT_BUDGET));
        assert_eq!(reloaded.expenses(), tracker.expenses());
        assert_eq!(reloaded.budget(), Money::from_cents(20_000));
        assert!(store.raw(EXPENSES_KEY).is_some());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let (store, mut tracker) = tracker();
        store.set_fail_writes(true);

        add(&mut tracker, "Coffee", "4.50");
        tracker.set_budget(Money::from_cents(100)).unwrap();

        assert_eq!(tracker.expenses().len(), 1);
        assert_eq!(tracker.budget(), Money::from_cents(100));
        assert!(tracker.persistence_degraded());
        assert_eq!(tracker.take_notices().len(), 2);
        assert!(tracker.take_notices().is_empty());

        store.set_fail_writes(false);
        add(&mut tracker, "Tea", "2");
        assert!(!tracker.persistence_degraded());
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        let store = MemoryStore::new();
        store.insert(EXPENSES_KEY, "[{]");
        let mut tracker =
            ExpenseTracker::load(Persistence::new(store, Money::DEFAULT_BUDGET));

        assert!(tracker.expenses().is_empty());
        assert_eq!(tracker.take_notices().len(), 1);
    }

    #[test]
    fn test_summary_scenarios() {
        let (_store, mut tracker) = tracker();
        add(&mut tracker, "Coffee", "4.50");
        let s = tracker.current_summary();
        assert_eq!(s.month_spent, Money::from_cents(450));
        assert_eq!(s.remaining, Money::from_cents(99_550));
        assert!((s.spent_percentage() - 0.45).abs() < 1e-9);
        assert_eq!(s.status(), BudgetStatus::Ok);

        let (_store, mut tracker) = self::tracker();
        tracker.set_budget(Money::from_cents(10_000)).unwrap();
        add(&mut tracker, "Groceries", "90");
        assert_eq!(tracker.current_summary().remaining, Money::from_cents(1_000));
        assert_eq!(tracker.current_summary().status(), BudgetStatus::Warning);

        add(&mut tracker, "Shoes", "60");
        assert_eq!(tracker.current_summary().remaining, Money::from_cents(-5_000));
        assert_eq!(tracker.current_summary().status(), BudgetStatus::Over);
    }

    #[test]
    fn test_summary_recomputes_after_changes() {
        let (_store, mut tracker) = tracker();
        let day = today();
        assert_eq!(tracker.summary(day).month_spent, Money::zero());

        add(&mut tracker, "Coffee", "4.50");
        assert_eq!(tracker.summary(day).month_spent, Money::from_cents(450));

        tracker.set_budget(Money::from_cents(1_000)).unwrap();
        assert_eq!(tracker.summary(day).remaining, Money::from_cents(550));

        let next_month = day + chrono::Months::new(1);
        assert_eq!(tracker.summary(next_month).month_spent, Money::zero());
    }

    #[test]
    fn test_expenses_from_other_months_excluded() {
        let (_store, mut tracker) = tracker();
        let last_year = today() - chrono::Months::new(12);
        tracker
            .add_expense("Old TV", "5000", Category::Entertainment, last_year)
            .unwrap();
        add(&mut tracker, "Coffee", "4.50");

        assert_eq!(tracker.current_summary().month_spent, Money::from_cents(450));
    }

    #[test]
    fn test_huge_amounts_do_not_overflow_summary() {
        let (_store, mut tracker) = tracker();
        add(&mut tracker, "Yacht", "90000000000000000");
        add(&mut tracker, "Island", "90000000000000000");

        let s = tracker.current_summary();
        assert_eq!(s.month_spent, Money::from_cents(i64::MAX));
        assert!(s.remaining.is_negative());
        assert_eq!(s.status(), BudgetStatus::Over);
        assert_eq!(s.spent_percentage(), 100.0);
    }
}
