//! Persistence adapter
//!
//! Mirrors the expense collection and the budget into a [`KeyValueStore`].
//! Reading never fails: missing or unreadable values fall back to an empty
//! collection and the default budget, with a warning.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::{ClearCoinError, ClearCoinResult};
use crate::models::{Expense, Money};

use super::kv::KeyValueStore;

/// Storage key holding the JSON array of expenses
pub const EXPENSES_KEY: &str = "expenses";

/// Storage key holding the JSON number budget
pub const BUDGET_KEY: &str = "totalBudget";

/// State read back from storage at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Hydrated {
    pub expenses: Vec<Expense>,
    pub budget: Money,
    /// Human-readable notes about data that had to be discarded
    pub warnings: Vec<String>,
}

/// Reads and writes tracker state through a key-value store
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
    default_budget: Money,
}

impl Persistence {
    /// Create a persistence adapter over `store`
    pub fn new(store: impl KeyValueStore + 'static, default_budget: Money) -> Self {
        Self {
            store: Box::new(store),
            default_budget,
        }
    }

    /// Budget used when nothing valid is stored
    pub fn default_budget(&self) -> Money {
        self.default_budget
    }

    /// Load expenses and budget, falling back on anything unreadable
    pub fn hydrate(&self) -> Hydrated {
        let mut warnings = Vec::new();

        let expenses = match self.load_expenses() {
            Ok(Some(expenses)) => dedupe(expenses, &mut warnings),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load expenses, starting with an empty list");
                warnings.push(format!("Stored expenses could not be read: {}", e));
                Vec::new()
            }
        };

        let budget = match self.load_budget() {
            Ok(Some(budget)) => budget,
            Ok(None) => self.default_budget,
            Err(e) => {
                warn!(error = %e, "Failed to load budget, using the default");
                warnings.push(format!("Stored budget could not be read: {}", e));
                self.default_budget
            }
        };

        info!(
            expenses = expenses.len(),
            budget = %budget,
            "Hydrated tracker state"
        );

        Hydrated {
            expenses,
            budget,
            warnings,
        }
    }

    fn load_expenses(&self) -> ClearCoinResult<Option<Vec<Expense>>> {
        let Some(raw) = self.store.get(EXPENSES_KEY)? else {
            return Ok(None);
        };
        let expenses: Vec<Expense> = serde_json::from_str(&raw)?;
        for expense in &expenses {
            expense.validate().map_err(|e| {
                ClearCoinError::Validation(format!("expense {}: {}", expense.id, e))
            })?;
        }
        Ok(Some(expenses))
    }

    fn load_budget(&self) -> ClearCoinResult<Option<Money>> {
        let Some(raw) = self.store.get(BUDGET_KEY)? else {
            return Ok(None);
        };
        let budget: Money = serde_json::from_str(&raw)?;
        if budget.is_negative() {
            return Err(ClearCoinError::Validation(format!(
                "budget cannot be negative ({})",
                budget
            )));
        }
        Ok(Some(budget))
    }

    /// Write the full expense collection
    pub fn save_expenses(&mut self, expenses: &[Expense]) -> ClearCoinResult<()> {
        let json = serde_json::to_string(expenses)?;
        self.store.set(EXPENSES_KEY, &json)?;
        debug!(count = expenses.len(), "Saved expenses");
        Ok(())
    }

    /// Write the budget
    pub fn save_budget(&mut self, budget: Money) -> ClearCoinResult<()> {
        let json = serde_json::to_string(&budget)?;
        self.store.set(BUDGET_KEY, &json)?;
        debug!(budget = %budget, "Saved budget");
        Ok(())
    }
}

/// Drop later expenses whose id repeats an earlier one
fn dedupe(expenses: Vec<Expense>, warnings: &mut Vec<String>) -> Vec<Expense> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(expenses.len());
    for expense in expenses {
        if seen.insert(expense.id.clone()) {
            unique.push(expense);
        } else {
            warn!(id = %expense.id, "Dropping stored expense with duplicate id");
            warnings.push(format!("Dropped duplicate expense {}", expense.id));
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId};
    use crate::storage::kv::{FileStore, MemoryStore};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(id: &str, title: &str, cents: i64) -> Expense {
        Expense::new(
            ExpenseId::from(id),
            title,
            Money::from_cents(cents),
            Category::Food,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        )
    }

    #[test]
    fn test_empty_store_uses_defaults() {
        let persistence = Persistence::new(MemoryStore::new(), Money::DEFAULT_BUDGET);
        let hydrated = persistence.hydrate();

        assert!(hydrated.expenses.is_empty());
        assert_eq!(hydrated.budget, Money::DEFAULT_BUDGET);
        assert!(hydrated.warnings.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let store = MemoryStore::new();
        let mut persistence = Persistence::new(store.clone(), Money::DEFAULT_BUDGET);

        let expenses = vec![
            expense("c", "Cinema", 1200),
            expense("b", "Bus", 275),
            expense("a", "Apples", 399),
        ];
        persistence.save_expenses(&expenses).unwrap();
        persistence.save_budget(Money::from_cents(12_345)).unwrap();

        let reloaded = Persistence::new(store, Money::DEFAULT_BUDGET).hydrate();
        assert_eq!(reloaded.expenses, expenses);
        assert_eq!(reloaded.budget, Money::from_cents(12_345));
    }

    #[test]
    fn test_stored_layout() {
        let store = MemoryStore::new();
        let mut persistence = Persistence::new(store.clone(), Money::DEFAULT_BUDGET);

        persistence
            .save_expenses(&[expense("2025-03-14T09:26:53.589Z", "Coffee", 450)])
            .unwrap();
        persistence.save_budget(Money::from_cents(99_550)).unwrap();

        assert_eq!(
            store.raw(EXPENSES_KEY).unwrap(),
            r#"[{"id":"2025-03-14T09:26:53.589Z","title":"Coffee","amount":4.5,"category":"Food","date":"2025-03-14"}]"#
        );
        assert_eq!(store.raw(BUDGET_KEY).unwrap(), "995.5");
    }

    #[test]
    fn test_malformed_expenses_fall_back_to_empty() {
        let store = MemoryStore::new();
        store.insert(EXPENSES_KEY, "{not json");
        store.insert(BUDGET_KEY, "250");

        let hydrated = Persistence::new(store, Money::DEFAULT_BUDGET).hydrate();
        assert!(hydrated.expenses.is_empty());
        assert_eq!(hydrated.budget, Money::from_cents(25_000));
        assert_eq!(hydrated.warnings.len(), 1);
    }

    #[test]
    fn test_invalid_entry_discards_collection() {
        let store = MemoryStore::new();
        store.insert(
            EXPENSES_KEY,
            r#"[{"id":"x","title":"Refund","amount":-3,"category":"Food","date":"2025-03-14"}]"#,
        );

        let hydrated = Persistence::new(store, Money::DEFAULT_BUDGET).hydrate();
        assert!(hydrated.expenses.is_empty());
        assert_eq!(hydrated.warnings.len(), 1);
    }

    #[test]
    fn test_malformed_budget_falls_back_to_default() {
        for raw in ["\"lots\"", "-10", ""] {
            let store = MemoryStore::new();
            store.insert(BUDGET_KEY, raw);

            let hydrated = Persistence::new(store, Money::from_cents(500)).hydrate();
            assert_eq!(hydrated.budget, Money::from_cents(500), "input {:?}", raw);
            assert_eq!(hydrated.warnings.len(), 1);
        }
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let store = MemoryStore::new();
        let mut persistence = Persistence::new(store.clone(), Money::DEFAULT_BUDGET);
        persistence
            .save_expenses(&[expense("same", "First", 100), expense("same", "Second", 200)])
            .unwrap();

        let hydrated = Persistence::new(store, Money::DEFAULT_BUDGET).hydrate();
        assert_eq!(hydrated.expenses.len(), 1);
        assert_eq!(hydrated.expenses[0].title, "First");
        assert_eq!(hydrated.warnings.len(), 1);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut persistence = Persistence::new(store.clone(), Money::DEFAULT_BUDGET);

        assert!(persistence.save_budget(Money::from_cents(100)).is_err());
        assert_eq!(store.raw(BUDGET_KEY), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut persistence = Persistence::new(
            FileStore::new(temp_dir.path().to_path_buf()),
            Money::DEFAULT_BUDGET,
        );
        let expenses = vec![expense("a", "Apples", 399)];
        persistence.save_expenses(&expenses).unwrap();
        persistence.save_budget(Money::from_cents(0)).unwrap();

        let reloaded = Persistence::new(
            FileStore::new(temp_dir.path().to_path_buf()),
            Money::DEFAULT_BUDGET,
        )
        .hydrate();
        assert_eq!(reloaded.expenses, expenses);
        assert_eq!(reloaded.budget, Money::zero());
    }
}
