//! Expense categories
//!
//! The category set is fixed. Stored data carries the category as its
//! display name ("Food", "Transport", ...).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub enum Category {
    #[default]
    Food,
    Transport,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    /// Display name, also used as the stored form
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Parse category from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }

    /// The category after this one, wrapping around
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// The category before this one, wrapping around
    pub fn prev(&self) -> Self {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts any letter case, matching [`Category::parse`]
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Category::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Category::parse("Food"), Some(Category::Food));
        assert_eq!(Category::parse("transport"), Some(Category::Transport));
        assert_eq!(Category::parse(" BILLS "), Some(Category::Bills));
        assert_eq!(Category::parse("Groceries"), None);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Category::Food.next(), Category::Transport);
        assert_eq!(Category::Other.next(), Category::Food);
        assert_eq!(Category::Food.prev(), Category::Other);
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");

        let parsed: Category = serde_json::from_str("\"Other\"").unwrap();
        assert_eq!(parsed, Category::Other);
        let lowercase: Category = serde_json::from_str("\"bills\"").unwrap();
        assert_eq!(lowercase, Category::Bills);
        assert!(serde_json::from_str::<Category>("\"Rent\"").is_err());
    }
}
