//! User prompts
//!
//! Deleting an expense asks for confirmation and editing the budget asks for
//! a new value. Both go through [`UserPrompt`] so the tracker does not care
//! whether the answer comes from stdin, a TUI dialog or a test.

/// Blocking questions put to the user
pub trait UserPrompt {
    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Ask for a line of text, pre-filled with `default`; `None` means cancelled
    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String>;
}

/// Answers collected ahead of time
///
/// The TUI gathers the user's answer in a modal dialog first and then
/// replays it through this type.
#[derive(Debug, Clone, Default)]
pub struct PresetAnswers {
    confirm: bool,
    text: Option<String>,
    /// Every message that was asked, in order
    pub asked: Vec<String>,
}

impl PresetAnswers {
    /// Answer "yes" to confirmations
    pub fn yes() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    /// Answer "no" to confirmations and cancel text prompts
    pub fn no() -> Self {
        Self::default()
    }

    /// Answer text prompts with `text`
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

impl UserPrompt for PresetAnswers {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirm
    }

    fn prompt_text(&mut self, message: &str, _default: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_answers() {
        let mut yes = PresetAnswers::yes();
        assert!(yes.confirm("Delete?"));
        assert_eq!(yes.prompt_text("Budget?", "10"), None);
        assert_eq!(yes.asked, vec!["Delete?", "Budget?"]);

        let mut no = PresetAnswers::no();
        assert!(!no.confirm("Delete?"));

        let mut text = PresetAnswers::text("250");
        assert_eq!(text.prompt_text("Budget?", "10").as_deref(), Some("250"));
    }
}
