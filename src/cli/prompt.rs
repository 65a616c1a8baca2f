//! Line-based prompts for the command line

use std::io::{self, BufRead, Write};

use crate::services::UserPrompt;

/// Asks questions on a writer and reads answers from a reader
pub struct StdinPrompt<R, W> {
    reader: R,
    writer: W,
}

impl StdinPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read one line; `None` on end of input or read failure
    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input.trim().to_string()),
        }
    }

    fn ask(&mut self, text: &str) {
        let _ = write!(self.writer, "{}", text);
        let _ = self.writer.flush();
    }
}

impl<R: BufRead, W: Write> UserPrompt for StdinPrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        self.ask(&format!("{} (y/N): ", message));
        matches!(
            self.read_line().map(|s| s.to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        )
    }

    /// An empty answer accepts the pre-filled default
    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String> {
        self.ask(&format!("{} [{}]: ", message, default));
        let answer = self.read_line()?;
        if answer.is_empty() {
            Some(default.to_string())
        } else {
            Some(answer)
        }
    }
}
