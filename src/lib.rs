//! ClearCoin - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for ClearCoin: a list of
//! expenses, a monthly budget, and a month-to-date summary of how much of
//! that budget is left. State is persisted as JSON after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, categories)
//! - `storage`: Key-value storage and the persistence adapter
//! - `services`: The expense tracker and the summary calculator
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use clearcoin::config::{paths::ClearCoinPaths, settings::Settings};
//! use clearcoin::services::ExpenseTracker;
//!
//! let paths = ClearCoinPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let tracker = ExpenseTracker::load(clearcoin::storage::open(&paths, &settings)?);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ClearCoinError, ClearCoinResult};

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

static INIT_TRACING: Once = Once::new();

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "clearcoin=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initializes global tracing, writing to stderr.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Initializes global tracing, appending to a log file.
///
/// Used while the TUI owns the terminal. If the file cannot be opened
/// logging stays disabled.
pub fn init_file_tracing(path: &Path) {
    INIT_TRACING.call_once(|| {
        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init_tracing();
        super::init_tracing();
    }
}
