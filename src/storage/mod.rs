//! Storage layer for ClearCoin
//!
//! A string key-value abstraction with a JSON-file backend, and the
//! persistence adapter that maps tracker state onto it.

pub mod file_io;
pub mod kv;
pub mod persistence;

pub use file_io::{read_optional, write_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use persistence::{Hydrated, Persistence, BUDGET_KEY, EXPENSES_KEY};

use crate::config::paths::ClearCoinPaths;
use crate::config::settings::Settings;
use crate::error::ClearCoinError;

/// Open file-backed persistence under the configured data directory
pub fn open(paths: &ClearCoinPaths, settings: &Settings) -> Result<Persistence, ClearCoinError> {
    paths.ensure_directories()?;
    Ok(Persistence::new(
        FileStore::new(paths.data_dir()),
        settings.default_budget,
    ))
}
