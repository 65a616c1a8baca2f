//! Configuration module for ClearCoin
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ClearCoinPaths;
pub use settings::Settings;
