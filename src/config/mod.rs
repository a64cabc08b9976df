//! Persistent CLI preferences.
//!
//! Owns the [`Config`] model plus its disk persistence; financial data never
//! passes through here.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config, Theme};
