//! gamesmith-config
//!
//! Persistent client preferences: which server to talk to, who the acting
//! user is, and how output should look.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config, KEYS};
