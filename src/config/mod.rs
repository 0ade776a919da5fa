//! Configuration for the posts API client.
//!
//! Loaded from `~/.config/postdeck/config.toml` (or the platform
//! equivalent); a missing file means defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config};
