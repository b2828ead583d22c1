//! Settings loading
//!
//! Game settings live in an optional RON file so levels and rules can be
//! changed without rebuilding.

pub mod loader;

pub use loader::{ConfigError, GameConfig, export_default_config, find_config, CONFIG_FILE};
