//! Configuration module for doxycheck
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DOXYCHECK_*)
//! 3. Settings file (`--settings`, else `.doxycheck.toml` in the working directory)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, SETTINGS_FILE};
pub use types::{Config, FilterConfig, GeneratorConfig, DEFAULT_DOXYFILE};
