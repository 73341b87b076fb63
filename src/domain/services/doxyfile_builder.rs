//! Doxyfile composition
//!
//! The configuration fed to `doxygen -` is the user's Doxyfile verbatim
//! followed by the run's overrides. Doxygen keeps the last assignment of a
//! key, so the overrides win without the user file being parsed.

use std::fs;
use std::path::Path;

use crate::domain::value_objects::Overrides;
use crate::error::DoxycheckResult;

/// Compose the configuration text from user content and overrides.
///
/// Nothing is inserted between the two parts: a user file without a trailing
/// newline has the first override appended to its last line.
pub fn compose_config(user_config: &str, overrides: &Overrides) -> String {
    let mut config = String::with_capacity(user_config.len() + overrides.len() * 32);
    config.push_str(user_config);
    config.push_str(&overrides.to_string());
    config
}

/// Build the configuration for a run.
///
/// A `user_config` path that does not exist counts as an empty file. Read
/// errors on an existing file are returned.
pub fn build_doxygen_config(
    user_config: Option<&Path>,
    overrides: &Overrides,
) -> DoxycheckResult<String> {
    let user = match user_config {
        Some(path) if path.exists() => fs::read_to_string(path)?,
        _ => String::new(),
    };
    Ok(compose_config(&user, overrides))
}
