//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DoxycheckResult;

use super::loader::{self, ConfigWarning};

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Doxygen executable, looked up on `PATH` when relative
    #[serde(default = "default_program")]
    pub program: PathBuf,

    /// Base Doxyfile, resolved against the working directory
    #[serde(default = "default_doxyfile")]
    pub doxyfile: PathBuf,

    /// Exit zero when the generator cannot be started
    #[serde(default)]
    pub allow_missing: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            doxyfile: default_doxyfile(),
            allow_missing: false,
        }
    }
}

fn default_program() -> PathBuf {
    PathBuf::from(crate::infrastructure::DEFAULT_DOXYGEN)
}

fn default_doxyfile() -> PathBuf {
    PathBuf::from(DEFAULT_DOXYFILE)
}

/// Default base Doxyfile name.
pub const DEFAULT_DOXYFILE: &str = "Doxyfile";

/// Warning filter configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterConfig {
    /// Extra exclusion regexes, applied after the built-in ones
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Main configuration structure (`.doxycheck.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    /// Extra Doxyfile settings appended after the fixed ones
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DoxycheckResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit settings file, or `.doxycheck.toml` in `root`, or defaults.
    pub fn load_or_default(
        root: &Path,
        explicit: Option<&Path>,
    ) -> DoxycheckResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(root, explicit)
    }

    /// Apply environment variable overrides (DOXYCHECK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
