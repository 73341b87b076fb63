//! Check options

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::DEFAULT_DOXYFILE;
use crate::domain::policies::SpawnFailurePolicy;
use crate::domain::value_objects::CheckMode;

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Files whose warnings are reported
    pub files: Vec<PathBuf>,
    /// How the generator is pointed at the files
    pub mode: CheckMode,
    /// Base Doxyfile; a missing file counts as empty
    pub doxyfile: Option<PathBuf>,
    /// Extra exclusion regexes
    pub exclude: Vec<String>,
    /// Extra Doxyfile settings appended after the fixed ones
    pub extra_overrides: BTreeMap<String, String>,
    /// Exit code when the generator cannot be started
    pub spawn_failure: SpawnFailurePolicy,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            mode: CheckMode::default(),
            doxyfile: Some(PathBuf::from(DEFAULT_DOXYFILE)),
            exclude: Vec::new(),
            extra_overrides: BTreeMap::new(),
            spawn_failure: SpawnFailurePolicy::default(),
        }
    }
}

impl CheckOptions {
    /// Create new check options for `files`
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            ..Self::default()
        }
    }

    /// Set mode
    pub fn with_mode(mut self, mode: CheckMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set base Doxyfile
    pub fn with_doxyfile(mut self, doxyfile: Option<PathBuf>) -> Self {
        self.doxyfile = doxyfile;
        self
    }

    /// Add exclusion patterns
    pub fn with_exclude(mut self, patterns: impl IntoIterator<Item = String>) -> Self {
        self.exclude.extend(patterns);
        self
    }

    /// Add extra Doxyfile overrides
    pub fn with_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.extra_overrides.extend(overrides);
        self
    }

    /// Set spawn failure policy
    pub fn with_spawn_failure(mut self, policy: SpawnFailurePolicy) -> Self {
        self.spawn_failure = policy;
        self
    }
}
