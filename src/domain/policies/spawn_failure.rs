//! Spawn failure policy
//!
//! Decides the exit code when Doxygen could not be started at all.

use serde::{Deserialize, Serialize};

/// Exit code for a clean run.
pub const EXIT_CLEAN: i32 = 0;
/// Exit code when warnings remain or the generator could not be run.
pub const EXIT_WARNINGS: i32 = 1;
/// Exit code for invalid usage or settings.
pub const EXIT_USAGE: i32 = 2;

/// What a failed spawn means for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnFailurePolicy {
    /// Report the failure and exit non-zero.
    #[default]
    Fail,
    /// Report the failure and exit zero, e.g. on machines without Doxygen.
    Ignore,
}

impl SpawnFailurePolicy {
    pub fn from_allow_missing(allow_missing: bool) -> Self {
        if allow_missing {
            SpawnFailurePolicy::Ignore
        } else {
            SpawnFailurePolicy::Fail
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SpawnFailurePolicy::Fail => EXIT_WARNINGS,
            SpawnFailurePolicy::Ignore => EXIT_CLEAN,
        }
    }
}
