//! Check result types

use std::path::PathBuf;

use crate::domain::policies::{SpawnFailurePolicy, EXIT_CLEAN, EXIT_WARNINGS};
use crate::domain::value_objects::{CheckMode, WarningLine};

/// What a check run found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The generator ran and nothing survived filtering.
    Clean,
    /// The generator ran and these warnings remain, in log order.
    Warnings(Vec<WarningLine>),
    /// The generator could not be started.
    SpawnFailed { message: String },
}

/// Result of a check operation
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub mode: CheckMode,
    pub files: Vec<PathBuf>,
    pub outcome: CheckOutcome,
    pub spawn_failure: SpawnFailurePolicy,
}

impl CheckResult {
    pub fn warnings(&self) -> &[WarningLine] {
        match &self.outcome {
            CheckOutcome::Warnings(lines) => lines,
            _ => &[],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.outcome == CheckOutcome::Clean
    }

    /// Process exit code for this result.
    pub fn exit_code(&self) -> i32 {
        match &self.outcome {
            CheckOutcome::Clean => EXIT_CLEAN,
            CheckOutcome::Warnings(_) => EXIT_WARNINGS,
            CheckOutcome::SpawnFailed { .. } => self.spawn_failure.exit_code(),
        }
    }
}
