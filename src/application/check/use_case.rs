//! Check Use Case
//!
//! Runs the generator once inside a private temporary directory and filters
//! the warning log it leaves behind.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::ports::{DocGenerator, InvocationOutcome};
use crate::domain::services::{build_doxygen_config, LogFilter};
use crate::domain::value_objects::{
    validate_override, CheckMode, ExclusionPatterns, InterestingFiles, Overrides, WarningLine,
    INPUT,
};
use crate::error::{DoxycheckError, DoxycheckResult};

use super::options::CheckOptions;
use super::result::{CheckOutcome, CheckResult};

/// File name of the warning log inside the temporary directory.
pub const WARN_LOG_NAME: &str = "warn_log.txt";

/// Check use case - runs the generator and reports remaining warnings
pub struct CheckUseCase<G>
where
    G: DocGenerator,
{
    generator: G,
}

impl<G> CheckUseCase<G>
where
    G: DocGenerator,
{
    /// Create a new check use case
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Execute the check.
    ///
    /// Bad options and unreadable files are errors; a generator that cannot
    /// be started is an outcome.
    pub fn execute(&self, options: &CheckOptions) -> DoxycheckResult<CheckResult> {
        if options.mode == CheckMode::Input && options.files.len() != 1 {
            return Err(DoxycheckError::InputModeArity {
                count: options.files.len(),
            });
        }

        let exclusions = ExclusionPatterns::with_extra(&options.exclude)?;
        let interesting = InterestingFiles::resolve(&options.files)?;

        let temp_dir = tempfile::Builder::new().prefix("doxycheck-").tempdir()?;
        let log_path = temp_dir.path().join(WARN_LOG_NAME);

        let overrides = self.overrides(options, &log_path)?;
        tracing::debug!(
            keys = ?overrides.keys().collect::<Vec<_>>(),
            "composed overrides"
        );
        let config = build_doxygen_config(options.doxyfile.as_deref(), &overrides)?;

        let outcome = match self.generator.generate(&config) {
            InvocationOutcome::SpawnFailed { message } => {
                tracing::warn!(generator = self.generator.name(), %message, "spawn failed");
                CheckOutcome::SpawnFailed { message }
            }
            InvocationOutcome::Completed { .. } => {
                let lines = read_log(&log_path)?;
                let filter = match options.mode {
                    CheckMode::Project => LogFilter::for_files(&exclusions, &interesting),
                    CheckMode::Input => LogFilter::for_input(&exclusions),
                };
                let warnings = filter.apply(lines.iter().map(String::as_str));
                tracing::info!(
                    logged = lines.len(),
                    reported = warnings.len(),
                    "filtered warning log"
                );
                outcome_from(warnings)
            }
        };

        Ok(CheckResult {
            mode: options.mode,
            files: options.files.clone(),
            outcome,
            spawn_failure: options.spawn_failure,
        })
    }

    fn overrides(&self, options: &CheckOptions, log_path: &Path) -> DoxycheckResult<Overrides> {
        let mut overrides = Overrides::for_warning_log(log_path);

        if options.mode == CheckMode::Input {
            if let Some(file) = options.files.first() {
                overrides.set(INPUT, file.display().to_string());
            }
        }

        for (key, value) in &options.extra_overrides {
            validate_override(key, value)?;
            if !overrides.set_if_absent(key.as_str(), value.as_str()) {
                tracing::warn!(key = %key, "ignoring override of a reserved Doxyfile key");
            }
        }

        Ok(overrides)
    }
}

fn outcome_from(warnings: Vec<WarningLine>) -> CheckOutcome {
    if warnings.is_empty() {
        CheckOutcome::Clean
    } else {
        CheckOutcome::Warnings(warnings)
    }
}

/// Read the warning log as lines.
///
/// Doxygen creates the log at startup whenever `WARN_LOGFILE` is set, so a
/// missing file means the setting never took effect.
fn read_log(path: &Path) -> DoxycheckResult<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DoxycheckError::MissingWarningLog {
            path: path.to_path_buf(),
        },
        _ => DoxycheckError::Io(e),
    })?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect())
}
