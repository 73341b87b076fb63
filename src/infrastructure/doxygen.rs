//! Doxygen process adapter
//!
//! Runs `doxygen -`, which reads its whole configuration from stdin.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{DocGenerator, InvocationOutcome};

/// Default executable name, looked up on `PATH`.
pub const DEFAULT_DOXYGEN: &str = "doxygen";

/// `DocGenerator` backed by a Doxygen executable.
#[derive(Debug, Clone)]
pub struct DoxygenProcess {
    program: PathBuf,
}

impl Default for DoxygenProcess {
    fn default() -> Self {
        Self::new(DEFAULT_DOXYGEN)
    }
}

impl DoxygenProcess {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn_failed(&self, err: &io::Error) -> InvocationOutcome {
        InvocationOutcome::SpawnFailed {
            message: format!("{}: {}", self.program.display(), err),
        }
    }
}

impl DocGenerator for DoxygenProcess {
    fn name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_DOXYGEN)
    }

    fn generate(&self, config: &str) -> InvocationOutcome {
        tracing::info!(program = %self.program.display(), "running generator");

        let mut child = match Command::new(&self.program)
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => return self.spawn_failed(&e),
        };

        // Doxygen reads the full configuration before it writes anything, so
        // feeding stdin before collecting output cannot deadlock.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(config.as_bytes()) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    tracing::debug!("generator closed stdin early");
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return self.spawn_failed(&e);
                }
            }
        }

        let output = match child.wait_with_output() {
            Ok(output) => output,
            Err(e) => return self.spawn_failed(&e),
        };

        if !output.stderr.is_empty() {
            tracing::debug!(
                stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                "generator stderr"
            );
        }

        let code = output.status.code();
        if output.status.success() {
            tracing::info!("generator finished");
        } else {
            tracing::warn!(?code, "generator exited unsuccessfully");
        }

        InvocationOutcome::Completed { code }
    }
}
