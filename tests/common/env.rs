//! Test environment builder for isolated doxycheck testing.
//!
//! Provides `TestEnv` - a temp project directory plus a fake `doxygen`
//! script that records the configuration it was fed and writes a canned
//! warning log to the `WARN_LOGFILE` named in it. Like Doxygen, it creates
//! the log even when empty, and falls back to stderr when no line sets the key.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Placeholder in canned logs replaced by the project root path.
pub const ROOT: &str = "{root}";

const FAKE_DOXYGEN: &str = r#"#!/bin/sh
here=$(dirname "$0")
config=$(cat)
printf '%s\n' "$config" > "$here/last_config.txt"
log=$(printf '%s\n' "$config" | sed -n 's/^WARN_LOGFILE=//p' | tail -n 1)
if [ -z "$log" ]; then
    if [ -f "$here/canned_log.txt" ]; then
        cat "$here/canned_log.txt" >&2
    fi
    exit 0
fi
: > "$log"
if [ -f "$here/canned_log.txt" ]; then
    cat "$here/canned_log.txt" > "$log"
fi
exit 0
"#;

/// Result of running a doxycheck CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp project and a fake generator.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Directory holding the fake generator and its files
    pub tools_dir: TempDir,
    doxycheck_bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path of the fake doxygen executable
    pub fn fake_doxygen(&self) -> PathBuf {
        self.tools_dir.path().join("doxygen")
    }

    /// Configuration the fake doxygen received on its last run
    pub fn last_config(&self) -> String {
        std::fs::read_to_string(self.tools_dir.path().join("last_config.txt"))
            .unwrap_or_default()
    }

    /// Run doxycheck from the project root using the fake doxygen
    pub fn run(&self, args: &[&str]) -> TestResult {
        let program = self.fake_doxygen().display().to_string();
        self.run_with_env(args, &[("DOXYCHECK_DOXYGEN", program.as_str())])
    }

    /// Run doxycheck from the project root with explicit env vars only
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.doxycheck_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("DOXYCHECK_DOXYGEN")
            .env_remove("DOXYCHECK_DOXYFILE")
            .env_remove("DOXYCHECK_ALLOW_MISSING_DOXYGEN")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute doxycheck");
        Self::output_to_result(output)
    }

    /// Convert Command output to TestResult
    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative: &str, content: &str) {
        write_file(&self.project_path(relative), content);
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    warning_log: Option<String>,
    doxyfile: Option<String>,
    settings: Option<String>,
}

impl TestEnvBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            warning_log: None,
            doxyfile: None,
            settings: None,
        }
    }

    /// Add a source file to the project
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Set the log the fake doxygen writes; `{root}` expands to the project root
    pub fn with_warning_log(mut self, log: &str) -> Self {
        self.warning_log = Some(log.to_string());
        self
    }

    /// Write a `Doxyfile` in the project root
    pub fn with_doxyfile(mut self, content: &str) -> Self {
        self.doxyfile = Some(content.to_string());
        self
    }

    /// Write a `.doxycheck.toml` in the project root
    pub fn with_settings(mut self, toml: &str) -> Self {
        self.settings = Some(toml.to_string());
        self
    }

    /// Build the test environment
    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let tools_dir = TempDir::new().expect("Failed to create tools dir");

        for (relative, content) in &self.files {
            write_file(&project_root.path().join(relative), content);
        }
        if let Some(doxyfile) = &self.doxyfile {
            write_file(&project_root.path().join("Doxyfile"), doxyfile);
        }
        if let Some(settings) = &self.settings {
            write_file(&project_root.path().join(".doxycheck.toml"), settings);
        }
        if let Some(log) = &self.warning_log {
            let root = project_root.path().display().to_string();
            write_file(
                &tools_dir.path().join("canned_log.txt"),
                &log.replace(ROOT, &root),
            );
        }

        install_fake_doxygen(&tools_dir.path().join("doxygen"));

        TestEnv {
            project_root,
            tools_dir,
            doxycheck_bin: PathBuf::from(env!("CARGO_BIN_EXE_doxycheck")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn install_fake_doxygen(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    write_file(path, FAKE_DOXYGEN);
    let mut perms = std::fs::metadata(path)
        .expect("Failed to stat fake doxygen")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to chmod fake doxygen");
}
