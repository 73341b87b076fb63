//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Flags left unset fall back to `DOXYCHECK_*` variables, then the settings file
//! - `--mode input` accepts exactly one file

use std::path::PathBuf;

use clap::Parser;

use crate::domain::value_objects::CheckMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Run over the project, report warnings about the given files
    Project,
    /// Run Doxygen on the single given file only
    Input,
}

impl From<ModeArg> for CheckMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Project => CheckMode::Project,
            ModeArg::Input => CheckMode::Input,
        }
    }
}

/// doxycheck - report Doxygen warnings for the files you care about
#[derive(Parser, Debug)]
#[command(name = "doxycheck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Exit status: 0 when clean, 1 when warnings remain or Doxygen cannot run.")]
pub struct Cli {
    /// Files to report warnings for
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// How Doxygen is pointed at the files
    #[arg(long, value_enum, default_value = "project")]
    pub mode: ModeArg,

    /// Base Doxyfile (missing file counts as empty)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub doxyfile: Option<PathBuf>,

    /// Doxygen executable
    #[arg(long, value_name = "PATH")]
    pub doxygen: Option<PathBuf>,

    /// Extra exclusion regex (repeatable)
    #[arg(short, long = "exclude", value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Exit 0 when Doxygen cannot be started
    #[arg(long)]
    pub allow_missing_doxygen: bool,

    /// Settings file (default: .doxycheck.toml if present)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Output NDJSON events
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
