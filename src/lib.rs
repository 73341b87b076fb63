//! doxycheck - Doxygen warning checker
//!
//! Runs Doxygen with a private warning log, drops known false positives and
//! reports what is left for the files the caller asked about.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckOptions, CheckOutcome, CheckResult, CheckUseCase};
pub use config::Config;
pub use domain::policies::SpawnFailurePolicy;
pub use domain::services::{build_doxygen_config, LogFilter};
pub use domain::value_objects::{CheckMode, ExclusionPatterns, Overrides, WarningLine};
pub use error::{DoxycheckError, DoxycheckResult};
pub use infrastructure::DoxygenProcess;
