//! Check Use Case
//!
//! Orchestrates one warning check.
//!
//! This module handles:
//! - Composing the Doxyfile with the run's overrides
//! - Running the generator inside a scoped temporary directory
//! - Filtering the warning log down to the caller's files

mod options;
mod result;
mod use_case;

pub use options::CheckOptions;
pub use result::{CheckOutcome, CheckResult};
pub use use_case::{CheckUseCase, WARN_LOG_NAME};
