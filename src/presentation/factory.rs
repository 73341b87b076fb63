//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::CheckUseCase;
use crate::infrastructure::DoxygenProcess;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<DoxygenProcess>;

/// Create a check use case running the given Doxygen executable
pub fn create_check_use_case(program: impl Into<PathBuf>) -> ConcreteCheckUseCase {
    CheckUseCase::new(DoxygenProcess::new(program))
}
