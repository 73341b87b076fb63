//! DocGenerator port - abstraction over the external documentation tool
//!
//! The application layer hands a finished configuration to a generator and
//! gets back an explicit outcome instead of an error to match on.

/// Result of one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// The tool started and exited. `code` is `None` when it was killed by a signal.
    Completed { code: Option<i32> },
    /// The tool could not be started or fed its configuration.
    SpawnFailed { message: String },
}

/// External documentation generator.
///
/// Implementations:
/// - `DoxygenProcess` - runs a `doxygen` executable
/// - test doubles that write a canned warning log
pub trait DocGenerator {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Run once with `config` as the complete configuration document.
    ///
    /// Blocks until the tool exits.
    fn generate(&self, config: &str) -> InvocationOutcome;
}

impl<T: DocGenerator + ?Sized> DocGenerator for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate(&self, config: &str) -> InvocationOutcome {
        (**self).generate(config)
    }
}
