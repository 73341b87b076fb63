//! Domain Policies
//!
//! Business rules that map run results to exit codes.

mod spawn_failure;

pub use spawn_failure::{SpawnFailurePolicy, EXIT_CLEAN, EXIT_USAGE, EXIT_WARNINGS};
