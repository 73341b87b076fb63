//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod doc_generator;

pub use doc_generator::{DocGenerator, InvocationOutcome};
