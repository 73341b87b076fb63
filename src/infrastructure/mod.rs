//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.

pub mod doxygen;

pub use doxygen::{DoxygenProcess, DEFAULT_DOXYGEN};
