//! Domain Services
//!
//! Stateless operations over domain value objects.

pub mod doxyfile_builder;
pub mod log_filter;

pub use doxyfile_builder::{build_doxygen_config, compose_config};
pub use log_filter::LogFilter;
