//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON) and diagnostic logging
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `logging` - `tracing` subscriber setup
//! - `output` - Report rendering
//!
//! ## Usage
//!
//! ```ignore
//! use doxycheck::presentation::factory;
//!
//! let use_case = factory::create_check_use_case("doxygen");
//! let result = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::{Cli, ModeArg};
pub use factory::create_check_use_case;
pub use output::{create_renderer, render_error, OutputFormat};
