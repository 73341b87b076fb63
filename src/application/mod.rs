//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Compose config, run the generator, filter its warning log

pub mod check;

pub use check::{CheckOptions, CheckOutcome, CheckResult, CheckUseCase};
