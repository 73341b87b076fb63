//! Domain Layer
//!
//! Warning-log semantics without process or terminal concerns.
//!
//! ## Structure
//!
//! - `value_objects/` - Overrides, exclusion patterns, file identity, warning lines
//! - `services/` - Doxyfile composition and log filtering
//! - `policies/` - Exit code rules
//! - `ports/` - Interface to the external generator

pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
