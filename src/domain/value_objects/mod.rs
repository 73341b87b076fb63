//! Domain Value Objects
//!
//! Immutable types with no identity beyond their value.

mod check_mode;
mod exclusion_patterns;
mod file_identity;
mod overrides;
mod warning_line;

pub use check_mode::CheckMode;
pub use exclusion_patterns::{ExclusionPatterns, BUILTIN_PATTERNS};
pub use file_identity::{FileIdentity, InterestingFiles};
pub use overrides::{validate_override, Overrides, INPUT, WARN_LOGFILE};
pub use warning_line::WarningLine;
