//! Exclusion patterns value object
//!
//! Regular expressions matching Doxygen messages that are known noise.
//! A warning matched by any pattern is never reported.

use regex::Regex;

use crate::error::{DoxycheckError, DoxycheckResult};

/// Patterns suppressed on every run.
///
/// Doxygen reports these for symbols documented in headers whose definition
/// lives behind a macro or in a file outside `INPUT`.
pub const BUILTIN_PATTERNS: &[&str] = &["documented symbol '.*' was not declared or defined"];

/// Compiled exclusion filter set.
#[derive(Debug, Clone)]
pub struct ExclusionPatterns {
    patterns: Vec<Regex>,
}

impl Default for ExclusionPatterns {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExclusionPatterns {
    /// A set that matches nothing.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// The built-in false positive patterns.
    pub fn builtin() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect();
        Self { patterns }
    }

    /// Built-in patterns followed by `extra`.
    ///
    /// Fails on the first pattern that does not compile.
    pub fn with_extra<S: AsRef<str>>(extra: &[S]) -> DoxycheckResult<Self> {
        let mut set = Self::builtin();
        for pattern in extra {
            set.push(pattern.as_ref())?;
        }
        Ok(set)
    }

    /// Compile and append one pattern.
    pub fn push(&mut self, pattern: &str) -> DoxycheckResult<()> {
        let regex = Regex::new(pattern).map_err(|e| DoxycheckError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.patterns.push(regex);
        Ok(())
    }

    /// True if any pattern matches somewhere in `message`.
    pub fn is_excluded(&self, message: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(message))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
