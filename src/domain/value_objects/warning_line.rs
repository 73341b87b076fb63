//! A single line from the Doxygen warning log.

use std::fmt;
use std::path::Path;

/// One diagnostic line, usually `<path>:<line>: warning: <message>`.
///
/// The text is kept opaque; only the path prefix is ever interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningLine(String);

impl WarningLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Everything before the first `:`, or the whole line if there is none.
    pub fn path_prefix(&self) -> &str {
        match self.0.split_once(':') {
            Some((prefix, _)) => prefix,
            None => &self.0,
        }
    }

    pub fn path(&self) -> &Path {
        Path::new(self.path_prefix())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The same line without surrounding whitespace.
    pub fn trimmed(&self) -> Self {
        Self(self.0.trim().to_string())
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for WarningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WarningLine {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WarningLine {
    fn from(s: String) -> Self {
        Self(s)
    }
}
