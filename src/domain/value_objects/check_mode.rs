//! Check mode value object

use serde::{Deserialize, Serialize};

/// How Doxygen is pointed at the files being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Run over the whole project and keep warnings whose path is one of the
    /// given files.
    #[default]
    Project,
    /// Restrict Doxygen to a single file with `INPUT` and report everything.
    Input,
}

impl CheckMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckMode::Project => "project",
            CheckMode::Input => "input",
        }
    }
}

impl std::fmt::Display for CheckMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
