//! Warning log filtering
//!
//! Turns the raw lines of Doxygen's warning log into the warnings worth
//! reporting. Order is preserved from the log.

use crate::domain::value_objects::{ExclusionPatterns, InterestingFiles, WarningLine};

/// Filter for one run's warning log.
#[derive(Debug, Clone, Copy)]
pub struct LogFilter<'a> {
    exclusions: &'a ExclusionPatterns,
    interesting: Option<&'a InterestingFiles>,
}

impl<'a> LogFilter<'a> {
    /// Keep only warnings about `interesting` files, minus exclusions.
    pub fn for_files(exclusions: &'a ExclusionPatterns, interesting: &'a InterestingFiles) -> Self {
        Self {
            exclusions,
            interesting: Some(interesting),
        }
    }

    /// Keep every non-blank warning, minus exclusions.
    pub fn for_input(exclusions: &'a ExclusionPatterns) -> Self {
        Self {
            exclusions,
            interesting: None,
        }
    }

    /// Apply the filter to raw log lines.
    pub fn apply<I, S>(&self, lines: I) -> Vec<WarningLine>
    where
        I: IntoIterator<Item = S>,
        S: Into<WarningLine>,
    {
        lines
            .into_iter()
            .map(Into::into)
            .filter_map(|line| self.select(line))
            .filter(|line| !self.exclusions.is_excluded(line.as_str()))
            .collect()
    }

    fn select(&self, line: WarningLine) -> Option<WarningLine> {
        match self.interesting {
            Some(files) => files.contains(line.path()).then(|| line.trimmed()),
            None => {
                let line = WarningLine::new(line.as_str().trim_end_matches(['\n', '\r']));
                (!line.is_blank()).then_some(line)
            }
        }
    }
}
