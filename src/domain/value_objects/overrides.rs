//! Doxyfile overrides value object
//!
//! An ordered list of `KEY=VALUE` settings appended after the user's Doxyfile.
//! Doxygen lets the last assignment of a key win, so these always take
//! precedence over whatever the user file says.

use std::fmt;
use std::path::Path;

use crate::error::{DoxycheckError, DoxycheckResult};

/// Key Doxygen writes its warnings to.
pub const WARN_LOGFILE: &str = "WARN_LOGFILE";
/// Key restricting Doxygen to a set of input files.
pub const INPUT: &str = "INPUT";

/// Output generators disabled on every run.
const DISABLED_OUTPUTS: [&str; 3] = ["GENERATE_HTML", "GENERATE_XML", "GENERATE_LATEX"];

/// Check that `key` and `value` form exactly one Doxyfile assignment.
///
/// Keys are upper-case identifiers; values stay on one line.
pub fn validate_override(key: &str, value: &str) -> DoxycheckResult<()> {
    let mut chars = key.chars();
    let key_ok = matches!(chars.next(), Some(c) if c.is_ascii_uppercase() || c == '_')
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    if !key_ok {
        return Err(DoxycheckError::InvalidOverride {
            key: key.to_string(),
            message: "keys use only A-Z, 0-9 and '_' and do not start with a digit".to_string(),
        });
    }
    if value.contains(['\n', '\r']) {
        return Err(DoxycheckError::InvalidOverride {
            key: key.to_string(),
            message: "value must not contain a line break".to_string(),
        });
    }
    Ok(())
}

/// Ordered Doxyfile overrides.
///
/// Insertion order is preserved. Setting a key that is already present
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: Vec<(String, String)>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed overrides of a check run: warning log plus disabled outputs.
    pub fn for_warning_log(log_path: &Path) -> Self {
        let mut overrides = Self::new();
        overrides.set(WARN_LOGFILE, log_path.display().to_string());
        for key in DISABLED_OUTPUTS {
            overrides.set(key, "NO");
        }
        overrides
    }

    /// Set `key` to `value`, keeping the original position of an existing key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set `key` only if it is not present yet.
    ///
    /// Returns `false` when the key was already taken.
    pub fn set_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.get(&key).is_some() {
            return false;
        }
        self.entries.push((key, value.into()));
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Overrides {
    /// `KEY=VALUE` lines joined by `\n`, with no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (key, value) in iter {
            overrides.set(key, value);
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_warning_log_sets_fixed_keys_in_order() {
        let overrides = Overrides::for_warning_log(Path::new("/tmp/x/warn_log.txt"));
        let keys: Vec<_> = overrides.keys().collect();
        assert_eq!(
            keys,
            vec![
                "WARN_LOGFILE",
                "GENERATE_HTML",
                "GENERATE_XML",
                "GENERATE_LATEX"
            ]
        );
        assert_eq!(overrides.get(WARN_LOGFILE), Some("/tmp/x/warn_log.txt"));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut overrides: Overrides = [("A", "1"), ("B", "2")].into_iter().collect();
        overrides.set("A", "3");
        assert_eq!(overrides.to_string(), "A=3\nB=2");
    }

    #[test]
    fn set_if_absent_keeps_existing_value() {
        let mut overrides = Overrides::for_warning_log(Path::new("log.txt"));
        assert!(!overrides.set_if_absent("GENERATE_HTML", "YES"));
        assert!(overrides.set_if_absent("QUIET", "YES"));
        assert_eq!(overrides.get("GENERATE_HTML"), Some("NO"));
        assert_eq!(overrides.get("QUIET"), Some("YES"));
    }

    #[test]
    fn validate_override_accepts_doxyfile_keys() {
        assert!(validate_override("EXTRACT_ALL", "YES").is_ok());
        assert!(validate_override("_X1", "a b c").is_ok());
    }

    #[test]
    fn validate_override_rejects_spaced_or_lowercase_keys() {
        for key in ["WARN_LOGFILE ", " INPUT", "quiet", "1ABC", "", "A=B"] {
            let err = validate_override(key, "YES").unwrap_err();
            assert!(
                matches!(err, DoxycheckError::InvalidOverride { .. }),
                "{key:?}"
            );
        }
    }

    #[test]
    fn validate_override_rejects_multiline_values() {
        assert!(validate_override("QUIET", "YES\nGENERATE_HTML=YES").is_err());
        assert!(validate_override("QUIET", "YES\rGENERATE_HTML=YES").is_err());
    }

    #[test]
    fn display_empty_is_empty_string() {
        assert_eq!(Overrides::new().to_string(), "");
    }
}
