//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::validate_override;
use crate::error::{DoxycheckError, DoxycheckResult};

use super::types::Config;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = ".doxycheck.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DoxycheckResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> DoxycheckResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DoxycheckError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for (key, value) in &config.overrides {
        validate_override(key, value).map_err(|e| DoxycheckError::InvalidSettings {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit settings file, or the default one in `root`, or defaults.
///
/// An explicit path must exist; the default file is optional.
pub fn load_or_default(
    root: &Path,
    explicit: Option<&Path>,
) -> DoxycheckResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        tracing::info!(settings = %path.display(), "loading settings");
        return load_with_warnings(path);
    }

    let default_path = root.join(SETTINGS_FILE);
    if default_path.is_file() {
        tracing::info!(settings = %default_path.display(), "loading settings");
        return load_with_warnings(&default_path);
    }

    tracing::debug!("no settings file, using defaults");
    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (DOXYCHECK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // DOXYCHECK_DOXYGEN
    if let Some(program) = lookup("DOXYCHECK_DOXYGEN").filter(|s| !s.is_empty()) {
        config.generator.program = PathBuf::from(program);
    }

    // DOXYCHECK_DOXYFILE
    if let Some(doxyfile) = lookup("DOXYCHECK_DOXYFILE").filter(|s| !s.is_empty()) {
        config.generator.doxyfile = PathBuf::from(doxyfile);
    }

    // DOXYCHECK_ALLOW_MISSING_DOXYGEN
    if let Some(allow) = lookup("DOXYCHECK_ALLOW_MISSING_DOXYGEN") {
        config.generator.allow_missing =
            matches!(allow.to_lowercase().as_str(), "1" | "true" | "yes");
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generator",
        "program",
        "doxyfile",
        "allow_missing",
        "filter",
        "exclude",
        "overrides",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(crate) fn parse_for_test(content: &str) -> DoxycheckResult<(Config, Vec<ConfigWarning>)> {
    parse_with_warnings(content, Path::new(SETTINGS_FILE))
}
