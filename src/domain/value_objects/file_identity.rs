//! File identity value object
//!
//! Two paths name the same file when they resolve to the same underlying
//! inode, regardless of symlinks or relative/absolute spelling.

use std::io;
use std::path::Path;

use crate::error::{DoxycheckError, DoxycheckResult};

/// Identity of an existing file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileIdentity(Inner);

#[cfg(unix)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Inner {
    dev: u64,
    ino: u64,
}

#[cfg(not(unix))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Inner {
    canonical: std::path::PathBuf,
}

impl FileIdentity {
    /// Resolve the identity of `path`, following symlinks.
    #[cfg(unix)]
    pub fn of(path: &Path) -> io::Result<Self> {
        use std::os::unix::fs::MetadataExt;

        let meta = std::fs::metadata(path)?;
        Ok(Self(Inner {
            dev: meta.dev(),
            ino: meta.ino(),
        }))
    }

    /// Resolve the identity of `path`, following symlinks.
    #[cfg(not(unix))]
    pub fn of(path: &Path) -> io::Result<Self> {
        let canonical = std::fs::canonicalize(path)?;
        Ok(Self(Inner { canonical }))
    }
}

/// The caller's interesting files, resolved once up front.
#[derive(Debug, Clone, Default)]
pub struct InterestingFiles {
    identities: Vec<FileIdentity>,
}

impl InterestingFiles {
    /// Resolve every path; a missing file is an error.
    pub fn resolve<P: AsRef<Path>>(paths: &[P]) -> DoxycheckResult<Self> {
        let mut resolved = Self::default();
        for path in paths {
            let path = path.as_ref();
            let identity = FileIdentity::of(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => DoxycheckError::FileNotFound {
                    path: path.to_path_buf(),
                },
                _ => DoxycheckError::Io(e),
            })?;
            resolved.identities.push(identity);
        }
        Ok(resolved)
    }

    /// True if `path` exists and is one of the interesting files.
    pub fn contains(&self, path: &Path) -> bool {
        match FileIdentity::of(path) {
            Ok(identity) => self.identities.contains(&identity),
            Err(_) => false,
        }
    }
}
