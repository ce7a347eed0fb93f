//! Working directory resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Directory anchoring every git call of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDirectory(PathBuf);

impl WorkingDirectory {
    /// Resolve `path` to an existing directory.
    ///
    /// Returns `None` when the path does not exist or is not a directory.
    pub fn resolve(path: &Path) -> Option<Self> {
        let resolved = match path.canonicalize() {
            Ok(p) => p,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Workspace path not found");
                return None;
            }
        };

        if !resolved.is_dir() {
            debug!(path = %resolved.display(), "Workspace path is not a directory");
            return None;
        }

        Some(Self(resolved))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for WorkingDirectory {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
