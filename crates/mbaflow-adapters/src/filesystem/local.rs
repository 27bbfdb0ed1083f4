//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use mbaflow_core::{application::ports::Filesystem, error::MbaflowResult};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }

    /// Immediate, non-hidden subdirectories of `base`, sorted by name.
    ///
    /// Unreadable entries are skipped. A missing `base` yields nothing.
    pub fn list_subdirectories(&self, base: &Path) -> Vec<PathBuf> {
        WalkDir::new(base)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, base = %base.display(), "Skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir())
            .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
            .map(|entry| {
                debug!(path = %entry.path().display(), "Found course folder");
                entry.into_path()
            })
            .collect()
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> MbaflowResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> MbaflowResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> mbaflow_core::error::MbaflowError {
    use mbaflow_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
