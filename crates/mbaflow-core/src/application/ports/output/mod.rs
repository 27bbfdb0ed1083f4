//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mbaflow-adapters` crate provides implementations.

use std::path::Path;

use crate::error::MbaflowResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mbaflow_adapters::filesystem::LocalFilesystem` (production)
/// - `mbaflow_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `create_dir_all` must succeed when the directory already exists.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> MbaflowResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> MbaflowResult<()>;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for opening a project in an external editor.
///
/// Implemented by:
/// - `mbaflow_adapters::editor::ProcessEditor`
#[cfg_attr(test, mockall::automock)]
pub trait EditorLauncher: Send + Sync {
    /// Open `path`. Blocks until the launcher process exits.
    fn open(&self, path: &Path) -> MbaflowResult<()>;

    /// Shell command a user can run by hand to do the same thing.
    fn manual_command(&self, path: &Path) -> String;
}
