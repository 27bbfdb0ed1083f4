//! Opening a finished project in an external editor.
//!
//! Editor failures are never fatal: they degrade to an [`EditorOutcome::Failed`]
//! carrying the command the user can run by hand.

use std::path::Path;

use tracing::{info, warn};

use crate::application::ports::EditorLauncher;

/// Result of trying to open the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    Opened,
    Failed {
        reason: String,
        manual_command: String,
    },
}

/// Try to open `root`; report instead of propagating any failure.
pub fn open_project(launcher: &dyn EditorLauncher, root: &Path) -> EditorOutcome {
    match launcher.open(root) {
        Ok(()) => {
            info!(path = %root.display(), "Project opened in editor");
            EditorOutcome::Opened
        }
        Err(e) => {
            warn!(error = %e, "Editor launch failed");
            EditorOutcome::Failed {
                reason: e.to_string(),
                manual_command: launcher.manual_command(root),
            }
        }
    }
}
