//! Editor launcher that spawns an external process.

use std::path::Path;
use std::process::{Command, Stdio};

use mbaflow_core::{
    application::{ApplicationError, ports::EditorLauncher},
    error::MbaflowResult,
};
use tracing::{debug, instrument};

/// Editor binary used when nothing else is configured.
pub const DEFAULT_EDITOR: &str = "code";

/// Launches `<program> <path>` and waits for it to exit.
#[derive(Debug, Clone)]
pub struct ProcessEditor {
    program: String,
}

impl ProcessEditor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ProcessEditor {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR)
    }
}

impl EditorLauncher for ProcessEditor {
    #[instrument(skip(self), fields(program = %self.program))]
    fn open(&self, path: &Path) -> MbaflowResult<()> {
        let status = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ApplicationError::EditorLaunchFailed {
                command: self.program.clone(),
                reason: e.to_string(),
            })?;

        debug!(?status, "Editor process exited");

        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::EditorLaunchFailed {
                command: self.program.clone(),
                reason: format!("exited with {status}"),
            }
            .into())
        }
    }

    fn manual_command(&self, path: &Path) -> String {
        format!("{} '{}'", self.program, path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_program_is_code() {
        assert_eq!(ProcessEditor::default().program(), "code");
    }

    #[test]
    fn manual_command_quotes_path() {
        let editor = ProcessEditor::new("code");
        let cmd = editor.manual_command(Path::new("/tmp/My Course/assignment01-x"));
        assert_eq!(cmd, "code '/tmp/My Course/assignment01-x'");
    }

    #[test]
    fn missing_binary_is_launch_failure() {
        let editor = ProcessEditor::new("mbaflow-definitely-not-installed-editor");
        let err = editor.open(Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("mbaflow-definitely-not-installed-editor"));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_launch_failure() {
        let err = ProcessEditor::new("false").open(Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[cfg(unix)]
    #[test]
    fn successful_exit_is_ok() {
        assert!(ProcessEditor::new("true").open(Path::new(".")).is_ok());
    }
}
