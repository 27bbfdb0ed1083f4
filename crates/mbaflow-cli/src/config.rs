//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`.env` is loaded into the environment first)
//! 3. Settings file (`--config`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Environment variables that override the settings file.
pub const ENV_OVERRIDES: [(&str, &str); 4] = [
    ("MBA_COURSES_DIR", "workspace.courses_dir"),
    ("UNIVERSITY_NAME", "workspace.university_name"),
    ("DEFAULT_WORK_DIR", "workspace.default_work_dir"),
    ("MBAFLOW_EDITOR", "editor.command"),
];

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where courses live and how the university is named.
    pub workspace: WorkspaceConfig,
    /// Editor launched after creation.
    pub editor: EditorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses_dir: Option<PathBuf>,
    pub university_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_work_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub command: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            courses_dir: None,
            university_name: "University".into(),
            default_work_dir: None,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: mbaflow_adapters::editor::DEFAULT_EDITOR.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the settings file and the process
    /// environment.
    ///
    /// An explicit `--config` file must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::from_sources(&path, required, |key| std::env::var(key).ok())
    }

    /// Build from an explicit file and an environment lookup.
    pub fn from_sources(
        path: &Path,
        required: bool,
        env: impl Fn(&str) -> Option<String>,
    ) -> CliResult<Self> {
        debug!(path = %path.display(), required, "Loading settings");

        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default(
                "workspace.university_name",
                defaults.workspace.university_name,
            )?
            .set_default("editor.command", defaults.editor.command)?
            .set_default("output.no_color", defaults.output.no_color)?
            .add_source(File::from(path).format(FileFormat::Toml).required(required));

        for (var, key) in ENV_OVERRIDES {
            let value = env(var).filter(|v| !v.trim().is_empty());
            if value.is_some() {
                debug!(var, key, "Environment override");
            }
            builder = builder.set_override_option(key, value)?;
        }

        builder
            .build()?
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: format!("Invalid settings in {}: {e}", path.display()),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mbaflow.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mbaflow", "mbaflow")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".mbaflow.toml"))
    }
}
