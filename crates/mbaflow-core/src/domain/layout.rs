//! Fixed on-disk layout of an assignment project.

use std::path::{Path, PathBuf};

use crate::domain::{
    documents::{render_agent_workflow, render_instructions},
    entities::{ProjectConfiguration, ProjectStructure, common::RelativePath},
    error::DomainError,
};

/// Folder under the target directory that groups every assignment project.
pub const CONTAINER_DIR: &str = "MBA Assignment Workflow System";

/// Created for every project, in this order.
pub const MANDATORY_FOLDERS: [&str; 8] = [
    "01-planning",
    "02-sources/academic/files",
    "02-sources/academic/analysis",
    "02-sources/industry/files",
    "02-sources/industry/analysis",
    "03-frameworks/individual",
    "04-writing",
    "05-final",
];

/// Created only when charts or tables are required.
pub const VISUALS_FOLDER: &str = "04-writing/visuals";

pub const INSTRUCTIONS_FILE: &str = "01-planning/instructions.md";
pub const WORKFLOW_FILE: &str = "01-planning/CLAUDE.md";

/// `<base>/<container>/assignment<number>-<name>`.
pub fn project_root(config: &ProjectConfiguration, cwd: &Path) -> PathBuf {
    config
        .base_dir(cwd)
        .join(CONTAINER_DIR)
        .join(config.project_dir_name())
}

/// Relative folders to create for `config`.
pub fn folders(config: &ProjectConfiguration) -> Vec<&'static str> {
    let mut folders = MANDATORY_FOLDERS.to_vec();
    if config.needs_visuals() {
        folders.push(VISUALS_FOLDER);
    }
    folders
}

/// Plan the full project: folders first, then the two rendered documents.
pub fn plan_project(
    config: &ProjectConfiguration,
    cwd: &Path,
) -> Result<ProjectStructure, DomainError> {
    let mut structure = ProjectStructure::new(project_root(config, cwd));

    for folder in folders(config) {
        structure.add_directory(RelativePath::try_new(folder)?);
    }

    structure.add_file(
        RelativePath::try_new(INSTRUCTIONS_FILE)?,
        render_instructions(config),
    );
    structure.add_file(
        RelativePath::try_new(WORKFLOW_FILE)?,
        render_agent_workflow(config),
    );

    Ok(structure)
}
