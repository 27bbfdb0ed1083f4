//! Materialize Service - main application orchestrator.
//!
//! This service coordinates the project-creation workflow:
//! 1. Validate the configuration
//! 2. Plan the layout and render both documents
//! 3. Write to filesystem
//!
//! Directory creation is exist-ok so the same configuration can be
//! materialized again to regenerate the documents. Nothing is rolled back
//! on failure.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainValidator as validator, FsEntry, ProjectConfiguration, ProjectStructure, layout},
    error::{MbaflowError, MbaflowResult},
};

/// Main materialization service.
pub struct MaterializeService {
    filesystem: Box<dyn Filesystem>,
}

impl MaterializeService {
    /// Create a new service writing through `filesystem`.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Plan the project without touching the filesystem.
    ///
    /// `cwd` resolves the `"."` target-folder sentinel.
    pub fn plan(
        &self,
        config: &ProjectConfiguration,
        cwd: &Path,
    ) -> MbaflowResult<ProjectStructure> {
        validator::validate_configuration(config).map_err(MbaflowError::Domain)?;

        let structure = layout::plan_project(config, cwd)?;
        validator::validate_project_structure(&structure).map_err(MbaflowError::Domain)?;

        Ok(structure)
    }

    /// Create the project folders and write both documents.
    ///
    /// Returns the project root.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_dir_name(),
            cwd = %cwd.display()
        )
    )]
    pub fn materialize(
        &self,
        config: &ProjectConfiguration,
        cwd: &Path,
    ) -> MbaflowResult<PathBuf> {
        let structure = self.plan(config, cwd)?;

        let base = config.base_dir(cwd);
        if !self.filesystem.is_dir(&base) {
            return Err(ApplicationError::TargetFolderMissing { path: base }.into());
        }

        info!(
            root = %structure.root().display(),
            entries = structure.entry_count(),
            "Materializing project"
        );

        self.write_all(&structure)?;

        info!("Project materialized");
        Ok(structure.root().to_path_buf())
    }

    /// Write all entries in the structure.
    fn write_all(&self, structure: &ProjectStructure) -> MbaflowResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            let path = root.join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    debug!(path = %path.display(), "create dir");
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    if let Some(parent) = file.path.parent() {
                        self.filesystem.create_dir_all(&root.join(parent))?;
                    }
                    debug!(path = %path.display(), bytes = file.size(), "write file");
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }
}
