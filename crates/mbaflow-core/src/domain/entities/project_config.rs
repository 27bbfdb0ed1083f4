//! The configuration record collected from the user.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{Framework, join_frameworks},
};

pub const DEFAULT_ASSIGNMENT_NUMBER: &str = "01";
pub const DEFAULT_DUE_DATE: &str = "[Add due date]";
pub const DEFAULT_PAGE_COUNT: &str = "[Add page count]";
pub const DEFAULT_MIN_SOURCES: &str = "10";
pub const DEFAULT_ASSIGNMENT_TYPE: &str = "Strategic Analysis";

/// Target folder value meaning "the current working directory".
pub const CURRENT_DIR_SENTINEL: &str = ".";

/// Everything needed to materialise one assignment project.
///
/// Immutable once built. Construct with [`ProjectConfiguration::builder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfiguration {
    assignment_number: String,
    assignment_name: String,
    due_date: String,
    page_count: String,
    min_sources: String,
    assignment_type: String,
    frameworks: Vec<Framework>,
    target_folder: PathBuf,
    charts_required: bool,
    tables_required: bool,
}

impl ProjectConfiguration {
    pub fn builder() -> ProjectConfigurationBuilder {
        ProjectConfigurationBuilder::default()
    }

    pub fn assignment_number(&self) -> &str {
        &self.assignment_number
    }

    pub fn assignment_name(&self) -> &str {
        &self.assignment_name
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn page_count(&self) -> &str {
        &self.page_count
    }

    pub fn min_sources(&self) -> &str {
        &self.min_sources
    }

    pub fn assignment_type(&self) -> &str {
        &self.assignment_type
    }

    /// Never empty.
    pub fn frameworks(&self) -> &[Framework] {
        &self.frameworks
    }

    /// Frameworks joined with `", "`, as every document shows them.
    pub fn frameworks_text(&self) -> String {
        join_frameworks(&self.frameworks)
    }

    pub fn target_folder(&self) -> &Path {
        &self.target_folder
    }

    pub fn charts_required(&self) -> bool {
        self.charts_required
    }

    pub fn tables_required(&self) -> bool {
        self.tables_required
    }

    /// Whether any visual material (charts or tables) is expected.
    pub fn needs_visuals(&self) -> bool {
        self.charts_required || self.tables_required
    }

    /// Folder name of the per-assignment project root.
    pub fn project_dir_name(&self) -> String {
        format!("assignment{}-{}", self.assignment_number, self.assignment_name)
    }

    /// Base directory the container folder is created in.
    ///
    /// The `"."` sentinel resolves to `cwd`.
    pub fn base_dir(&self, cwd: &Path) -> PathBuf {
        if self.target_folder.as_os_str() == CURRENT_DIR_SENTINEL {
            cwd.to_path_buf()
        } else {
            self.target_folder.clone()
        }
    }
}

/// Builder for [`ProjectConfiguration`].
///
/// Blank scalar fields fall back to the documented defaults at `build()`;
/// the assignment name has no fallback.
#[derive(Debug, Default)]
pub struct ProjectConfigurationBuilder {
    assignment_number: Option<String>,
    assignment_name: Option<String>,
    due_date: Option<String>,
    page_count: Option<String>,
    min_sources: Option<String>,
    assignment_type: Option<String>,
    frameworks: Vec<Framework>,
    target_folder: Option<PathBuf>,
    charts_required: bool,
    tables_required: bool,
}

impl ProjectConfigurationBuilder {
    pub fn assignment_number(mut self, value: impl Into<String>) -> Self {
        self.assignment_number = Some(value.into());
        self
    }

    pub fn assignment_name(mut self, value: impl Into<String>) -> Self {
        self.assignment_name = Some(value.into());
        self
    }

    pub fn due_date(mut self, value: impl Into<String>) -> Self {
        self.due_date = Some(value.into());
        self
    }

    pub fn page_count(mut self, value: impl Into<String>) -> Self {
        self.page_count = Some(value.into());
        self
    }

    pub fn min_sources(mut self, value: impl Into<String>) -> Self {
        self.min_sources = Some(value.into());
        self
    }

    pub fn assignment_type(mut self, value: impl Into<String>) -> Self {
        self.assignment_type = Some(value.into());
        self
    }

    pub fn frameworks(mut self, frameworks: impl IntoIterator<Item = Framework>) -> Self {
        self.frameworks = frameworks.into_iter().collect();
        self
    }

    pub fn target_folder(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_folder = Some(path.into());
        self
    }

    pub fn charts_required(mut self, required: bool) -> Self {
        self.charts_required = required;
        self
    }

    pub fn tables_required(mut self, required: bool) -> Self {
        self.tables_required = required;
        self
    }

    pub fn build(self) -> Result<ProjectConfiguration, DomainError> {
        let assignment_name = self
            .assignment_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(DomainError::MissingRequiredField {
                field: "assignment name",
            })?;

        let frameworks = if self.frameworks.is_empty() {
            Framework::DEFAULT_SELECTION.to_vec()
        } else {
            self.frameworks
        };

        let target_folder = self
            .target_folder
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(CURRENT_DIR_SENTINEL));

        Ok(ProjectConfiguration {
            assignment_number: fallback(self.assignment_number, DEFAULT_ASSIGNMENT_NUMBER),
            assignment_name,
            due_date: fallback(self.due_date, DEFAULT_DUE_DATE),
            page_count: fallback(self.page_count, DEFAULT_PAGE_COUNT),
            min_sources: fallback(self.min_sources, DEFAULT_MIN_SOURCES),
            assignment_type: fallback(self.assignment_type, DEFAULT_ASSIGNMENT_TYPE),
            frameworks,
            target_folder,
            charts_required: self.charts_required,
            tables_required: self.tables_required,
        })
    }
}

fn fallback(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_is_rejected() {
        let err = ProjectConfiguration::builder().build().unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingRequiredField {
                field: "assignment name"
            }
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(
            ProjectConfiguration::builder()
                .assignment_name("   ")
                .build()
                .is_err()
        );
    }

    #[test]
    fn blank_fields_take_fallbacks() {
        let cfg = ProjectConfiguration::builder()
            .assignment_name("Tesla")
            .assignment_number("")
            .due_date("  ")
            .build()
            .unwrap();

        assert_eq!(cfg.assignment_number(), "01");
        assert_eq!(cfg.due_date(), "[Add due date]");
        assert_eq!(cfg.page_count(), "[Add page count]");
        assert_eq!(cfg.min_sources(), "10");
        assert_eq!(cfg.assignment_type(), "Strategic Analysis");
        assert_eq!(cfg.frameworks(), &Framework::DEFAULT_SELECTION);
        assert_eq!(cfg.target_folder(), Path::new("."));
        assert!(!cfg.needs_visuals());
    }

    #[test]
    fn project_dir_name_concatenates_number_and_name() {
        let cfg = ProjectConfiguration::builder()
            .assignment_number("03")
            .assignment_name("Market Entry")
            .build()
            .unwrap();
        assert_eq!(cfg.project_dir_name(), "assignment03-Market Entry");
    }

    #[test]
    fn sentinel_resolves_to_cwd() {
        let cfg = ProjectConfiguration::builder()
            .assignment_name("x")
            .target_folder(".")
            .build()
            .unwrap();
        assert_eq!(cfg.base_dir(Path::new("/work")), PathBuf::from("/work"));
    }

    #[test]
    fn explicit_folder_is_kept() {
        let cfg = ProjectConfiguration::builder()
            .assignment_name("x")
            .target_folder("/courses/strategy")
            .build()
            .unwrap();
        assert_eq!(
            cfg.base_dir(Path::new("/work")),
            PathBuf::from("/courses/strategy")
        );
    }

    #[test]
    fn either_visual_flag_needs_visuals() {
        let charts = ProjectConfiguration::builder()
            .assignment_name("x")
            .charts_required(true)
            .build()
            .unwrap();
        let tables = ProjectConfiguration::builder()
            .assignment_name("x")
            .tables_required(true)
            .build()
            .unwrap();
        assert!(charts.needs_visuals());
        assert!(tables.needs_visuals());
    }
}
