// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for mbaflow.
//!
//! This module contains pure logic with no I/O. Filesystem and process
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: `ProjectConfiguration` is built once, read many
//! - **Pure renderers**: documents are functions of the configuration
//!
// Public API - what the world sees
pub mod documents;
pub mod entities;
pub mod error;
pub mod layout;
pub mod selection;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    project_config::{ProjectConfiguration, ProjectConfigurationBuilder},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
};

pub use error::{DomainError, ErrorCategory};

pub use selection::{MenuChoice, parse_flag, parse_framework_selection, parse_menu_choice};

pub use value_objects::{Framework, join_frameworks};

pub use validation::DomainValidator;
