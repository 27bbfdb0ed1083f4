//! Application layer for mbaflow.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (MaterializeService, open_project)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rules itself. Layout and rendering live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{EditorOutcome, MaterializeService, open_project};

// Re-export port traits (for adapter implementation)
pub use ports::{EditorLauncher, Filesystem};

pub use error::ApplicationError;
