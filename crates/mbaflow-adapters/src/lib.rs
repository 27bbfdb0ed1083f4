//! Infrastructure adapters for mbaflow.
//!
//! This crate implements the ports defined in `mbaflow-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod editor;
pub mod filesystem;

// Re-export commonly used adapters
pub use editor::ProcessEditor;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
