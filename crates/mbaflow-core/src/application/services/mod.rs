//! Application services (use cases).

pub mod editor_service;
pub mod materialize_service;

pub use editor_service::{EditorOutcome, open_project};
pub use materialize_service::MaterializeService;
