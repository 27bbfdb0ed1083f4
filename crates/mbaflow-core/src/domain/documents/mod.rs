//! Pure renderers for the two generated documents.
//!
//! Each renderer is a function of a [`ProjectConfiguration`] only; nothing
//! here touches the filesystem.
//!
//! [`ProjectConfiguration`]: crate::domain::ProjectConfiguration

pub mod instructions;
pub mod list;
pub mod workflow;

pub use instructions::render_instructions;
pub use list::{BulletList, NumberedList};
pub use workflow::{FrameworkLine, Stage, render_agent_workflow};
