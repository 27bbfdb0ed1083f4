//! mbaflow Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the mbaflow
//! assignment scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mbaflow-cli (CLI)             │
//! │   (Prompts, settings, output)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (MaterializeService, open_project)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, EditorLauncher)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      mbaflow-adapters (Infrastructure)  │
//! │  (LocalFilesystem, ProcessEditor, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ProjectConfiguration, layout, docs)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mbaflow_core::prelude::*;
//!
//! let config = ProjectConfiguration::builder()
//!     .assignment_name("Tesla Expansion")
//!     .frameworks(parse_framework_selection("1,2"))
//!     .build()?;
//!
//! let service = MaterializeService::new(filesystem);
//! let root = service.materialize(&config, &std::env::current_dir()?)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EditorOutcome, MaterializeService, open_project,
        ports::{EditorLauncher, Filesystem},
    };
    pub use crate::domain::{
        Framework, MenuChoice, ProjectConfiguration, ProjectStructure, parse_flag,
        parse_framework_selection, parse_menu_choice,
    };
    pub use crate::error::{MbaflowError, MbaflowResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
