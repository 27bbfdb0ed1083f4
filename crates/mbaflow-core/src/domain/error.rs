// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid project configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unknown framework: {0}")]
    UnknownFramework(String),

    // ========================================================================
    // Structure Errors
    // ========================================================================
    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("The {field} is required"),
                "Run the command again and provide a value when prompted".into(),
            ],
            Self::InvalidConfiguration(msg) => vec![
                "Check the answers you gave at the prompts".into(),
                format!("Details: {msg}"),
            ],
            Self::UnknownFramework(name) => vec![
                format!("'{name}' is not one of the supported frameworks"),
                "List them with: mbaflow frameworks".into(),
            ],
            Self::EmptyStructure | Self::DuplicatePath { .. } => vec![
                "The generated layout is inconsistent".into(),
                "Please report this issue".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Layout entries must be relative, got: {path}"),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. }
            | Self::InvalidConfiguration(_)
            | Self::UnknownFramework(_) => ErrorCategory::Validation,
            Self::EmptyStructure | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
