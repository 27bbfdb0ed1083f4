use crate::domain::{
    entities::{ProjectConfiguration, ProjectStructure},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_configuration(config: &ProjectConfiguration) -> Result<(), DomainError> {
        if config.assignment_name().trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "assignment name",
            });
        }
        if config.frameworks().is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "at least one framework must be selected".into(),
            ));
        }
        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
