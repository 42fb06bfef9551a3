use crate::domain::{config::ScaffoldConfig, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &ScaffoldConfig) -> Result<(), DomainError> {
        config.validate()
    }
}
