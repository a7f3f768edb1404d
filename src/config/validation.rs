//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Function names present and unique
//! - Alias and CORS entries not blank
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Route bindings are left to the compiler, which fails fast on the first bad one

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{CorsSetting, OneOrMany, ServiceConfig};

/// A semantic problem in a service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("function #{index} has an empty name")]
    EmptyFunctionName { index: usize },

    #[error("function {name} is declared more than once")]
    DuplicateFunction { name: String },

    #[error("function {function} has a target alias with an empty name")]
    EmptyAliasName { function: String },

    #[error("CORS field {field} contains an empty value")]
    EmptyCorsValue { field: &'static str },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, function) in config.functions.iter().enumerate() {
        if function.name.trim().is_empty() {
            errors.push(ValidationError::EmptyFunctionName { index });
        } else if !seen.insert(function.name.as_str()) {
            errors.push(ValidationError::DuplicateFunction {
                name: function.name.clone(),
            });
        }

        if let Some(alias) = &function.target_alias {
            if alias.name.trim().is_empty() {
                errors.push(ValidationError::EmptyAliasName {
                    function: function.name.clone(),
                });
            }
        }
    }

    if let Some(CorsSetting::Custom(cors)) = config.cors() {
        let fields = [
            ("allowed_origins", &cors.allowed_origins),
            ("allowed_headers", &cors.allowed_headers),
            ("allowed_methods", &cors.allowed_methods),
            ("exposed_response_headers", &cors.exposed_response_headers),
        ];
        for (field, value) in fields {
            if value.as_ref().is_some_and(has_blank) {
                errors.push(ValidationError::EmptyCorsValue { field });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn has_blank(values: &OneOrMany) -> bool {
    values.as_slice().iter().any(|v| v.trim().is_empty())
}
