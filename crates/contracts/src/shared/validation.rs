//! Required-field validation for form DTOs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field-level validation failure, surfaced inline on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Push an error when a required text field is absent or blank.
pub fn require(errors: &mut Vec<ValidationError>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, message));
    }
}

/// Same as [`require`] for optional fields coming from form inputs.
pub fn require_opt(
    errors: &mut Vec<ValidationError>,
    field: &str,
    value: Option<&str>,
    message: &str,
) {
    require(errors, field, value.unwrap_or(""), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_flags_blank_values() {
        let mut errors = Vec::new();
        require(&mut errors, "nome", "  ", "Nome é obrigatório");
        require(&mut errors, "tipo", "estrutural", "Tipo é obrigatório");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "nome");
        assert_eq!(errors[0].message, "Nome é obrigatório");
    }

    #[test]
    fn test_require_opt_treats_none_as_blank() {
        let mut errors = Vec::new();
        require_opt(&mut errors, "cimento", None, "Quantidade de cimento é obrigatória");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cimento");
    }
}
