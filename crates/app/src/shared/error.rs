use contracts::shared::validation::ValidationError;
use thiserror::Error;

/// Error returned by the submit operations of the domain services.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("validation failed: {}", format_fields(.0))]
    Validation(Vec<ValidationError>),

    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl SubmitError {
    /// Field-keyed messages when the error is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            SubmitError::Validation(errors) => Some(errors),
            SubmitError::Store(_) => None,
        }
    }
}

fn format_fields(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_fields() {
        let err = SubmitError::Validation(vec![
            ValidationError::new("nome", "Nome é obrigatório"),
            ValidationError::new("tipo", "Tipo é obrigatório"),
        ]);
        assert_eq!(err.to_string(), "validation failed: nome, tipo");
    }
}
