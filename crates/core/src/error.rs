use validator::ValidationErrors;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Field-level input validation failure.
    #[error("Invalid input: {}", describe(.0))]
    InvalidInput(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Names of the offending fields for an [`CoreError::InvalidInput`],
    /// sorted for stable output. Empty for every other variant.
    pub fn invalid_fields(&self) -> Vec<String> {
        match self {
            CoreError::InvalidInput(errors) => {
                let mut fields: Vec<String> =
                    errors.errors().keys().map(|k| k.to_string()).collect();
                fields.sort();
                fields
            }
            _ => Vec::new(),
        }
    }
}

/// One `field: reason` clause per failed rule, sorted by field. The reason is
/// the rule's message when it has one and its code otherwise.
fn describe(errors: &ValidationErrors) -> String {
    let mut clauses: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: failed {} check", e.code),
            })
        })
        .collect();
    clauses.sort();
    clauses.join("; ")
}
