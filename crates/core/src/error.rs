use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl CoreError {
    /// Shorthand for a referenced id that does not resolve to a row.
    ///
    /// A dangling reference inside a request body is a client input problem,
    /// so it surfaces as a validation error rather than a 404.
    pub fn missing_reference(entity: &str, id: DbId) -> Self {
        CoreError::Validation(format!("{entity} with id {id} not found"))
    }
}
