use crate::types::DbId;

/// Domain-level errors shared across crates.
///
/// The HTTP layer maps these onto status codes and the response envelope;
/// the variants themselves stay transport-agnostic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An identifier did not resolve to a record. Not treated as fatal:
    /// handlers report it as a normal outcome.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A request payload failed a domain constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
