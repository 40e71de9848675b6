//! Domain construction errors.

/// Errors from domain type constructors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A computed route must have at least one segment.
    #[error("computed route has no segments")]
    EmptyRoute,
}
