use crate::validate::FieldErrors;

/// Errors produced by the `folio-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// One or more submission fields failed validation.
    #[error("submission validation failed: {0}")]
    InvalidSubmission(FieldErrors),
}
