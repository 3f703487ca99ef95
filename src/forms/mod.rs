//! Form definitions backing the HTTP routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod contacts;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid sort direction")]
    InvalidSort,

    #[error("invalid order by field")]
    InvalidOrderBy,

    #[error("invalid email address")]
    InvalidEmail,
}
