//! Store error types.

use thiserror::Error;

/// Errors surfaced by the persistence boundary.
///
/// Backend detail is logged at the call site and never echoed to clients;
/// the constraint variants are client-correctable and map to HTTP 400.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Path is already taken")]
    DuplicatePath,

    #[error("Duplicate platform in social links: {0}")]
    DuplicatePlatform(String),

    #[error("Email is already subscribed")]
    DuplicateEmail,

    #[error("User not found: {0}")]
    UserNotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
