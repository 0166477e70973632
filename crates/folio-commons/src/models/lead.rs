//! Landing-page lead capture record.

use serde::{Deserialize, Serialize};

/// An email captured from the landing page.
///
/// Uniqueness on `email` is enforced by the store; duplicate submissions
/// are idempotent at the API layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub email: String,
    /// Capture time, Unix epoch milliseconds.
    pub created_at: i64,
}

impl Lead {
    pub fn new(email: impl Into<String>, created_at: i64) -> Self {
        Self {
            email: email.into(),
            created_at,
        }
    }
}
