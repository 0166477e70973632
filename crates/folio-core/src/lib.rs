//! # folio-core
//!
//! The rule-bearing heart of the settings flow: which profile, social-link
//! and project mutations are acceptable, how a pasted profile URL becomes a
//! handle, and how a partial settings payload is merged into the stored
//! user record. Everything here is pure and synchronous so the exact same
//! decisions run on the client path and on the authoritative server path.

pub mod avatar;
pub mod form;
pub mod merge;
pub mod social;
pub mod validation;
pub mod validators;

pub use avatar::{validate_avatar_upload, UploadError, MAX_AVATAR_BYTES};
pub use merge::{merge_settings, MergeOutcome};
pub use social::{check_link_validity, LinkValidity};
pub use validation::{validate_settings, Notifier, Validity};
