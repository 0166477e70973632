//! Persisted data model and wire payloads.

mod lead;
mod project;
mod settings;
mod user;

pub use lead::Lead;
pub use project::{catalog_entry, CatalogEntry, Project, Technology, TECH_CATALOG};
pub use settings::{ProjectPatch, SettingsPatch, SocialLinkPatch};
pub use user::{Platform, SocialLink, User, UserId};
