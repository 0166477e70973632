//! # folio-commons
//!
//! Shared types and configuration for the folio backend.
//!
//! This crate is the single source of truth for the persisted data model
//! (`User`, `SocialLink`, `Project`, `Technology`, `Lead`), the partial
//! settings payload exchanged with clients (`SettingsPatch`), and the
//! server configuration structures. It carries no I/O so that every other
//! crate can depend on it without cycles.

pub mod config;
pub mod models;

pub use config::ServerConfig;
pub use models::{
    catalog_entry, CatalogEntry, Lead, Platform, Project, ProjectPatch, SettingsPatch, SocialLink,
    SocialLinkPatch, Technology, User, UserId, TECH_CATALOG,
};
