//! Field validators: pure, stateless predicates over primitive values.
//!
//! Invalidity is a return value, never a panic or an error. Each threshold
//! is a named constant so the client and server rule sets stay in lockstep.

use std::str::FromStr;
use std::sync::OnceLock;

use folio_commons::{Platform, ProjectPatch, SocialLinkPatch};
use regex::Regex;

pub const MAX_ROLE_LEN: usize = 48;
pub const MAX_LOCATION_LEN: usize = 48;
pub const MAX_BIO_LEN: usize = 256;
pub const MAX_LINK_USERNAME_LEN: usize = 256;
pub const MAX_PROJECT_NAME_LEN: usize = 64;
pub const MAX_PROJECT_DESCRIPTION_LEN: usize = 512;
pub const MAX_PROJECT_LINK_LEN: usize = 1024;
pub const MAX_PROJECT_STACK: usize = 10;

fn path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?i)[a-z0-9-]+$").unwrap())
}

/// Display name: required, non-empty. This is the authoritative server
/// rule; the client form additionally caps the length (see `form`).
pub fn username_valid(username: Option<&str>) -> bool {
    username.is_some_and(|name| !name.is_empty())
}

pub fn role_valid(role: &str) -> bool {
    role.chars().count() < MAX_ROLE_LEN
}

pub fn location_valid(location: &str) -> bool {
    location.chars().count() < MAX_LOCATION_LEN
}

pub fn bio_valid(bio: &str) -> bool {
    bio.chars().count() < MAX_BIO_LEN
}

/// Public URL slug shape. Global uniqueness is a store constraint, not a
/// validator rule.
pub fn path_valid(path: &str) -> bool {
    path_pattern().is_match(path)
}

pub fn link_valid(link: &SocialLinkPatch) -> bool {
    Platform::from_str(&link.platform).is_ok()
        && link.username.chars().count() < MAX_LINK_USERNAME_LEN
}

pub fn project_valid(project: &ProjectPatch) -> bool {
    let name_len = project.name.chars().count();
    name_len > 0
        && name_len < MAX_PROJECT_NAME_LEN
        && (project.description.is_empty()
            || project.description.chars().count() < MAX_PROJECT_DESCRIPTION_LEN)
        && project.link.chars().count() < MAX_PROJECT_LINK_LEN
        && project.stack.len() <= MAX_PROJECT_STACK
}
