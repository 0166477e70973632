//! Merging a validated settings payload into the stored user record.
//!
//! Scalar fields overwrite when present. The nested arrays compare
//! structurally against the stored value and are only replaced when
//! different, so an unchanged re-submission produces no write and
//! store-generated sub-identifiers survive.

use std::str::FromStr;

use folio_commons::{Platform, Project, ProjectPatch, SettingsPatch, SocialLink, User};

/// What the merge did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// True when any field of the user record was modified and a persistence
    /// write is required.
    pub changed: bool,
}

fn parse_links(links: Vec<folio_commons::SocialLinkPatch>) -> Vec<SocialLink> {
    // The payload has passed validation, so every platform parses.
    links
        .into_iter()
        .filter_map(|link| {
            Platform::from_str(&link.platform)
                .ok()
                .map(|platform| SocialLink {
                    platform,
                    username: link.username,
                })
        })
        .collect()
}

/// Order-sensitive structural comparison, ignoring the store-assigned id
/// and the logo (both are rewritten by the sanitize step on replace).
fn projects_differ(stored: &[Project], incoming: &[ProjectPatch]) -> bool {
    stored.len() != incoming.len()
        || stored.iter().zip(incoming.iter()).any(|(a, b)| {
            a.name != b.name || a.description != b.description || a.link != b.link
                || a.stack != b.stack
        })
}

/// Strip client-only fields so the store assigns fresh identifiers and no
/// client-supplied logo reference is trusted.
fn sanitize_project(patch: ProjectPatch) -> Project {
    Project {
        id: None,
        name: patch.name,
        description: patch.description,
        link: patch.link,
        stack: patch.stack,
        logo: None,
    }
}

/// Apply a validated partial settings payload to the user record.
///
/// The payload must have passed [`crate::validate_settings`]; this function
/// performs no validation of its own. `custom_image` is deliberately
/// untouchable through this path.
pub fn merge_settings(user: &mut User, patch: SettingsPatch) -> MergeOutcome {
    let mut changed = false;

    if let Some(username) = patch.username {
        if !username.is_empty() && user.name != username {
            user.name = username;
            changed = true;
        }
    }

    if let Some(path) = patch.path {
        let canonical = path.to_lowercase();
        if user.path.as_deref() != Some(canonical.as_str()) {
            user.path = Some(canonical);
            changed = true;
        }
    }

    if let Some(role) = patch.role {
        if user.role.as_deref() != Some(role.as_str()) {
            user.role = Some(role);
            changed = true;
        }
    }

    if let Some(location) = patch.location {
        if user.location.as_deref() != Some(location.as_str()) {
            user.location = Some(location);
            changed = true;
        }
    }

    if let Some(bio) = patch.bio {
        if user.bio.as_deref() != Some(bio.as_str()) {
            user.bio = Some(bio);
            changed = true;
        }
    }

    if let Some(links) = patch.links {
        let links = parse_links(links);
        if user.social_links != links {
            user.social_links = links;
            changed = true;
        }
    }

    if let Some(projects) = patch.projects {
        if projects_differ(&user.projects, &projects) {
            user.projects = projects.into_iter().map(sanitize_project).collect();
            changed = true;
        }
    }

    MergeOutcome { changed }
}

#[cfg(test)]
mod tests {
    use folio_commons::{SocialLinkPatch, Technology, UserId};

    use super::*;

    fn user() -> User {
        User {
            id: UserId::new("u1"),
            path: None,
            name: "Ada".to_string(),
            role: Some("Engineer".to_string()),
            location: None,
            bio: None,
            image: None,
            custom_image: Some("https://bucket/u1/profile.jpg".to_string()),
            social_links: vec![SocialLink {
                platform: Platform::Github,
                username: "ada".to_string(),
            }],
            projects: vec![Project {
                id: Some("server-assigned".to_string()),
                name: "Engine".to_string(),
                description: "Analytical engine".to_string(),
                link: "https://example.com".to_string(),
                stack: Vec::new(),
                logo: None,
            }],
        }
    }

    fn link_patch(platform: &str, username: &str) -> SocialLinkPatch {
        SocialLinkPatch {
            platform: platform.to_string(),
            username: username.to_string(),
        }
    }

    #[test]
    fn test_scalars_overwrite_when_present() {
        let mut u = user();
        let outcome = merge_settings(
            &mut u,
            SettingsPatch {
                username: Some("Ada L.".to_string()),
                role: Some(String::new()),
                bio: Some("First programmer".to_string()),
                ..Default::default()
            },
        );
        assert!(outcome.changed);
        assert_eq!(u.name, "Ada L.");
        assert_eq!(u.role.as_deref(), Some(""));
        assert_eq!(u.bio.as_deref(), Some("First programmer"));
        assert!(u.location.is_none());
    }

    #[test]
    fn test_empty_username_does_not_clobber_name() {
        let mut u = user();
        merge_settings(
            &mut u,
            SettingsPatch {
                username: Some(String::new()),
                ..Default::default()
            },
        );
        assert_eq!(u.name, "Ada");
    }

    #[test]
    fn test_unchanged_links_short_circuit() {
        let mut u = user();
        let outcome = merge_settings(
            &mut u,
            SettingsPatch {
                links: Some(vec![link_patch("github", "ada")]),
                ..Default::default()
            },
        );
        assert!(!outcome.changed);
    }

    #[test]
    fn test_changed_links_replace() {
        let mut u = user();
        let outcome = merge_settings(
            &mut u,
            SettingsPatch {
                links: Some(vec![
                    link_patch("github", "ada"),
                    link_patch("twitter", "ada"),
                ]),
                ..Default::default()
            },
        );
        assert!(outcome.changed);
        assert_eq!(u.social_links.len(), 2);
        assert_eq!(u.social_links[1].platform, Platform::Twitter);
    }

    #[test]
    fn test_unchanged_projects_keep_server_ids() {
        let mut u = user();
        let outcome = merge_settings(
            &mut u,
            SettingsPatch {
                projects: Some(vec![ProjectPatch {
                    id: Some("client-token".to_string()),
                    name: "Engine".to_string(),
                    description: "Analytical engine".to_string(),
                    link: "https://example.com".to_string(),
                    stack: Vec::new(),
                    logo: None,
                }]),
                ..Default::default()
            },
        );
        assert!(!outcome.changed);
        assert_eq!(u.projects[0].id.as_deref(), Some("server-assigned"));
    }

    #[test]
    fn test_changed_projects_replace_and_strip_client_fields() {
        let mut u = user();
        let outcome = merge_settings(
            &mut u,
            SettingsPatch {
                projects: Some(vec![ProjectPatch {
                    id: Some("client-token".to_string()),
                    name: "Engine v2".to_string(),
                    description: String::new(),
                    link: String::new(),
                    stack: vec![Technology {
                        name: "Rust".to_string(),
                        logo: "/icons/rust.svg".to_string(),
                        link: "https://www.rust-lang.org".to_string(),
                    }],
                    logo: Some("https://attacker/logo.png".to_string()),
                }]),
                ..Default::default()
            },
        );
        assert!(outcome.changed);
        assert_eq!(u.projects.len(), 1);
        assert!(u.projects[0].id.is_none());
        assert!(u.projects[0].logo.is_none());
        assert_eq!(u.projects[0].name, "Engine v2");
    }

    #[test]
    fn test_custom_image_survives_every_merge() {
        let mut u = user();
        merge_settings(
            &mut u,
            SettingsPatch {
                username: Some("Someone".to_string()),
                links: Some(Vec::new()),
                projects: Some(Vec::new()),
                ..Default::default()
            },
        );
        assert_eq!(
            u.custom_image.as_deref(),
            Some("https://bucket/u1/profile.jpg")
        );
    }

    #[test]
    fn test_path_is_canonicalized_lowercase() {
        let mut u = user();
        let outcome = merge_settings(
            &mut u,
            SettingsPatch {
                path: Some("Ada-Lovelace".to_string()),
                ..Default::default()
            },
        );
        assert!(outcome.changed);
        assert_eq!(u.path.as_deref(), Some("ada-lovelace"));
    }

    #[test]
    fn test_identical_resubmission_reports_no_change() {
        let mut u = user();
        let patch = SettingsPatch {
            username: Some("Ada".to_string()),
            role: Some("Engineer".to_string()),
            links: Some(vec![link_patch("github", "ada")]),
            ..Default::default()
        };
        let outcome = merge_settings(&mut u, patch);
        assert!(!outcome.changed);
    }
}
