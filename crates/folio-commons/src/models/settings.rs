//! Partial settings payload.
//!
//! Every field's presence is meaningful: `None` means "unchanged this
//! editing session" and is never re-validated. Social links arrive with a
//! free-form platform string so that unknown platforms surface as a
//! validation failure rather than a deserialization error.

use serde::{Deserialize, Serialize};

use super::project::Technology;

/// A social link as submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkPatch {
    pub platform: String,
    pub username: String,
}

/// A project as submitted by the client.
///
/// `id` is a client-generated token used only for UI list identity; the
/// store assigns the real identifier and the token is discarded on merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub stack: Vec<Technology>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// The settings update submitted on save: only the fields the user touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<SocialLinkPatch>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectPatch>>,
}

impl SettingsPatch {
    /// True when the payload carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.path.is_none()
            && self.role.is_none()
            && self.location.is_none()
            && self.bio.is_none()
            && self.links.is_none()
            && self.projects.is_none()
    }
}
