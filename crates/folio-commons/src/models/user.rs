//! User aggregate: the single mutable record behind the settings flow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::project::Project;

/// Type-safe wrapper for user identifiers.
///
/// The identifier is assigned once at account creation by the auth
/// collaborator and is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Closed set of supported social platforms.
///
/// Any value outside this set fails link validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Github,
    Linkedin,
    Dribbble,
    Behance,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Twitter,
        Platform::Github,
        Platform::Linkedin,
        Platform::Dribbble,
        Platform::Behance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Github => "github",
            Platform::Linkedin => "linkedin",
            Platform::Dribbble => "dribbble",
            Platform::Behance => "behance",
        }
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "twitter" => Ok(Platform::Twitter),
            "github" => Ok(Platform::Github),
            "linkedin" => Ok(Platform::Linkedin),
            "dribbble" => Ok(Platform::Dribbble),
            "behance" => Ok(Platform::Behance),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A social profile reference shown on the public page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: Platform,
    pub username: String,
}

/// The user aggregate root.
///
/// Created once at authentication time with empty optional fields and
/// mutated only through the settings merge path or the avatar upload path.
/// `custom_image`, once set, takes precedence over the provider-issued
/// `image` everywhere and is never unset by settings updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,

    /// Public-facing URL slug; uniqueness is a store-level constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Display name. Non-empty on every create/update.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Provider-issued avatar URL, set at account creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// User-uploaded avatar URL; preferred over `image` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,

    #[serde(default)]
    pub social_links: Vec<SocialLink>,

    #[serde(default)]
    pub projects: Vec<Project>,
}

impl User {
    /// The avatar URL to display: the uploaded one wins over the
    /// provider-issued one.
    pub fn display_image(&self) -> Option<&str> {
        self.custom_image.as_deref().or(self.image.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
        }
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_display_image_prefers_custom() {
        let mut user = User {
            id: UserId::new("u1"),
            path: None,
            name: "Ada".to_string(),
            role: None,
            location: None,
            bio: None,
            image: Some("https://provider/avatar.png".to_string()),
            custom_image: None,
            social_links: Vec::new(),
            projects: Vec::new(),
        };
        assert_eq!(user.display_image(), Some("https://provider/avatar.png"));

        user.custom_image = Some("https://bucket/u1/profile.jpg".to_string());
        assert_eq!(user.display_image(), Some("https://bucket/u1/profile.jpg"));
    }
}
