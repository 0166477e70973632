//! Social URL normalizer.
//!
//! Turns a pasted profile URL into a bare handle, per platform. Input
//! without a path separator is already a handle and is accepted verbatim.

use std::sync::OnceLock;

use folio_commons::Platform;
use regex::Regex;

/// Result of normalizing a pasted link or handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkValidity {
    pub valid: bool,
    pub username: Option<String>,
}

impl LinkValidity {
    fn invalid() -> Self {
        Self {
            valid: false,
            username: None,
        }
    }

    fn accepted(username: String) -> Self {
        Self {
            valid: true,
            username: Some(username),
        }
    }
}

fn url_shape() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://\S+$").unwrap())
}

fn extraction_pattern(platform: Platform) -> &'static Regex {
    static TWITTER: OnceLock<Regex> = OnceLock::new();
    static GITHUB: OnceLock<Regex> = OnceLock::new();
    static LINKEDIN: OnceLock<Regex> = OnceLock::new();
    static DRIBBBLE: OnceLock<Regex> = OnceLock::new();
    static BEHANCE: OnceLock<Regex> = OnceLock::new();

    match platform {
        // x.com alias mirrors the historical domain rename.
        Platform::Twitter => TWITTER
            .get_or_init(|| Regex::new(r"(?:twitter\.com/([^/?#]+))|(?:x\.com/([^/?#]+))").unwrap()),
        Platform::Github => GITHUB.get_or_init(|| Regex::new(r"github\.com/([^/?#]+)").unwrap()),
        Platform::Linkedin => {
            LINKEDIN.get_or_init(|| Regex::new(r"linkedin\.com/in/([^/?#]+)").unwrap())
        }
        Platform::Dribbble => {
            DRIBBBLE.get_or_init(|| Regex::new(r"dribbble\.com/([^/?#]+)").unwrap())
        }
        Platform::Behance => BEHANCE.get_or_init(|| Regex::new(r"behance\.net/([^/?#]+)").unwrap()),
    }
}

fn url_to_username(platform: Platform, url: &str) -> Option<String> {
    let captures = extraction_pattern(platform).captures(url)?;
    captures
        .iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().to_string())
        .find(|handle| !handle.is_empty())
}

/// Normalize a pasted profile URL or bare handle.
///
/// Input containing `/` must look like an `http(s)` URL and yield a
/// non-empty handle for the platform's pattern; anything else is invalid.
/// Input without `/` is treated as an already-bare handle.
pub fn check_link_validity(platform: Platform, input: &str) -> LinkValidity {
    if !input.contains('/') {
        return LinkValidity::accepted(input.to_string());
    }

    if !url_shape().is_match(input) {
        return LinkValidity::invalid();
    }

    match url_to_username(platform, input) {
        Some(username) => LinkValidity::accepted(username),
        None => LinkValidity::invalid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_handle_accepted_verbatim() {
        let result = check_link_validity(Platform::Github, "octocat");
        assert_eq!(result, LinkValidity::accepted("octocat".to_string()));
    }

    #[test]
    fn test_github_url_extraction() {
        let result = check_link_validity(Platform::Github, "https://github.com/octocat");
        assert_eq!(result.username.as_deref(), Some("octocat"));
        assert!(result.valid);
    }

    #[test]
    fn test_twitter_accepts_x_domain_alias() {
        let result = check_link_validity(Platform::Twitter, "https://x.com/jack");
        assert_eq!(result.username.as_deref(), Some("jack"));

        let result = check_link_validity(Platform::Twitter, "https://twitter.com/jack");
        assert_eq!(result.username.as_deref(), Some("jack"));
    }

    #[test]
    fn test_separator_without_url_shape_is_invalid() {
        let result = check_link_validity(Platform::Linkedin, "not a url/with slash");
        assert_eq!(result, LinkValidity::invalid());
    }

    #[test]
    fn test_linkedin_requires_in_segment() {
        let result = check_link_validity(Platform::Linkedin, "https://linkedin.com/in/ada");
        assert_eq!(result.username.as_deref(), Some("ada"));

        let result = check_link_validity(Platform::Linkedin, "https://linkedin.com/ada");
        assert!(!result.valid);
    }

    #[test]
    fn test_extraction_stops_at_query_and_fragment() {
        let result =
            check_link_validity(Platform::Dribbble, "https://dribbble.com/ada?tab=shots");
        assert_eq!(result.username.as_deref(), Some("ada"));

        let result = check_link_validity(Platform::Behance, "https://behance.net/ada#work");
        assert_eq!(result.username.as_deref(), Some("ada"));
    }

    #[test]
    fn test_wrong_domain_is_invalid() {
        let result = check_link_validity(Platform::Github, "https://gitlab.com/octocat");
        assert_eq!(result, LinkValidity::invalid());
    }
}
