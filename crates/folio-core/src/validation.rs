//! Settings validation engine.
//!
//! Composes the field validators into a single pass/fail decision. Rules
//! are evaluated in a fixed priority order and the first failure wins, so a
//! payload breaking several rules always reports the earliest one. The
//! identical function runs on the client path (with a toast notifier) and
//! on the authoritative server path (without one).

use folio_commons::SettingsPatch;

use crate::validators;

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl Validity {
    fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn fail(message: &'static str) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }
}

/// UI-facing notification sink for failing rules.
///
/// Optional by contract: the server path supplies `None` and the engine
/// must behave identically without it.
pub trait Notifier {
    fn notify(&self, title: &str, description: &str);
}

struct Rule {
    check: fn(&SettingsPatch) -> bool,
    message: &'static str,
    description: &'static str,
}

/// Rule priority order. Tests assert on this exact order: a payload
/// failing multiple rules reports the earliest entry.
const RULES: &[Rule] = &[
    Rule {
        check: |patch| validators::username_valid(patch.username.as_deref()),
        message: "Username is required",
        description: "Please enter a username",
    },
    Rule {
        check: |patch| patch.role.as_deref().is_none_or(validators::role_valid),
        message: "Role is too long",
        description: "Role must be less than 48 characters",
    },
    Rule {
        check: |patch| {
            patch
                .location
                .as_deref()
                .is_none_or(validators::location_valid)
        },
        message: "Location is too long",
        description: "Location must be less than 48 characters",
    },
    Rule {
        check: |patch| patch.bio.as_deref().is_none_or(validators::bio_valid),
        message: "Bio is too long",
        description: "Bio must be less than 256 characters",
    },
    Rule {
        check: |patch| {
            patch
                .links
                .as_deref()
                .is_none_or(|links| links.iter().all(validators::link_valid))
        },
        message: "Invalid social link",
        description: "Please check the social links",
    },
    Rule {
        check: |patch| {
            patch
                .projects
                .as_deref()
                .is_none_or(|projects| projects.iter().all(validators::project_valid))
        },
        message: "Invalid project",
        description: "Please check the projects",
    },
    Rule {
        check: |patch| patch.path.as_deref().is_none_or(validators::path_valid),
        message: "Invalid path",
        description: "Path may only contain letters, numbers, and dashes",
    },
];

/// Validate a partial settings payload.
///
/// Fields absent from the payload are treated as unchanged and skip their
/// rule; the username rule alone also fails on absence.
pub fn validate_settings(patch: &SettingsPatch, notifier: Option<&dyn Notifier>) -> Validity {
    for rule in RULES {
        if !(rule.check)(patch) {
            if let Some(notifier) = notifier {
                notifier.notify(rule.message, rule.description);
            }
            return Validity::fail(rule.message);
        }
    }
    Validity::ok()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use folio_commons::{ProjectPatch, SocialLinkPatch};

    use super::*;

    fn valid_patch() -> SettingsPatch {
        SettingsPatch {
            username: Some("ada".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_username_fails_first_regardless_of_other_fields() {
        let patch = SettingsPatch {
            username: None,
            role: Some("r".repeat(100)),
            bio: Some("b".repeat(1000)),
            ..Default::default()
        };
        let result = validate_settings(&patch, None);
        assert!(!result.valid);
        assert_eq!(result.message, Some("Username is required"));

        let patch = SettingsPatch {
            username: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            validate_settings(&patch, None).message,
            Some("Username is required")
        );
    }

    #[test]
    fn test_rule_priority_role_before_location_before_bio() {
        let patch = SettingsPatch {
            username: Some("ada".to_string()),
            role: Some("r".repeat(48)),
            location: Some("l".repeat(48)),
            bio: Some("b".repeat(256)),
            ..Default::default()
        };
        assert_eq!(
            validate_settings(&patch, None).message,
            Some("Role is too long")
        );

        let patch = SettingsPatch {
            username: Some("ada".to_string()),
            location: Some("l".repeat(48)),
            bio: Some("b".repeat(256)),
            ..Default::default()
        };
        assert_eq!(
            validate_settings(&patch, None).message,
            Some("Location is too long")
        );

        let patch = SettingsPatch {
            username: Some("ada".to_string()),
            bio: Some("b".repeat(256)),
            ..Default::default()
        };
        assert_eq!(
            validate_settings(&patch, None).message,
            Some("Bio is too long")
        );
    }

    #[test]
    fn test_values_below_threshold_pass() {
        let patch = SettingsPatch {
            username: Some("ada".to_string()),
            role: Some("r".repeat(47)),
            location: Some("l".repeat(47)),
            bio: Some("b".repeat(255)),
            ..Default::default()
        };
        assert!(validate_settings(&patch, None).valid);
    }

    #[test]
    fn test_absent_fields_are_not_revalidated() {
        assert!(validate_settings(&valid_patch(), None).valid);
    }

    #[test]
    fn test_bad_platform_reports_invalid_link() {
        let patch = SettingsPatch {
            links: Some(vec![SocialLinkPatch {
                platform: "myspace".to_string(),
                username: "tom".to_string(),
            }]),
            ..valid_patch()
        };
        assert_eq!(
            validate_settings(&patch, None).message,
            Some("Invalid social link")
        );
    }

    #[test]
    fn test_oversized_stack_reports_invalid_project() {
        let patch = SettingsPatch {
            projects: Some(vec![ProjectPatch {
                id: None,
                name: "p".to_string(),
                description: String::new(),
                link: String::new(),
                stack: vec![
                    folio_commons::Technology {
                        name: "React".to_string(),
                        logo: String::new(),
                        link: String::new(),
                    };
                    11
                ],
                logo: None,
            }]),
            ..valid_patch()
        };
        assert_eq!(
            validate_settings(&patch, None).message,
            Some("Invalid project")
        );
    }

    #[test]
    fn test_bad_path_reported_last() {
        let patch = SettingsPatch {
            path: Some("not a path".to_string()),
            ..valid_patch()
        };
        assert_eq!(validate_settings(&patch, None).message, Some("Invalid path"));

        // Earlier rules still win over the path rule.
        let patch = SettingsPatch {
            path: Some("not a path".to_string()),
            bio: Some("b".repeat(256)),
            ..valid_patch()
        };
        assert_eq!(
            validate_settings(&patch, None).message,
            Some("Bio is too long")
        );
    }

    struct CollectingNotifier {
        seen: RefCell<Vec<(String, String)>>,
    }

    impl Notifier for CollectingNotifier {
        fn notify(&self, title: &str, description: &str) {
            self.seen
                .borrow_mut()
                .push((title.to_string(), description.to_string()));
        }
    }

    #[test]
    fn test_notifier_fires_once_for_the_failing_rule_only() {
        let notifier = CollectingNotifier {
            seen: RefCell::new(Vec::new()),
        };
        let patch = SettingsPatch {
            username: None,
            bio: Some("b".repeat(256)),
            ..Default::default()
        };
        validate_settings(&patch, Some(&notifier));
        let seen = notifier.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "Username is required");
    }

    #[test]
    fn test_valid_payload_does_not_notify() {
        let notifier = CollectingNotifier {
            seen: RefCell::new(Vec::new()),
        };
        assert!(validate_settings(&valid_patch(), Some(&notifier)).valid);
        assert!(notifier.seen.borrow().is_empty());
    }
}
