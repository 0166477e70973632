//! Client settings form state.
//!
//! Models the editing session on the settings page: a last-saved snapshot
//! per tab, an aggregate unsaved-changes flag, save gating while a request
//! is in flight, and a leading-edge debounce that collapses bursts of save
//! triggers into one request. Pure and clock-injected so the behavior is
//! testable without a UI.

use std::time::{Duration, Instant};

use folio_commons::{ProjectPatch, SettingsPatch, SocialLinkPatch, User};

/// Client-side cap on the display name; the server only requires
/// non-emptiness (asymmetry kept on purpose).
pub const MAX_NAME_LEN_CLIENT: usize = 32;

/// Save triggers within this window are swallowed after the first.
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Scalar fields edited on the "general" tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralSettings {
    pub username: String,
    pub path: String,
    pub role: String,
    pub location: String,
    pub bio: String,
}

impl GeneralSettings {
    fn from_user(user: &User) -> Self {
        Self {
            username: user.name.clone(),
            path: user.path.clone().unwrap_or_default(),
            role: user.role.clone().unwrap_or_default(),
            location: user.location.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
        }
    }
}

/// Editing-session state across the settings tabs.
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    saved_general: GeneralSettings,
    general: GeneralSettings,
    saved_links: Vec<SocialLinkPatch>,
    links: Vec<SocialLinkPatch>,
    saved_projects: Vec<ProjectPatch>,
    projects: Vec<ProjectPatch>,
    in_flight: bool,
}

impl SettingsFormState {
    /// Seed the form from the stored user record.
    pub fn from_user(user: &User) -> Self {
        let general = GeneralSettings::from_user(user);
        let links: Vec<SocialLinkPatch> = user
            .social_links
            .iter()
            .map(|link| SocialLinkPatch {
                platform: link.platform.as_str().to_string(),
                username: link.username.clone(),
            })
            .collect();
        let projects: Vec<ProjectPatch> = user
            .projects
            .iter()
            .map(|project| ProjectPatch {
                id: project.id.clone(),
                name: project.name.clone(),
                description: project.description.clone(),
                link: project.link.clone(),
                stack: project.stack.clone(),
                logo: project.logo.clone(),
            })
            .collect();
        Self {
            saved_general: general.clone(),
            general,
            saved_links: links.clone(),
            links,
            saved_projects: projects.clone(),
            projects,
            in_flight: false,
        }
    }

    pub fn edit_general(&mut self, general: GeneralSettings) {
        self.general = general;
    }

    pub fn edit_links(&mut self, links: Vec<SocialLinkPatch>) {
        self.links = links;
    }

    pub fn edit_projects(&mut self, projects: Vec<ProjectPatch>) {
        self.projects = projects;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.general != self.saved_general
            || self.links != self.saved_links
            || self.projects != self.saved_projects
    }

    /// Client-side display-name constraint: present and at most 32 chars.
    pub fn name_within_client_limit(&self) -> bool {
        let len = self.general.username.chars().count();
        len > 0 && len <= MAX_NAME_LEN_CLIENT
    }

    /// Assemble the partial payload for a save: only dirty tabs are
    /// included. Returns `None` when nothing changed, a request is already
    /// outstanding, or the client-side name cap is violated.
    pub fn begin_save(&mut self) -> Option<SettingsPatch> {
        if self.in_flight || !self.has_unsaved_changes() || !self.name_within_client_limit() {
            return None;
        }

        let mut patch = SettingsPatch {
            // The username rule is always re-checked server-side, so the
            // general tab's name travels with every save.
            username: Some(self.general.username.clone()),
            ..Default::default()
        };

        if self.general != self.saved_general {
            patch.path = Some(self.general.path.clone());
            patch.role = Some(self.general.role.clone());
            patch.location = Some(self.general.location.clone());
            patch.bio = Some(self.general.bio.clone());
        }
        if self.links != self.saved_links {
            patch.links = Some(self.links.clone());
        }
        if self.projects != self.saved_projects {
            patch.projects = Some(self.projects.clone());
        }

        self.in_flight = true;
        Some(patch)
    }

    /// A save response arrived with success: promote the working copy.
    pub fn save_succeeded(&mut self) {
        self.in_flight = false;
        self.saved_general = self.general.clone();
        self.saved_links = self.links.clone();
        self.saved_projects = self.projects.clone();
    }

    /// A save response arrived with failure: edits stay dirty.
    pub fn save_failed(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

/// Leading-edge debounce: the first trigger fires immediately, repeats
/// within the window are swallowed.
#[derive(Debug, Clone)]
pub struct DebounceImmediate {
    window: Duration,
    last_fired: Option<Instant>,
}

impl DebounceImmediate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    pub fn should_fire(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_commons::{Platform, SocialLink, UserId};

    use super::*;

    fn user() -> User {
        User {
            id: UserId::new("u1"),
            path: Some("ada".to_string()),
            name: "Ada".to_string(),
            role: Some("Engineer".to_string()),
            location: None,
            bio: None,
            image: None,
            custom_image: None,
            social_links: vec![SocialLink {
                platform: Platform::Github,
                username: "ada".to_string(),
            }],
            projects: Vec::new(),
        }
    }

    #[test]
    fn test_pristine_form_produces_no_save() {
        let mut form = SettingsFormState::from_user(&user());
        assert!(!form.has_unsaved_changes());
        assert!(form.begin_save().is_none());
    }

    #[test]
    fn test_dirty_tab_only_travels_in_patch() {
        let mut form = SettingsFormState::from_user(&user());
        form.edit_links(vec![SocialLinkPatch {
            platform: "twitter".to_string(),
            username: "ada".to_string(),
        }]);

        let patch = form.begin_save().expect("dirty form should save");
        assert!(patch.links.is_some());
        assert!(patch.projects.is_none());
        // Username always travels for the server-side required check.
        assert_eq!(patch.username.as_deref(), Some("Ada"));
        assert!(patch.role.is_none());
    }

    #[test]
    fn test_save_gated_while_in_flight() {
        let mut form = SettingsFormState::from_user(&user());
        form.edit_general(GeneralSettings {
            bio: "hello".to_string(),
            ..GeneralSettings::from_user(&user())
        });
        assert!(form.begin_save().is_some());
        assert!(form.is_in_flight());
        assert!(form.begin_save().is_none());

        form.save_succeeded();
        assert!(!form.has_unsaved_changes());
    }

    #[test]
    fn test_failed_save_keeps_form_dirty() {
        let mut form = SettingsFormState::from_user(&user());
        form.edit_general(GeneralSettings {
            bio: "hello".to_string(),
            ..GeneralSettings::from_user(&user())
        });
        form.begin_save();
        form.save_failed();
        assert!(form.has_unsaved_changes());
        assert!(form.begin_save().is_some());
    }

    #[test]
    fn test_client_name_cap_blocks_save() {
        let mut form = SettingsFormState::from_user(&user());
        form.edit_general(GeneralSettings {
            username: "n".repeat(MAX_NAME_LEN_CLIENT + 1),
            ..GeneralSettings::from_user(&user())
        });
        assert!(form.has_unsaved_changes());
        assert!(form.begin_save().is_none());
    }

    #[test]
    fn test_debounce_fires_on_leading_edge_only() {
        let mut debounce = DebounceImmediate::new(SAVE_DEBOUNCE);
        let start = Instant::now();
        assert!(debounce.should_fire(start));
        assert!(!debounce.should_fire(start + Duration::from_millis(100)));
        assert!(!debounce.should_fire(start + Duration::from_millis(299)));
        assert!(debounce.should_fire(start + Duration::from_millis(301)));
    }
}
