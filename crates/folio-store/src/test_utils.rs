//! In-memory doubles for handler and integration tests.
//!
//! Exposed as a regular module (not `cfg(test)`) so downstream crates can
//! test against the same repository contracts.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use folio_commons::{Lead, User, UserId};

use crate::avatar_storage::AvatarStorage;
use crate::error::{StoreError, StoreResult};
use crate::leads::LeadRepository;
use crate::users::{assign_project_ids, check_unique_platforms, UserRepository};

/// In-memory user repository mirroring the MongoDB constraint behavior.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
    /// Number of successful writes, for idempotence assertions.
    pub writes: Mutex<usize>,
}

impl InMemoryUserRepository {
    pub fn with_user(user: User) -> Self {
        let repo = Self::default();
        repo.users
            .lock()
            .unwrap()
            .insert(user.id.to_string(), user);
        repo
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_user(&self, id: &UserId) -> StoreResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn get_user_by_path(&self, path: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.path.as_deref() == Some(path))
            .cloned())
    }

    async fn save_user(&self, user: &mut User) -> StoreResult<()> {
        check_unique_platforms(user)?;
        assign_project_ids(user);

        let mut users = self.users.lock().unwrap();
        if let Some(path) = user.path.as_deref() {
            let taken = users
                .values()
                .any(|other| other.id != user.id && other.path.as_deref() == Some(path));
            if taken {
                return Err(StoreError::DuplicatePath);
            }
        }
        if !users.contains_key(user.id.as_str()) {
            return Err(StoreError::UserNotFound(user.id.to_string()));
        }
        users.insert(user.id.to_string(), user.clone());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

/// In-memory lead repository with a unique email constraint.
#[derive(Default)]
pub struct InMemoryLeadRepository {
    leads: Mutex<Vec<Lead>>,
}

impl InMemoryLeadRepository {
    pub fn lead_count(&self) -> usize {
        self.leads.lock().unwrap().len()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Lead>> {
        Ok(self
            .leads
            .lock()
            .unwrap()
            .iter()
            .find(|lead| lead.email == email)
            .cloned())
    }

    async fn insert(&self, lead: &Lead) -> StoreResult<()> {
        let mut leads = self.leads.lock().unwrap();
        if leads.iter().any(|existing| existing.email == lead.email) {
            return Err(StoreError::DuplicateEmail);
        }
        leads.push(lead.clone());
        Ok(())
    }
}

/// Avatar storage double that records every upload.
#[derive(Default)]
pub struct RecordingAvatarStorage {
    uploads: Mutex<Vec<(String, usize)>>,
    pub fail_next: Mutex<bool>,
}

impl RecordingAvatarStorage {
    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn uploads(&self) -> Vec<(String, usize)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl AvatarStorage for RecordingAvatarStorage {
    async fn put_avatar(&self, user_id: &UserId, bytes: Vec<u8>) -> StoreResult<String> {
        if *self.fail_next.lock().unwrap() {
            return Err(StoreError::Backend("simulated storage failure".to_string()));
        }
        self.uploads
            .lock()
            .unwrap()
            .push((user_id.to_string(), bytes.len()));
        Ok(format!(
            "https://test-bucket.s3.test-region.amazonaws.com/{}/profile.jpg",
            user_id
        ))
    }
}
