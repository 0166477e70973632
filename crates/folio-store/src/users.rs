//! User persistence.
//!
//! The repository is an abstraction over the document database so handlers
//! and tests can run against an in-memory double. The MongoDB
//! implementation writes the whole user document in one call:
//! last-write-wins, no optimistic concurrency token.

use std::collections::HashSet;

use async_trait::async_trait;
use folio_commons::{User, UserId};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::error::{StoreError, StoreResult};
use crate::mongo::is_duplicate_key_error;

pub const USERS_COLLECTION: &str = "users";

/// Abstraction over user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(&self, id: &UserId) -> StoreResult<Option<User>>;

    async fn get_user_by_path(&self, path: &str) -> StoreResult<Option<User>>;

    /// Persist the full user record in a single write.
    ///
    /// Assigns fresh identifiers to projects that have none, rejects
    /// duplicate platforms among the social links, and surfaces a `path`
    /// unique-index violation as [`StoreError::DuplicatePath`].
    async fn save_user(&self, user: &mut User) -> StoreResult<()>;
}

/// Reject social-link lists carrying the same platform twice. The UI never
/// produces one, but the constraint is explicit at the persistence
/// boundary rather than implicit in the client.
pub(crate) fn check_unique_platforms(user: &User) -> StoreResult<()> {
    let mut seen = HashSet::new();
    for link in &user.social_links {
        if !seen.insert(link.platform) {
            return Err(StoreError::DuplicatePlatform(
                link.platform.as_str().to_string(),
            ));
        }
    }
    Ok(())
}

/// Assign store identifiers to projects the client just created.
pub(crate) fn assign_project_ids(user: &mut User) {
    for project in &mut user.projects {
        if project.id.is_none() {
            project.id = Some(ObjectId::new().to_hex());
        }
    }
}

/// MongoDB-backed user repository.
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn get_user(&self, id: &UserId) -> StoreResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id.as_str() })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn get_user_by_path(&self, path: &str) -> StoreResult<Option<User>> {
        self.collection
            .find_one(doc! { "path": path })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn save_user(&self, user: &mut User) -> StoreResult<()> {
        check_unique_platforms(user)?;
        assign_project_ids(user);

        let result = self
            .collection
            .replace_one(doc! { "_id": user.id.as_str() }, &*user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    StoreError::DuplicatePath
                } else {
                    StoreError::Backend(e.to_string())
                }
            })?;

        if result.matched_count == 0 {
            // The record is created at authentication time; a missing match
            // means the session points at a deleted account.
            return Err(StoreError::UserNotFound(user.id.to_string()));
        }
        Ok(())
    }
}
