//! Lead persistence.

use async_trait::async_trait;
use folio_commons::Lead;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::error::{StoreError, StoreResult};
use crate::mongo::is_duplicate_key_error;

pub const LEADS_COLLECTION: &str = "leads";

/// Abstraction over lead persistence.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Lead>>;

    /// Insert a new lead. A unique-index violation on the email surfaces as
    /// [`StoreError::DuplicateEmail`] so callers can treat a concurrent
    /// duplicate like an existing subscription.
    async fn insert(&self, lead: &Lead) -> StoreResult<()>;
}

/// MongoDB-backed lead repository.
pub struct MongoLeadRepository {
    collection: Collection<Lead>,
}

impl MongoLeadRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(LEADS_COLLECTION),
        }
    }
}

#[async_trait]
impl LeadRepository for MongoLeadRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Lead>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn insert(&self, lead: &Lead) -> StoreResult<()> {
        self.collection.insert_one(lead).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                StoreError::DuplicateEmail
            } else {
                StoreError::Backend(e.to_string())
            }
        })?;
        Ok(())
    }
}
