//! MongoDB client initialization and index management.

use log::info;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};

use crate::error::{StoreError, StoreResult};
use crate::leads::LEADS_COLLECTION;
use crate::users::USERS_COLLECTION;

/// Connect to MongoDB and select the application database.
pub async fn init_mongo(url: &str, database: &str) -> StoreResult<Database> {
    let client = Client::with_uri_str(url)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;
    info!("Connected to MongoDB at {}", url);
    Ok(client.database(database))
}

/// Create the unique indexes backing the store-level constraints:
/// `users.path` (sparse, documents without a path are exempt) and
/// `leads.email`.
pub async fn ensure_indexes(database: &Database) -> StoreResult<()> {
    let users = database.collection::<mongodb::bson::Document>(USERS_COLLECTION);
    users
        .create_index(
            IndexModel::builder()
                .keys(doc! { "path": 1 })
                .options(IndexOptions::builder().unique(true).sparse(true).build())
                .build(),
        )
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

    let leads = database.collection::<mongodb::bson::Document>(LEADS_COLLECTION);
    leads
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

    info!("MongoDB indexes ensured");
    Ok(())
}

/// True when the driver error is a unique-index violation (code 11000).
pub(crate) fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}
