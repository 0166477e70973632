//! # folio-store
//!
//! Persistence boundary for the folio backend: user and lead repositories
//! over MongoDB, avatar object storage over S3, and in-memory doubles for
//! tests. Repositories are `Arc<dyn Trait>` at every seam so handlers
//! never know which backend they talk to.

pub mod avatar_storage;
pub mod error;
pub mod leads;
pub mod mongo;
pub mod test_utils;
pub mod users;

pub use avatar_storage::{AvatarStorage, S3AvatarStorage, AVATAR_CONTENT_TYPE, AVATAR_FILENAME};
pub use error::{StoreError, StoreResult};
pub use leads::{LeadRepository, MongoLeadRepository};
pub use mongo::{ensure_indexes, init_mongo};
pub use users::{MongoUserRepository, UserRepository};
