//! Avatar object storage.
//!
//! Avatars live under a deterministic key derived from the user id, so a
//! re-upload overwrites the previous object in place and the public URL
//! never changes. There is no history of prior avatars.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use folio_commons::UserId;

use crate::error::{StoreError, StoreResult};

/// Fixed filename within the per-user namespace.
pub const AVATAR_FILENAME: &str = "profile.jpg";

/// Content type the object is stored with.
pub const AVATAR_CONTENT_TYPE: &str = "image/jpg";

/// Abstraction over avatar object storage.
#[async_trait]
pub trait AvatarStorage: Send + Sync {
    /// Store the avatar bytes under the user's deterministic key and
    /// return the public URL.
    async fn put_avatar(&self, user_id: &UserId, bytes: Vec<u8>) -> StoreResult<String>;
}

/// S3 avatar storage backend.
pub struct S3AvatarStorage {
    client: S3Client,
    bucket: String,
    region: String,
}

impl S3AvatarStorage {
    pub fn new(client: S3Client, bucket: String, region: String) -> Self {
        Self {
            client,
            bucket,
            region,
        }
    }

    fn object_key(user_id: &UserId) -> String {
        format!("{}/{}", user_id, AVATAR_FILENAME)
    }

    /// Deterministic public URL for a user's avatar.
    pub fn public_url(&self, user_id: &UserId) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket,
            self.region,
            Self::object_key(user_id)
        )
    }
}

#[async_trait]
impl AvatarStorage for S3AvatarStorage {
    async fn put_avatar(&self, user_id: &UserId, bytes: Vec<u8>) -> StoreResult<String> {
        let key = Self::object_key(user_id);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type(AVATAR_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| {
                StoreError::Backend(format!(
                    "Failed to write avatar to S3: s3://{}/{}: {}",
                    self.bucket, key, e
                ))
            })?;

        Ok(self.public_url(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_url_are_deterministic() {
        let user_id = UserId::new("u42");
        assert_eq!(S3AvatarStorage::object_key(&user_id), "u42/profile.jpg");
    }
}
