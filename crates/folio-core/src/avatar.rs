//! Avatar upload preconditions.
//!
//! Checked before any storage call so an oversized or non-image payload is
//! reported as a client error without touching object storage.

/// Maximum accepted avatar size: 2 MiB.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

/// Client-correctable upload rejections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The declared content type is not an image media type.
    NotAnImage,
    /// The payload exceeds [`MAX_AVATAR_BYTES`].
    TooLarge,
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::NotAnImage => write!(f, "Profile picture must be an image"),
            UploadError::TooLarge => write!(f, "Profile picture must be less than 2MB"),
        }
    }
}

impl std::error::Error for UploadError {}

/// Validate the declared content type and size of an uploaded avatar.
pub fn validate_avatar_upload(content_type: &str, size_bytes: usize) -> Result<(), UploadError> {
    if !content_type.starts_with("image/") {
        return Err(UploadError::NotAnImage);
    }
    if size_bytes > MAX_AVATAR_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_small_image() {
        assert!(validate_avatar_upload("image/png", 1024).is_ok());
        assert!(validate_avatar_upload("image/jpeg", MAX_AVATAR_BYTES).is_ok());
    }

    #[test]
    fn test_rejects_non_image_type() {
        assert_eq!(
            validate_avatar_upload("text/plain", 10),
            Err(UploadError::NotAnImage)
        );
    }

    #[test]
    fn test_rejects_oversized_payload() {
        assert_eq!(
            validate_avatar_upload("image/png", 3 * 1024 * 1024),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn test_type_check_wins_over_size_check() {
        assert_eq!(
            validate_avatar_upload("text/plain", 3 * 1024 * 1024),
            Err(UploadError::NotAnImage)
        );
    }
}
