//! Avatar upload handler.
//!
//! POST /api/upload/pfp — multipart form with a `pfp` image field. Type
//! and size are checked before any storage call; the object then lands at
//! the user's deterministic key and the record's `customImage` is updated.
//! A storage write followed by a persistence failure leaves a dangling
//! object: logged, surfaced as a 500, not rolled back.

use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use folio_commons::config::AuthSettings;
use folio_core::validate_avatar_upload;
use folio_store::{AvatarStorage, UserRepository};
use futures_util::TryStreamExt;
use log::error;
use serde_json::json;

use crate::error::ApiError;
use crate::session::resolve_current_user;

const PFP_FIELD: &str = "pfp";

async fn read_pfp_field(payload: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|_| ApiError::Validation("Malformed upload payload".to_string()))?
    {
        if field.name() != Some(PFP_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|_| ApiError::Validation("Malformed upload payload".to_string()))?
        {
            bytes.extend_from_slice(&chunk);
        }

        return Ok((content_type, bytes));
    }

    Err(ApiError::Validation(
        "Profile picture not received".to_string(),
    ))
}

pub async fn upload_pfp_handler(
    req: HttpRequest,
    repo: web::Data<Arc<dyn UserRepository>>,
    storage: web::Data<Arc<dyn AvatarStorage>>,
    auth: web::Data<AuthSettings>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut user = resolve_current_user(&req, &auth, repo.get_ref()).await?;

    let (content_type, bytes) = read_pfp_field(&mut payload).await?;

    validate_avatar_upload(&content_type, bytes.len())
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let image_url = storage.put_avatar(&user.id, bytes).await.map_err(|e| {
        error!("Avatar upload failed for {}: {}", user.id, e);
        ApiError::Upstream("Failed to upload avatar".to_string())
    })?;

    user.custom_image = Some(image_url);
    repo.save_user(&mut user).await.map_err(|e| {
        // Accepted inconsistency window: the object is stored but the
        // record was not updated.
        error!(
            "Avatar stored but user record not updated for {}: {}",
            user.id, e
        );
        ApiError::Upstream("Failed to save user".to_string())
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "image": user.display_image().unwrap_or(""),
    })))
}
