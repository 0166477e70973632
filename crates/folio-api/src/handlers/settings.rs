//! Settings save handler.
//!
//! POST /api/upload/settings — re-validates the partial payload with the
//! exact engine the client ran, merges it into the stored record, and
//! persists only when something actually changed.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use folio_commons::config::AuthSettings;
use folio_commons::SettingsPatch;
use folio_core::{merge_settings, validate_settings};
use folio_store::{StoreError, UserRepository};
use log::error;
use serde_json::json;

use crate::error::ApiError;
use crate::session::resolve_current_user;

pub async fn upload_settings_handler(
    req: HttpRequest,
    repo: web::Data<Arc<dyn UserRepository>>,
    auth: web::Data<AuthSettings>,
    body: web::Json<SettingsPatch>,
) -> Result<HttpResponse, ApiError> {
    let mut user = resolve_current_user(&req, &auth, repo.get_ref()).await?;

    let patch = body.into_inner();

    // Authoritative validation pass; the client-side run was an
    // optimization, not a security boundary.
    let validity = validate_settings(&patch, None);
    if !validity.valid {
        return Err(ApiError::Validation(
            validity.message.unwrap_or("Invalid settings").to_string(),
        ));
    }

    let outcome = merge_settings(&mut user, patch);
    if outcome.changed {
        repo.save_user(&mut user).await.map_err(|e| match e {
            StoreError::DuplicatePath => ApiError::Validation("Path is already taken".to_string()),
            StoreError::DuplicatePlatform(platform) => {
                ApiError::Validation(format!("Duplicate social link platform: {}", platform))
            }
            other => {
                error!("Failed to save user {}: {}", user.id, other);
                ApiError::Upstream("Failed to save user".to_string())
            }
        })?;
    }

    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
