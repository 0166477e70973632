//! Per-request session resolution.
//!
//! Session issuance lives with the external auth provider; this module
//! only verifies the HS256 token it issued and resolves the acting user
//! from the store. Called once per authenticated request. Every
//! authentication failure collapses to the same 401 so responses never
//! reveal whether an account exists.

use std::sync::Arc;

use actix_web::HttpRequest;
use folio_commons::config::AuthSettings;
use folio_commons::{User, UserId};
use folio_store::UserRepository;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Claims carried by the provider-issued session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: String,
    /// Expiration, Unix seconds.
    pub exp: u64,
    /// Issued at, Unix seconds.
    #[serde(default)]
    pub iat: u64,
}

fn bearer_token(req: &HttpRequest, cookie_name: &str) -> Option<String> {
    if let Some(header) = req.headers().get("Authorization") {
        let header = header.to_str().ok()?;
        let token = header.strip_prefix("Bearer ")?.trim();
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }
    req.cookie(cookie_name).map(|c| c.value().to_string())
}

/// Resolve the authenticated user for this request.
pub async fn resolve_current_user(
    req: &HttpRequest,
    auth: &AuthSettings,
    repo: &Arc<dyn UserRepository>,
) -> Result<User, ApiError> {
    let token = bearer_token(req, &auth.cookie_name).ok_or_else(|| {
        debug!("Request without session token");
        ApiError::Unauthorized
    })?;

    let claims = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| {
        debug!("Session token rejected: {}", e);
        ApiError::Unauthorized
    })?
    .claims;

    let user_id = UserId::new(claims.sub);
    match repo.get_user(&user_id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            debug!("Session user {} not found in store", user_id);
            Err(ApiError::Unauthorized)
        }
        Err(e) => {
            error!("User lookup failed during session resolution: {}", e);
            Err(ApiError::Upstream("Internal error".to_string()))
        }
    }
}
