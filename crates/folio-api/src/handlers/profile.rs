//! Public profile lookup.
//!
//! GET /api/profile/{path} — unauthenticated read of a published profile
//! by its URL slug. Internal fields (the account id, the raw image pair)
//! stay out of the response.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use folio_commons::{Project, SocialLink, User};
use folio_store::UserRepository;
use log::error;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub projects: Vec<Project>,
}

impl From<User> for PublicProfile {
    fn from(user: User) -> Self {
        let image = user.display_image().map(str::to_string);
        Self {
            name: user.name,
            role: user.role,
            location: user.location,
            bio: user.bio,
            image,
            social_links: user.social_links,
            projects: user.projects,
        }
    }
}

pub async fn profile_handler(
    repo: web::Data<Arc<dyn UserRepository>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let slug = path.into_inner().to_lowercase();
    let user = repo.get_user_by_path(&slug).await.map_err(|e| {
        error!("Profile lookup for {} failed: {}", slug, e);
        ApiError::Upstream("Internal error".to_string())
    })?;

    match user {
        Some(user) => Ok(HttpResponse::Ok().json(PublicProfile::from(user))),
        None => Err(ApiError::NotFound),
    }
}
