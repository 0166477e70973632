//! Lead capture handler.
//!
//! POST /api/lead — public, no session required. Submitting an email that
//! is already on the list is a success, and only the first submission
//! triggers the welcome email.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use folio_commons::Lead;
use folio_mail::{EmailMessage, Mailer};
use folio_store::{LeadRepository, StoreError};
use log::{error, info};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;

const WELCOME_SUBJECT: &str = "Thanks for signing up!";
const WELCOME_BODY: &str = "We'll keep you updated with the latest news.";

#[derive(Debug, Deserialize)]
pub struct LeadRequest {
    pub email: Option<String>,
}

pub async fn lead_handler(
    repo: web::Data<Arc<dyn LeadRepository>>,
    mailer: web::Data<Arc<dyn Mailer>>,
    body: web::Json<LeadRequest>,
) -> Result<HttpResponse, ApiError> {
    let email = body
        .into_inner()
        .email
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Email is required".to_string()))?;

    let existing = repo.find_by_email(&email).await.map_err(|e| {
        error!("Lead lookup failed: {}", e);
        ApiError::Upstream("Failed to save lead".to_string())
    })?;
    if existing.is_some() {
        return Ok(HttpResponse::Ok().json(json!({})));
    }

    let lead = Lead::new(&email, chrono::Utc::now().timestamp_millis());
    match repo.insert(&lead).await {
        Ok(()) => {}
        // Lost the insert race; same outcome as finding it up front.
        Err(StoreError::DuplicateEmail) => {
            return Ok(HttpResponse::Ok().json(json!({})));
        }
        Err(e) => {
            error!("Lead insert failed: {}", e);
            return Err(ApiError::Upstream("Failed to save lead".to_string()));
        }
    }

    mailer
        .send(EmailMessage {
            to: email.clone(),
            subject: WELCOME_SUBJECT.to_string(),
            text: WELCOME_BODY.to_string(),
            reply_to: None,
        })
        .await
        .map_err(|e| {
            error!("Welcome email to {} failed: {}", email, e);
            ApiError::Upstream("Failed to send welcome email".to_string())
        })?;

    info!("New lead captured: {}", email);
    Ok(HttpResponse::Ok().json(json!({})))
}
