//! # folio-api
//!
//! HTTP surface of the portfolio service: settings save, avatar upload,
//! lead capture, and public profile reads. Handlers receive their
//! collaborators (`UserRepository`, `AvatarStorage`, `LeadRepository`,
//! `Mailer`) as `web::Data<Arc<dyn ...>>`, so tests run against the
//! in-memory doubles from `folio-store` and `folio-mail`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod session;

pub use error::ApiError;
pub use routes::configure_routes;
