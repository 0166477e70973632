//! Request handlers, one module per endpoint.

pub mod lead;
pub mod pfp;
pub mod profile;
pub mod settings;

pub use lead::lead_handler;
pub use pfp::upload_pfp_handler;
pub use profile::profile_handler;
pub use settings::upload_settings_handler;
