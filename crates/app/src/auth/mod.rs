//! API tokens: issuing, listing, revoking and bearer authentication.

mod errors;
mod models;
mod repository;
mod service;
mod token;

pub use errors::AuthServiceError;
pub use models::{ApiTokenRecord, ApiTokenStatus, ApiTokenUuid, IssuedApiToken};
pub use service::{AuthService, MockAuthService, PgAuthService};
pub use token::{ApiToken, ApiTokenError};
