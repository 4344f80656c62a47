//! Users Service Config

use std::time::Duration;

use clap::Args;

use cart_app::users::UsersClientConfig;

/// Users service connection settings.
#[derive(Debug, Args)]
pub struct UsersServiceConfig {
    /// Base URL of the Users service
    #[arg(long, env = "USERS_SERVICE_URL", default_value = "http://localhost:9001")]
    pub users_service_url: String,

    /// Per-request timeout for Users service calls, in milliseconds
    #[arg(long, env = "USERS_SERVICE_TIMEOUT_MS", default_value_t = 2_000_u64)]
    pub users_service_timeout_ms: u64,
}

impl UsersServiceConfig {
    #[must_use]
    pub fn client_config(&self) -> UsersClientConfig {
        UsersClientConfig {
            base_url: self.users_service_url.clone(),
            timeout: Duration::from_millis(self.users_service_timeout_ms),
        }
    }
}
