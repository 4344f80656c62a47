//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    server::ListenConfig,
    telemetry::{LoggingConfig, TracingConfig},
    users::UsersServiceConfig,
};

pub(crate) mod db;
pub(crate) mod server;
pub(crate) mod telemetry;
pub(crate) mod users;

/// Shopping cart JSON API server configuration
#[derive(Debug, Parser)]
#[command(name = "cart-json", about = "Shopping Cart JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ListenConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Trace export settings.
    #[command(flatten)]
    pub tracing: TracingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Users service connection settings.
    #[command(flatten)]
    pub users: UsersServiceConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.bind_address()
    }
}
