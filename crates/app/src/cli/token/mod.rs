//! API token management.

use clap::{Args, Subcommand};

use cart_app::{auth::PgAuthService, database};

mod create;
mod list;
mod revoke;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    /// PostgreSQL connection string
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Issue a new bearer token and print it once
    Create(create::CreateTokenArgs),

    /// Show every issued token without its secret
    List,

    /// Revoke a token so it no longer authenticates
    Revoke(revoke::RevokeTokenArgs),
}

pub(crate) async fn run(command: TokenCommand) -> Result<(), String> {
    let database_url = command
        .database_url
        .ok_or_else(|| "--database-url or DATABASE_URL is required".to_string())?;

    let pool = database::connect(&database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let auth = PgAuthService::new(pool);

    match command.command {
        TokenSubcommand::Create(args) => create::run(&auth, args).await,
        TokenSubcommand::List => list::run(&auth).await,
        TokenSubcommand::Revoke(args) => revoke::run(&auth, args).await,
    }
}
