//! Operator commands for the shopping cart service.

use clap::{Parser, Subcommand};

mod db;
mod token;

#[derive(Debug, Parser)]
#[command(name = "cart-app", about = "Shopping cart administration", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage API bearer tokens
    Token(token::TokenCommand),

    /// Database maintenance
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Token(command) => token::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoke_requires_a_valid_token_uuid() {
        let result = Cli::try_parse_from(["cart-app", "token", "revoke", "--token-uuid", "nope"]);

        assert!(result.is_err(), "expected a parse error, got {result:?}");
    }

    #[test]
    fn token_database_url_is_accepted_after_the_subcommand() {
        let result = Cli::try_parse_from([
            "cart-app",
            "token",
            "list",
            "--database-url",
            "postgres://localhost/cart",
        ]);

        assert!(result.is_ok(), "expected a parsed command, got {result:?}");
    }

    #[test]
    fn db_migrate_parses_without_further_arguments() {
        let result = Cli::try_parse_from(["cart-app", "db", "migrate"]);

        assert!(result.is_ok(), "expected a parsed command, got {result:?}");
    }
}
