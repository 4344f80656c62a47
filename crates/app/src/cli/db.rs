use clap::{Args, Subcommand};

use cart_app::database;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    /// PostgreSQL connection string
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    action: DbAction,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum DbAction {
    /// Apply every migration the database has not seen yet
    Migrate,
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    let url = command
        .database_url
        .ok_or("DATABASE_URL or --database-url is required")?;

    let pool = database::connect(&url)
        .await
        .map_err(|error| format!("could not connect to the database: {error}"))?;

    match command.action {
        DbAction::Migrate => {
            database::migrate(&pool)
                .await
                .map_err(|error| format!("migration failed: {error}"))?;

            println!("database schema is up to date");
        }
    }

    Ok(())
}
