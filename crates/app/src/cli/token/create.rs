use clap::Args;
use jiff::Timestamp;

use cart_app::auth::PgAuthService;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// Optional expiry (RFC 3339); must lie in the future
    #[arg(long, value_parser = parse_future_timestamp)]
    expires_at: Option<Timestamp>,
}

pub(crate) async fn run(auth: &PgAuthService, args: CreateTokenArgs) -> Result<(), String> {
    let issued = auth
        .issue_api_token(args.expires_at)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    let record = &issued.record;

    println!("token_uuid: {}", record.uuid);
    println!("created_at: {}", record.created_at);

    if let Some(expires_at) = record.expires_at {
        println!("expires_at: {expires_at}");
    }

    println!();
    println!("{}", issued.token);
    println!();
    println!("The token above is shown only once. Store it securely.");

    Ok(())
}

fn parse_future_timestamp(raw: &str) -> Result<Timestamp, String> {
    let timestamp = raw
        .parse::<Timestamp>()
        .map_err(|error| format!("invalid timestamp: {error}"))?;

    if timestamp <= Timestamp::now() {
        return Err("expiry must be in the future".to_string());
    }

    Ok(timestamp)
}
