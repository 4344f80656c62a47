use jiff::Timestamp;

use cart_app::auth::PgAuthService;

pub(crate) async fn run(auth: &PgAuthService) -> Result<(), String> {
    let tokens = auth
        .list_api_tokens()
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        println!("no tokens issued");
        return Ok(());
    }

    println!("{:<36}  {:<8}  {:<28}  LAST USED", "UUID", "STATUS", "CREATED");

    let now = Timestamp::now();

    for token in &tokens {
        println!(
            "{:<36}  {:<8}  {:<28}  {}",
            token.uuid,
            token.status(now),
            token.created_at,
            token
                .last_used_at
                .map_or_else(|| "never".to_string(), |at| at.to_string()),
        );
    }

    Ok(())
}
