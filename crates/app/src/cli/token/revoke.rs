use clap::Args;

use cart_app::auth::{ApiTokenUuid, PgAuthService};

#[derive(Debug, Args)]
pub(crate) struct RevokeTokenArgs {
    /// Token to revoke
    #[arg(long)]
    token_uuid: ApiTokenUuid,
}

pub(crate) async fn run(auth: &PgAuthService, args: RevokeTokenArgs) -> Result<(), String> {
    let revoked = auth
        .revoke_api_token(args.token_uuid)
        .await
        .map_err(|error| format!("failed to revoke token: {error}"))?;

    if revoked {
        println!("revoked {}", args.token_uuid);
    } else {
        println!("{} is unknown or already revoked", args.token_uuid);
    }

    Ok(())
}
