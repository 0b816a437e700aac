use tracing::warn;

use folio_client::ApiClient;

use super::http::{login, logout};
use crate::cli_args::LoginArgs;

pub(crate) async fn handle_login(args: LoginArgs, api: &ApiClient) -> anyhow::Result<()> {
    let tokens = login(api, args.email, args.password).await?;
    api.credentials()
        .set_tokens(&tokens.access_token, &tokens.refresh_token);
    println!("Logged in");
    Ok(())
}

pub(crate) async fn handle_logout(api: &ApiClient) -> anyhow::Result<()> {
    // Server-side revocation is best effort; local credentials go regardless.
    if let Some(refresh_token) = api.credentials().refresh_token() {
        if let Err(err) = logout(api, refresh_token).await {
            warn!("server-side logout failed: {err}");
        }
    }
    api.credentials().clear();
    println!("Logged out");
    Ok(())
}
