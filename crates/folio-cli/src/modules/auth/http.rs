use reqwest::Method;

use folio_client::{ApiClient, RequestDescriptor};
use folio_core::api::auth::{AuthTokens, LoginRequest, LogoutRequest};

pub(crate) async fn login(
    api: &ApiClient,
    email: String,
    password: String,
) -> anyhow::Result<AuthTokens> {
    let body = serde_json::to_value(LoginRequest { email, password })?;
    let descriptor = RequestDescriptor::new(Method::POST, "/auth/login")
        .with_body(body)
        .without_auth();
    let payload = api.request(descriptor).await?;
    Ok(serde_json::from_value(payload)?)
}

pub(crate) async fn logout(api: &ApiClient, refresh_token: String) -> anyhow::Result<()> {
    let body = serde_json::to_value(LogoutRequest { refresh_token })?;
    let descriptor = RequestDescriptor::new(Method::POST, "/auth/logout").with_body(body);
    api.request(descriptor).await?;
    Ok(())
}
