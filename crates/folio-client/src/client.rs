use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::credentials::CredentialStore;
use crate::error::ApiError;
use crate::refresh::RefreshCoordinator;
use crate::request::{execute, RequestDescriptor};
use crate::response::normalize;

/// The gateway facade. Constructed once at startup and handed by reference to
/// every consumer: one instance means one refresh coordinator, which is what
/// keeps the single-flight guarantee.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<CredentialStore>,
    refresher: RefreshCoordinator,
}

impl ApiClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Arc<CredentialStore>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            credentials,
            refresher: RefreshCoordinator::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Execute a descriptor with the full recovery policy: on a 401 for an
    /// authenticated request, refresh once through the coordinator and retry
    /// the identical descriptor exactly once. The second outcome is final,
    /// whatever it is.
    pub async fn request(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        let sent_access = self.credentials.access_token();
        let response =
            execute(&self.http, &self.base_url, sent_access.as_deref(), &descriptor).await?;
        match normalize(response).await {
            Err(ApiError::Unauthorized) if !descriptor.skip_auth => {
                info!(path = %descriptor.path, "access token rejected; attempting refresh");
                // The coordinator gets the token this attempt was sent with,
                // so a cycle that settled since then counts as the refresh.
                let refreshed = self
                    .refresher
                    .ensure_fresh_credentials(
                        &self.http,
                        &self.base_url,
                        &self.credentials,
                        sent_access.as_deref(),
                    )
                    .await;
                if !refreshed {
                    // Idempotent with the coordinator's own clearing; also
                    // covers the no-refresh-token case where no cycle ran.
                    self.credentials.clear();
                    return Err(ApiError::SessionExpired);
                }
                let fresh_access = self.credentials.access_token();
                let retry =
                    execute(&self.http, &self.base_url, fresh_access.as_deref(), &descriptor)
                        .await?;
                normalize(retry).await
            }
            other => other,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.request(RequestDescriptor::new(Method::GET, path)).await?;
        decode(value)
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiError> {
        let value = self
            .request(RequestDescriptor::new(Method::POST, path).with_body(body))
            .await?;
        decode(value)
    }

    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiError> {
        let value = self
            .request(RequestDescriptor::new(Method::PUT, path).with_body(body))
            .await?;
        decode(value)
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiError> {
        let value = self
            .request(RequestDescriptor::new(Method::PATCH, path).with_body(body))
            .await?;
        decode(value)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self
            .request(RequestDescriptor::new(Method::DELETE, path))
            .await?;
        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::MalformedResponse(err.to_string()))
}
