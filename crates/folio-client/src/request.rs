use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// One HTTP request, immutable once constructed. `skip_auth` leaves the
/// Authorization header off; login and refresh calls use it so their own
/// 401s never recurse into the refresh path.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub timeout: Duration,
    pub skip_auth: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            timeout: DEFAULT_TIMEOUT,
            skip_auth: false,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn without_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }
}

/// Issue the request. The caller supplies the bearer token for this attempt,
/// so a retry after refresh hands in the rotated value explicitly. Dropping
/// the returned future (reqwest's timeout does this internally) aborts the
/// in-flight connection rather than leaving it to complete stale.
pub(crate) async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    bearer: Option<&str>,
    descriptor: &RequestDescriptor,
) -> Result<reqwest::Response, ApiError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), descriptor.path);
    let mut builder = client
        .request(descriptor.method.clone(), &url)
        .timeout(descriptor.timeout)
        .header(CONTENT_TYPE, "application/json");
    if !descriptor.skip_auth {
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
    }
    if let Some(body) = &descriptor.body {
        builder = builder.json(body);
    }

    debug!(method = %descriptor.method, url = %url, "http request");
    let start = Instant::now();
    let response = builder.send().await.map_err(classify_transport)?;
    debug!(
        method = %descriptor.method,
        url = %url,
        status = %response.status(),
        elapsed_ms = start.elapsed().as_millis(),
        "http response"
    );
    Ok(response)
}

fn classify_transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::NetworkUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_defaults() {
        let descriptor = RequestDescriptor::new(Method::GET, "/projects");
        assert_eq!(descriptor.timeout, DEFAULT_TIMEOUT);
        assert!(!descriptor.skip_auth);
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn without_auth_marks_descriptor() {
        let descriptor = RequestDescriptor::new(Method::POST, "/auth/login")
            .with_body(serde_json::json!({"email": "a@b.c"}))
            .without_auth();
        assert!(descriptor.skip_auth);
        assert!(descriptor.body.is_some());
    }
}
