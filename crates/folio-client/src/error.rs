use thiserror::Error;

/// Classified outcome of a gateway call.
///
/// `Unauthorized` is the only variant the client recovers from internally
/// (refresh-and-retry); everything else propagates to the caller untouched.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("{message}")]
    Business { status: u16, message: String },
    #[error("session expired; log in again")]
    SessionExpired,
    #[error("credential storage failed: {0}")]
    Storage(String),
}

impl ApiError {
    /// Status code for business rejections, `None` for transport-level and
    /// auth failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Business { status, .. } => Some(*status),
            _ => None,
        }
    }
}
