//! HTTP gateway for the Folio portfolio backend.
//!
//! Every call funnels through [`ApiClient`]: attach credentials, execute with
//! a bounded timeout, normalize the response envelope, and on an expired
//! access token refresh once through a single-flight coordinator before
//! retrying the original request.

#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

mod client;
mod credentials;
mod error;
mod refresh;
mod request;
mod response;

pub use client::ApiClient;
pub use credentials::{
    AuthStateSink, CredentialBackend, CredentialPair, CredentialStore, FileBackend,
    ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
pub use error::ApiError;
pub use request::RequestDescriptor;
