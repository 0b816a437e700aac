use std::fs;
use std::path::PathBuf;

use folio_client::{ApiError, AuthStateSink, CredentialPair};
use serde_json::{json, Value};

/// Mirrors the credential pair into the session snapshot other tooling reads.
/// The blob is externally owned: only `state.token`, `state.refreshToken` and
/// `state.isAuthenticated` are patched; everything else (notably
/// `state.user`) is left as found.
pub(crate) struct SessionStateFile {
    path: PathBuf,
}

impl SessionStateFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AuthStateSink for SessionStateFile {
    fn auth_state_changed(&self, pair: &CredentialPair) -> Result<(), ApiError> {
        let mut blob: Value = fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_else(|| json!({ "state": {} }));
        if !blob.is_object() {
            blob = json!({ "state": {} });
        }
        if !blob
            .get("state")
            .map(Value::is_object)
            .unwrap_or(false)
        {
            blob["state"] = json!({});
        }

        let state = &mut blob["state"];
        state["token"] = pair
            .access_token
            .as_deref()
            .map(Value::from)
            .unwrap_or(Value::Null);
        state["refreshToken"] = pair
            .refresh_token
            .as_deref()
            .map(Value::from)
            .unwrap_or(Value::Null);
        state["isAuthenticated"] = Value::from(pair.access_token.is_some());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| ApiError::Storage(err.to_string()))?;
        }
        let contents = serde_json::to_string_pretty(&blob)
            .map_err(|err| ApiError::Storage(err.to_string()))?;
        fs::write(&self.path, contents).map_err(|err| ApiError::Storage(err.to_string()))
    }
}
