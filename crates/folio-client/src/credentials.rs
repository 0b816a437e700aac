use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApiError;

/// Fixed names of the two durable entries, mirrored as the keys of the
/// on-disk document so other tooling can read them.
pub const ACCESS_TOKEN_KEY: &str = "folio.access_token";
pub const REFRESH_TOKEN_KEY: &str = "folio.refresh_token";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialPair {
    #[serde(rename = "folio.access_token")]
    pub access_token: Option<String>,
    #[serde(rename = "folio.refresh_token")]
    pub refresh_token: Option<String>,
}

/// Durable storage for the credential pair.
pub trait CredentialBackend: Send + Sync {
    fn load(&self) -> Result<CredentialPair, ApiError>;
    fn persist(&self, pair: &CredentialPair) -> Result<(), ApiError>;
}

/// Externally-owned observer of credential mutations (UI session state and
/// the like). Failures are swallowed at the call site; a sink can never fail
/// a token write.
pub trait AuthStateSink: Send + Sync {
    fn auth_state_changed(&self, pair: &CredentialPair) -> Result<(), ApiError>;
}

/// JSON file backend, one document with the two fixed keys.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialBackend for FileBackend {
    fn load(&self) -> Result<CredentialPair, ApiError> {
        if !self.path.exists() {
            return Ok(CredentialPair::default());
        }
        let contents = fs::read_to_string(&self.path)
            .map_err(|err| ApiError::Storage(err.to_string()))?;
        serde_json::from_str(&contents).map_err(|err| ApiError::Storage(err.to_string()))
    }

    fn persist(&self, pair: &CredentialPair) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| ApiError::Storage(err.to_string()))?;
        }
        let contents = serde_json::to_string_pretty(pair)
            .map_err(|err| ApiError::Storage(err.to_string()))?;
        fs::write(&self.path, contents).map_err(|err| ApiError::Storage(err.to_string()))
    }
}

struct NullBackend;

impl CredentialBackend for NullBackend {
    fn load(&self) -> Result<CredentialPair, ApiError> {
        Ok(CredentialPair::default())
    }

    fn persist(&self, _pair: &CredentialPair) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Owner of the credential pair. All reads and writes go through one mutex,
/// so no caller ever observes a half-cleared pair. The in-memory pair is
/// authoritative; backend persistence and sink notification are best-effort
/// side effects of each mutation.
pub struct CredentialStore {
    pair: Mutex<CredentialPair>,
    backend: Box<dyn CredentialBackend>,
    sink: Option<Box<dyn AuthStateSink>>,
}

impl CredentialStore {
    pub fn new(backend: Box<dyn CredentialBackend>) -> Self {
        let pair = backend.load().unwrap_or_else(|err| {
            warn!("failed to load stored credentials: {err}");
            CredentialPair::default()
        });
        Self {
            pair: Mutex::new(pair),
            backend,
            sink: None,
        }
    }

    /// Store without durable persistence. Used by tests and short-lived
    /// unauthenticated consumers.
    pub fn in_memory() -> Self {
        Self::new(Box::new(NullBackend))
    }

    pub fn with_sink(mut self, sink: Box<dyn AuthStateSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    fn locked(&self) -> MutexGuard<'_, CredentialPair> {
        self.pair.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn access_token(&self) -> Option<String> {
        self.locked().access_token.clone()
    }

    /// Copy of the whole pair taken under one lock acquisition, so the two
    /// tokens are from the same instant.
    pub fn snapshot(&self) -> CredentialPair {
        self.locked().clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.locked().refresh_token.clone()
    }

    pub fn set_access_token(&self, token: &str) {
        let snapshot = {
            let mut pair = self.locked();
            pair.access_token = Some(token.to_string());
            self.persist_locked(&pair);
            pair.clone()
        };
        self.notify(&snapshot);
    }

    pub fn set_refresh_token(&self, token: &str) {
        let snapshot = {
            let mut pair = self.locked();
            pair.refresh_token = Some(token.to_string());
            self.persist_locked(&pair);
            pair.clone()
        };
        self.notify(&snapshot);
    }

    /// Store both tokens in one mutation (login).
    pub fn set_tokens(&self, access_token: &str, refresh_token: &str) {
        let snapshot = {
            let mut pair = self.locked();
            pair.access_token = Some(access_token.to_string());
            pair.refresh_token = Some(refresh_token.to_string());
            self.persist_locked(&pair);
            pair.clone()
        };
        self.notify(&snapshot);
    }

    /// Remove both tokens. Concurrent readers see either the full pair or
    /// nothing, never one token without the other.
    pub fn clear(&self) {
        let snapshot = {
            let mut pair = self.locked();
            pair.access_token = None;
            pair.refresh_token = None;
            self.persist_locked(&pair);
            pair.clone()
        };
        debug!("credentials cleared");
        self.notify(&snapshot);
    }

    fn persist_locked(&self, pair: &CredentialPair) {
        if let Err(err) = self.backend.persist(pair) {
            warn!("failed to persist credentials: {err}");
        }
    }

    fn notify(&self, pair: &CredentialPair) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        if let Err(err) = sink.auth_state_changed(pair) {
            warn!("auth state sink failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    struct FailingSink {
        calls: Arc<AtomicUsize>,
    }

    impl AuthStateSink for FailingSink {
        fn auth_state_changed(&self, _pair: &CredentialPair) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::Storage("sink down".to_string()))
        }
    }

    #[test]
    fn clear_removes_both_tokens() {
        let store = CredentialStore::in_memory();
        store.set_tokens("access-1", "refresh-1");
        assert_eq!(store.access_token().as_deref(), Some("access-1"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));

        store.clear();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }

    #[test]
    fn file_backend_round_trips_fixed_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("credentials.json");

        let store = CredentialStore::new(Box::new(FileBackend::new(&path)));
        store.set_tokens("access-1", "refresh-1");

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read"))
                .expect("parse");
        assert_eq!(raw[ACCESS_TOKEN_KEY], "access-1");
        assert_eq!(raw[REFRESH_TOKEN_KEY], "refresh-1");

        let reloaded = CredentialStore::new(Box::new(FileBackend::new(&path)));
        assert_eq!(reloaded.access_token().as_deref(), Some("access-1"));
        assert_eq!(reloaded.refresh_token().as_deref(), Some("refresh-1"));
    }

    #[test]
    fn sink_failure_never_fails_the_write() {
        let calls = Arc::new(AtomicUsize::new(0));
        let store = CredentialStore::in_memory().with_sink(Box::new(FailingSink {
            calls: Arc::clone(&calls),
        }));

        store.set_access_token("access-1");
        store.clear();

        assert_eq!(store.access_token(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn corrupt_backend_falls_back_to_empty_pair() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "not json").expect("write");

        let store = CredentialStore::new(Box::new(FileBackend::new(&path)));
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }
}
