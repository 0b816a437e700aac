use std::sync::{Mutex, PoisonError};

use reqwest::Method;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use folio_core::api::auth::{RefreshRequest, RefreshResponse};

use crate::credentials::CredentialStore;
use crate::error::ApiError;
use crate::request::{execute, RequestDescriptor};
use crate::response::normalize;

pub(crate) const REFRESH_PATH: &str = "/auth/refresh";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Refreshing,
}

struct State {
    mode: Mode,
    waiters: Vec<oneshot::Sender<bool>>,
}

/// Single-flight refresh. However many callers hit a 401 at once, exactly one
/// refresh request reaches the auth endpoint; everyone else parks on a waiter
/// and shares its outcome.
pub(crate) struct RefreshCoordinator {
    state: Mutex<State>,
}

enum Role {
    Leader(String),
    Waiter(oneshot::Receiver<bool>),
}

impl RefreshCoordinator {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(State {
                mode: Mode::Idle,
                waiters: Vec::new(),
            }),
        }
    }

    /// Returns `true` once a fresh access token is in the store, `false` when
    /// the session is beyond recovery (no refresh token, or the refresh
    /// itself failed, in which case the store has been cleared).
    ///
    /// `sent_access` is the token the failing request went out with. A 401
    /// for a token the store no longer holds means a cycle settled between
    /// that response and this call; the rotated token is already in place
    /// and the caller can retry without a new cycle.
    pub(crate) async fn ensure_fresh_credentials(
        &self,
        client: &reqwest::Client,
        base_url: &str,
        store: &CredentialStore,
        sent_access: Option<&str>,
    ) -> bool {
        // Staleness check, mode check and enqueue/claim all happen in one
        // critical section; the lock is never held across an await. Two
        // callers arriving together cannot both claim leadership, and a
        // caller arriving after a settled cycle cannot start a second one
        // for the same stale token.
        let role = {
            let mut state = self.lock_state();
            let snapshot = store.snapshot();
            let Some(refresh_token) = snapshot.refresh_token else {
                return false;
            };
            if snapshot.access_token.as_deref() != sent_access {
                return true;
            }
            match state.mode {
                Mode::Refreshing => {
                    let (tx, rx) = oneshot::channel();
                    state.waiters.push(tx);
                    Role::Waiter(rx)
                }
                Mode::Idle => {
                    state.mode = Mode::Refreshing;
                    Role::Leader(refresh_token)
                }
            }
        };

        match role {
            Role::Waiter(rx) => {
                debug!("token refresh already in flight; waiting");
                // The cycle settles every waiter before going idle, so a
                // dropped sender is unreachable short of a panic mid-cycle.
                rx.await.unwrap_or(false)
            }
            Role::Leader(refresh_token) => {
                let refreshed =
                    match request_new_access_token(client, base_url, refresh_token).await {
                        Ok(access_token) => {
                            store.set_access_token(&access_token);
                            debug!("access token refreshed");
                            true
                        }
                        Err(err) => {
                            // A refresh token the server will not honor is
                            // treated as permanently invalid, transient
                            // failures included.
                            warn!("token refresh failed: {err}");
                            store.clear();
                            false
                        }
                    };

                let mut state = self.lock_state();
                for waiter in state.waiters.drain(..) {
                    let _ = waiter.send(refreshed);
                }
                state.mode = Mode::Idle;
                drop(state);

                refreshed
            }
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn request_new_access_token(
    client: &reqwest::Client,
    base_url: &str,
    refresh_token: String,
) -> Result<String, ApiError> {
    let body = serde_json::to_value(RefreshRequest { refresh_token })
        .map_err(|err| ApiError::MalformedResponse(err.to_string()))?;
    let descriptor = RequestDescriptor::new(Method::POST, REFRESH_PATH)
        .with_body(body)
        .without_auth();

    let response = execute(client, base_url, None, &descriptor).await?;
    let payload = normalize(response).await?;
    let refresh: RefreshResponse = serde_json::from_value(payload)
        .map_err(|err| ApiError::MalformedResponse(err.to_string()))?;
    Ok(refresh.access_token)
}

#[cfg(test)]
mod tests {
    use mockito::Server;

    use super::*;

    #[tokio::test]
    async fn settled_rotation_short_circuits_a_second_cycle() {
        let mut server = Server::new_async().await;
        let refresh_mock = server
            .mock("POST", REFRESH_PATH)
            .expect(0)
            .create_async()
            .await;

        // The failing request went out with "stale", but a full cycle has
        // already rotated the store by the time this caller engages.
        let store = CredentialStore::in_memory();
        store.set_tokens("fresh", "refresh-1");

        let coordinator = RefreshCoordinator::new();
        let refreshed = coordinator
            .ensure_fresh_credentials(
                &reqwest::Client::new(),
                &server.url(),
                &store,
                Some("stale"),
            )
            .await;

        assert!(refreshed);
        assert_eq!(store.access_token().as_deref(), Some("fresh"));
        refresh_mock.assert_async().await;
    }
}
