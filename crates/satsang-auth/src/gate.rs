//! The authentication gate guarding the admin API.
//!
//! Wraps an [`IdentityProvider`] with opaque session tokens and a
//! current-identity watch channel, so interested parties can observe
//! sign-in/sign-out transitions without polling.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{watch, RwLock};
use uuid::Uuid;

use satsang_core::result::AppResult;
use satsang_core::traits::{Identity, IdentityProvider};

/// A signed-in session.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    /// Opaque bearer token presented on subsequent requests.
    pub token: String,
    /// The resolved identity.
    pub identity: Identity,
}

/// Session gate over an identity provider.
#[derive(Debug, Clone)]
pub struct AuthGate {
    provider: Arc<dyn IdentityProvider>,
    sessions: Arc<RwLock<HashMap<String, Identity>>>,
    current_tx: Arc<watch::Sender<Option<Identity>>>,
}

impl AuthGate {
    /// Create a gate over the given provider.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (current_tx, _) = watch::channel(None);
        Self {
            provider,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            current_tx: Arc::new(current_tx),
        }
    }

    /// Resolve a credential and open a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session> {
        let identity = self.provider.sign_in(email, password).await?;
        let token = Uuid::new_v4().simple().to_string();
        self.sessions
            .write()
            .await
            .insert(token.clone(), identity.clone());
        // send_replace updates the value even with no subscribers, so
        // current_identity stays correct when nobody watches changes.
        self.current_tx.send_replace(Some(identity.clone()));
        tracing::info!(email = %identity.email, "Admin signed in");
        Ok(Session { token, identity })
    }

    /// Close a session. Unknown tokens are a no-op.
    pub async fn sign_out(&self, token: &str) {
        let removed = self.sessions.write().await.remove(token);
        if let Some(identity) = removed {
            tracing::info!(email = %identity.email, "Admin signed out");
            self.current_tx.send_replace(None);
        }
    }

    /// The identity behind a session token, if the session is open.
    pub async fn identity_for(&self, token: &str) -> Option<Identity> {
        self.sessions.read().await.get(token).cloned()
    }

    /// The most recently signed-in identity, if any session is open.
    pub fn current_identity(&self) -> Option<Identity> {
        self.current_tx.borrow().clone()
    }

    /// Subscribe to sign-in/sign-out transitions.
    pub fn on_identity_change(&self) -> watch::Receiver<Option<Identity>> {
        self.current_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryIdentityProvider;

    fn gate() -> AuthGate {
        AuthGate::new(Arc::new(MemoryIdentityProvider::single(
            "admin@satsang.app",
            "lotus",
        )))
    }

    #[tokio::test]
    async fn sign_in_opens_a_session() {
        let gate = gate();
        let session = gate.sign_in("admin@satsang.app", "lotus").await.unwrap();
        let identity = gate.identity_for(&session.token).await.unwrap();
        assert_eq!(identity.email, "admin@satsang.app");
        assert!(gate.current_identity().is_some());
    }

    #[tokio::test]
    async fn bad_credentials_are_rejected() {
        let gate = gate();
        let err = gate.sign_in("admin@satsang.app", "wrong").await.unwrap_err();
        assert_eq!(err.kind, satsang_core::error::ErrorKind::Authentication);
        assert!(gate.current_identity().is_none());
    }

    #[tokio::test]
    async fn sign_out_notifies_subscribers() {
        let gate = gate();
        let mut changes = gate.on_identity_change();
        let session = gate.sign_in("admin@satsang.app", "lotus").await.unwrap();
        changes.changed().await.unwrap();
        assert!(changes.borrow_and_update().is_some());

        gate.sign_out(&session.token).await;
        changes.changed().await.unwrap();
        assert!(changes.borrow_and_update().is_none());
        assert!(gate.identity_for(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn current_identity_tracks_sessions_without_subscribers() {
        // No on_identity_change receiver exists anywhere here.
        let gate = gate();
        let session = gate.sign_in("admin@satsang.app", "lotus").await.unwrap();
        assert!(gate.current_identity().is_some());

        gate.sign_out(&session.token).await;
        assert!(gate.current_identity().is_none());
    }

    #[tokio::test]
    async fn sign_out_of_unknown_token_is_noop() {
        let gate = gate();
        gate.sign_out("ghost").await;
        assert!(gate.current_identity().is_none());
    }
}
