//! Identity Service
//!
//! Process-wide optional signed-in identity with change notification.
//! Anonymous use is a fully supported mode, not an error: with no identity the
//! app simply runs without history.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// A signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque owner id used by the history store.
    pub id: String,
    /// Display label (e.g. an email address).
    pub label: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Holds the current identity and notifies subscribers when it changes.
pub struct IdentityService {
    sender: watch::Sender<Option<Identity>>,
}

impl IdentityService {
    /// Create a service with no signed-in identity.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Replace the current identity.
    pub fn sign_in(&self, identity: Identity) {
        tracing::info!(id = %identity.id, "identity signed in");
        let _ = self.sender.send(Some(identity));
    }

    /// Clear the current identity.
    pub fn sign_out(&self) {
        tracing::info!("identity signed out");
        let _ = self.sender.send(None);
    }

    /// The current identity, if any.
    pub fn current(&self) -> Option<Identity> {
        self.sender.borrow().clone()
    }

    /// Subscribe to identity changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.sender.subscribe()
    }
}

impl Default for IdentityService {
    fn default() -> Self {
        Self::new()
    }
}
