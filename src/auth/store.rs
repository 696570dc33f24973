use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use tokio::sync::watch;

/// Auth lifecycle notifications published to interested components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    LoggedIn,
    LoggedOut,
    /// The backend rejected the token with 401; the session is gone
    SessionExpired,
}

/// File-backed bearer-token store, injected explicitly into every component
/// that needs it. Auth changes propagate over a typed watch channel rather
/// than ambient global state.
#[derive(Clone)]
pub struct AuthStore {
    path: PathBuf,
    events: Arc<watch::Sender<AuthEvent>>,
}

impl AuthStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let initial = if path.exists() {
            AuthEvent::LoggedIn
        } else {
            AuthEvent::LoggedOut
        };
        let (events, _) = watch::channel(initial);

        Self {
            path,
            events: Arc::new(events),
        }
    }

    /// Store path from the environment, falling back to a dotfile in the
    /// working directory
    pub fn from_env() -> Self {
        let path = std::env::var("REVIEW_TOKEN_PATH")
            .unwrap_or_else(|_| ".review_dashboard_token".to_string());
        Self::new(path)
    }

    /// Current token, re-read from disk before each request
    pub fn token(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    pub fn store_token(&self, token: &str) -> Result<()> {
        fs::write(&self.path, token.trim())
            .with_context(|| format!("Failed to write token to {}", self.path.display()))?;
        info!("Stored auth token at {}", self.path.display());
        let _ = self.events.send(AuthEvent::LoggedIn);
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.remove_token_file()?;
        let _ = self.events.send(AuthEvent::LoggedOut);
        Ok(())
    }

    /// Global 401 rule: drop the token and tell everyone the session died
    pub fn expire_session(&self) -> Result<()> {
        self.remove_token_file()?;
        let _ = self.events.send(AuthEvent::SessionExpired);
        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    fn remove_token_file(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove token at {}", self.path.display()))?;
            info!("Cleared auth token at {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> AuthStore {
        let path = std::env::temp_dir().join(format!(
            "review-dashboard-test-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        AuthStore::new(path)
    }

    #[test]
    fn round_trips_token_through_disk() {
        let store = temp_store("roundtrip");
        assert_eq!(store.token(), None);

        store.store_token("  secret-token \n").unwrap();
        assert_eq!(store.token().as_deref(), Some("secret-token"));

        store.clear().unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn publishes_typed_auth_events() {
        let store = temp_store("events");
        let mut events = store.subscribe();
        assert_eq!(*events.borrow(), AuthEvent::LoggedOut);

        store.store_token("abc").unwrap();
        assert_eq!(*events.borrow_and_update(), AuthEvent::LoggedIn);

        store.expire_session().unwrap();
        assert_eq!(*events.borrow_and_update(), AuthEvent::SessionExpired);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn clearing_without_token_is_a_noop() {
        let store = temp_store("noop");
        store.clear().unwrap();
        assert_eq!(store.token(), None);
    }
}
