use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use tracing::{info, warn};

use super::errors::{ClientError, ClientResult};
use super::types::UserRecord;

pub const SESSION_STORAGE_KEY: &str = "auth_session";

/// Token and user kept after a successful login or registration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserRecord,
}

/// Receives the session once the wizard authenticates
pub trait SessionSink {
    fn login(&self, token: &str, user: &UserRecord) -> ClientResult<()>;

    fn logout(&self) -> ClientResult<()>;

    fn current(&self) -> ClientResult<Option<StoredSession>>;
}

/// Session persisted in browser localStorage
#[derive(Debug, Clone)]
pub struct BrowserSession {
    storage_key: String,
}

impl BrowserSession {
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
        }
    }
}

impl Default for BrowserSession {
    fn default() -> Self {
        Self::new(SESSION_STORAGE_KEY)
    }
}

impl SessionSink for BrowserSession {
    fn login(&self, token: &str, user: &UserRecord) -> ClientResult<()> {
        let session = StoredSession {
            token: token.to_string(),
            user: user.clone(),
        };

        LocalStorage::set(&self.storage_key, &session).map_err(|e| ClientError::Storage {
            message: format!("Failed to store session in localStorage: {:?}", e),
        })?;

        info!("Session stored for user: {}", user.id);
        Ok(())
    }

    fn logout(&self) -> ClientResult<()> {
        LocalStorage::delete(&self.storage_key);
        info!("Session cleared");
        Ok(())
    }

    fn current(&self) -> ClientResult<Option<StoredSession>> {
        match LocalStorage::get::<StoredSession>(&self.storage_key) {
            Ok(session) => Ok(Some(session)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => {
                warn!("Discarding unreadable stored session: {:?}", e);
                LocalStorage::delete(&self.storage_key);
                Ok(None)
            }
        }
    }
}

/// Process-local session, for tests and hosts without browser storage
#[derive(Debug, Default)]
pub struct InMemorySession {
    session: RefCell<Option<StoredSession>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionSink for InMemorySession {
    fn login(&self, token: &str, user: &UserRecord) -> ClientResult<()> {
        *self.session.borrow_mut() = Some(StoredSession {
            token: token.to_string(),
            user: user.clone(),
        });
        Ok(())
    }

    fn logout(&self) -> ClientResult<()> {
        self.session.borrow_mut().take();
        Ok(())
    }

    fn current(&self) -> ClientResult<Option<StoredSession>> {
        Ok(self.session.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserRecord {
        UserRecord {
            id: "42".to_string(),
            email: "ana@example.org".to_string(),
            name: "Ana".to_string(),
            role: "migrant".to_string(),
            bio: None,
            languages: vec!["pt".to_string()],
            categories: Vec::new(),
            created_at: None,
        }
    }

    #[test]
    fn test_in_memory_session_lifecycle() {
        let session = InMemorySession::new();
        assert_eq!(session.current().unwrap(), None);

        session.login("jwt-token", &user()).unwrap();
        let stored = session.current().unwrap().unwrap();
        assert_eq!(stored.token, "jwt-token");
        assert_eq!(stored.user.name, "Ana");

        session.logout().unwrap();
        assert_eq!(session.current().unwrap(), None);
    }
}
