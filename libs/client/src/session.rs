//! Session persistence
//!
//! The browser front end kept two localStorage keys, one for the bearer
//! token and one for the serialized user record. `SessionStore` keeps the
//! same two keys in the file-backed [`LocalStore`] and hands out an
//! explicit [`Session`] value instead of letting callers read global
//! state ad hoc.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use common::storage::LocalStore;

use crate::error::ClientResult;
use crate::models::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// An authenticated session: opaque bearer token plus cached principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Persists the session across runs
#[derive(Debug, Clone)]
pub struct SessionStore {
    store: LocalStore,
}

impl SessionStore {
    /// Create a session store over a local store
    pub fn new(store: LocalStore) -> Self {
        SessionStore { store }
    }

    /// Restore the persisted session, if any
    ///
    /// Both keys must be present and the user record must parse. Corrupt
    /// or partial state destroys the session so the application falls
    /// back to the unauthenticated view.
    pub fn load(&self) -> ClientResult<Option<Session>> {
        let token = self.store.get(TOKEN_KEY)?;
        let user_raw = self.store.get(USER_KEY)?;

        let (Some(token), Some(user_raw)) = (token, user_raw) else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&user_raw) {
            Ok(user) => Ok(Some(Session { token, user })),
            Err(e) => {
                warn!("Stored user record is corrupt, clearing session: {}", e);
                self.clear()?;
                Ok(None)
            }
        }
    }

    /// Persist a session after login or registration
    pub fn save(&self, session: &Session) -> ClientResult<()> {
        let user_json = serde_json::to_string(&session.user)
            .expect("serializing a user record cannot fail");
        self.store.set(TOKEN_KEY, &session.token)?;
        self.store.set(USER_KEY, &user_json)?;
        info!("Session saved for {}", session.user.email);
        Ok(())
    }

    /// Remove both session keys
    pub fn clear(&self) -> ClientResult<()> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_sessions() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, SessionStore::new(store))
    }

    fn sample_session() -> Session {
        Session {
            token: "tok-abc".to_string(),
            user: User {
                id: "u-1".to_string(),
                email: "student@unc.edu".to_string(),
                display_name: "student".to_string(),
                major: "Computer Science".to_string(),
                grad_year: 2027,
            },
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (_dir, sessions) = temp_sessions();

        sessions.save(&sample_session()).unwrap();
        let restored = sessions.load().unwrap().unwrap();
        assert_eq!(restored.token, "tok-abc");
        assert_eq!(restored.user.email, "student@unc.edu");
    }

    #[test]
    fn test_load_without_session() {
        let (_dir, sessions) = temp_sessions();
        assert!(sessions.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_user_record_destroys_session() {
        let (dir, sessions) = temp_sessions();

        sessions.save(&sample_session()).unwrap();
        let inner = LocalStore::open(dir.path()).unwrap();
        inner.set(USER_KEY, "{not json").unwrap();

        assert!(sessions.load().unwrap().is_none());
        // Both keys are gone afterwards
        assert_eq!(inner.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(inner.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let (dir, sessions) = temp_sessions();

        sessions.save(&sample_session()).unwrap();
        sessions.clear().unwrap();

        let inner = LocalStore::open(dir.path()).unwrap();
        assert_eq!(inner.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(inner.get(USER_KEY).unwrap(), None);
        assert!(sessions.load().unwrap().is_none());
    }
}
