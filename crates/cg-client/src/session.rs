//! Session storage access
//!
//! The dashboard is gated on a session object stored by the login page under
//! the `user` key. Presence of the key is the only access check; there is no
//! token validation and no expiry.

use crate::models::Session;

/// Storage key written by the login page
pub const SESSION_KEY: &str = "user";

/// Abstraction over the browser's local storage for dependency injection
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    /// Read the raw stored session value, if any
    fn read(&self) -> crate::Result<Option<String>>;

    /// Remove the stored session
    fn clear(&self) -> crate::Result<()>;
}

/// Read and parse the current session.
///
/// A missing key, a storage failure, and unparseable JSON all read as
/// "not logged in"; failures are logged rather than surfaced.
pub fn current_session(store: &dyn SessionStore) -> Option<Session> {
    let raw = match store.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read session: {}", e);
            return None;
        }
    };

    match Session::from_json(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Discarding unparseable session: {}", e);
            None
        }
    }
}

/// Clear the stored session
pub fn logout(store: &dyn SessionStore) {
    if let Err(e) = store.clear() {
        tracing::warn!("Failed to clear session: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    #[test]
    fn current_session_parses_stored_user() {
        let mut store = MockSessionStore::new();
        store.expect_read().returning(|| {
            Ok(Some(
                r#"{"user_id": "officer1", "name": "Security Officer", "role": "Security Officer", "zone_assigned": "Z01"}"#
                    .to_string(),
            ))
        });

        let session = current_session(&store).unwrap();
        assert_eq!(session.name, "Security Officer");
        assert_eq!(session.role, "Security Officer");
        assert_eq!(session.zone_assigned.as_deref(), Some("Z01"));
    }

    #[test]
    fn current_session_none_when_absent() {
        let mut store = MockSessionStore::new();
        store.expect_read().returning(|| Ok(None));
        assert!(current_session(&store).is_none());
    }

    #[test]
    fn current_session_none_on_storage_error() {
        let mut store = MockSessionStore::new();
        store
            .expect_read()
            .returning(|| Err(ClientError::Storage("denied".to_string())));
        assert!(current_session(&store).is_none());
    }

    #[test]
    fn current_session_discards_invalid_json() {
        let mut store = MockSessionStore::new();
        store
            .expect_read()
            .returning(|| Ok(Some("not json".to_string())));
        assert!(current_session(&store).is_none());
    }

    #[test]
    fn logout_clears_store() {
        let mut store = MockSessionStore::new();
        store.expect_clear().times(1).returning(|| Ok(()));
        logout(&store);
    }

    #[test]
    fn logout_swallows_storage_error() {
        let mut store = MockSessionStore::new();
        store
            .expect_clear()
            .returning(|| Err(ClientError::Storage("denied".to_string())));
        logout(&store);
    }
}
