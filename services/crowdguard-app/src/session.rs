//! Browser session storage
//!
//! Implements the client core's `SessionStore` over `localStorage` and
//! handles the redirect back to the login page.

use cg_client::session::SessionStore;
use cg_client::Session;

#[cfg(feature = "csr")]
use cg_client::session::SESSION_KEY;
#[cfg(feature = "csr")]
use cg_client::ClientError;

/// `SessionStore` backed by the browser's localStorage
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageSession;

#[cfg(feature = "csr")]
impl SessionStore for LocalStorageSession {
    fn read(&self) -> cg_client::Result<Option<String>> {
        local_storage()?
            .get_item(SESSION_KEY)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> cg_client::Result<()> {
        local_storage()?
            .remove_item(SESSION_KEY)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> cg_client::Result<web_sys::Storage> {
    let window =
        web_sys::window().ok_or_else(|| ClientError::Storage("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| ClientError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
}

// Native builds have no storage; every page load reads as logged out.
#[cfg(not(feature = "csr"))]
impl SessionStore for LocalStorageSession {
    fn read(&self) -> cg_client::Result<Option<String>> {
        Ok(None)
    }

    fn clear(&self) -> cg_client::Result<()> {
        Ok(())
    }
}

/// Read the current session, if logged in
pub fn current_session() -> Option<Session> {
    cg_client::session::current_session(&LocalStorageSession)
}

/// Clear the session and return to the login page
pub fn logout() {
    cg_client::session::logout(&LocalStorageSession);
    redirect_to_login();
}

/// Navigate to the login page
pub fn redirect_to_login() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href("index.html") {
                leptos::logging::error!("Redirect to login failed: {:?}", e);
            }
        }
    }
}
