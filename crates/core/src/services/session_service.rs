use tracing::{info, warn};

use crate::errors::CoreError;
use crate::models::session::Session;

/// The single accepted username.
pub const DEMO_USERNAME: &str = "demo";

/// The single accepted password.
pub const DEMO_PASSWORD: &str = "savings123";

/// Checks login attempts against the fixed credential pair.
///
/// This is a local gate only. No hashing, no lockout, no expiry.
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    /// Returns a session on an exact match. Every failure, including empty
    /// input, yields the same `InvalidCredentials` error.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, CoreError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            warn!("login rejected: empty credentials");
            return Err(CoreError::InvalidCredentials);
        }
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            warn!(username, "login rejected");
            return Err(CoreError::InvalidCredentials);
        }
        info!(username, "login accepted");
        Ok(Session::new(username))
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
