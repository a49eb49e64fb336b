use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::account::SessionIdentity,
};

/// Gate in front of every configuration endpoint.
///
/// Must be checked before any document I/O so that an anonymous request never
/// touches the configuration file.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires the session to be bound to a guild.
    ///
    /// # Returns
    /// - `Ok(SessionIdentity)` - The identity established at login
    /// - `Err(AppError::AuthErr(AuthError::NotLoggedIn))` - No identity in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn require(&self) -> Result<SessionIdentity, AppError> {
        match AuthSession::new(self.session).get_identity().await? {
            Some(identity) => Ok(identity),
            None => Err(AuthError::NotLoggedIn.into()),
        }
    }
}
