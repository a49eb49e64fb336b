//! Type-safe session management wrapper.
//!
//! The session record lives server-side in the `tower-sessions` store and is
//! keyed by an opaque cookie token. The only thing stored in it is the guild
//! identity established at login, under a single namespaced key.

use tower_sessions::Session;

use crate::server::{error::AppError, model::account::SessionIdentity};

// Session key constants
const SESSION_AUTH_IDENTITY: &str = "auth:identity";

/// Authentication session management.
///
/// Handles storing and retrieving the guild identity of the logged-in operator
/// and the session lifecycle operations around login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Binds an identity to the session after a successful login.
    ///
    /// The session id is cycled first so a token issued before login cannot be
    /// reused to ride the authenticated session.
    ///
    /// # Arguments
    /// - `identity` - Guild identity of the account that just logged in
    ///
    /// # Returns
    /// - `Ok(())` - Identity stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_identity(&self, identity: &SessionIdentity) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_IDENTITY, identity).await?;
        Ok(())
    }

    /// Retrieves the identity bound to the session.
    ///
    /// An identity with an empty guild id is treated as absent.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` - Session is bound to a guild
    /// - `Ok(None)` - No identity in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_identity(&self) -> Result<Option<SessionIdentity>, AppError> {
        let identity = self
            .session
            .get::<SessionIdentity>(SESSION_AUTH_IDENTITY)
            .await?
            .filter(|identity| !identity.guild_id.is_empty());

        Ok(identity)
    }

    /// Checks if the session is bound to a guild.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_identity().await?.is_some())
    }

    /// Destroys the session, removing its record from the store.
    ///
    /// Calling this on a session that is already empty is not an error.
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
