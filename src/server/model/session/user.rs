//! Signed-in user ID kept in the session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the signed-in user ID.
pub const SESSION_USER_ID_KEY: &str = "veronica:user:id";

/// Signed-in user ID as stored in the session.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session user id: {}", e))
                })
            })
            .transpose()
    }

    /// Remove user ID from session, returning it if one was present
    pub async fn remove(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = Self::get(session).await?;

        if user_id.is_some() {
            session.remove::<SessionUserId>(SESSION_USER_ID_KEY).await?;
        }

        Ok(user_id)
    }
}
