//! One-time flash messages.
//!
//! Messages live in a single map stored under [`SESSION_FLASH_KEY`], keyed by category
//! (for example `"success"`). Reading a category removes it, so each message is shown
//! at most once even when the page is reloaded.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the flash map.
pub const SESSION_FLASH_KEY: &str = "veronica:flash";

/// Category used for the message left by a successful registration.
pub const FLASH_SUCCESS: &str = "success";

/// Pending flash messages keyed by category.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionFlash(pub HashMap<String, String>);

impl SessionFlash {
    /// Stores `message` under `key`, replacing any message already waiting there.
    pub async fn set(session: &Session, key: &str, message: &str) -> Result<(), Error> {
        let mut flash = Self::load(session).await?;
        flash.0.insert(key.to_string(), message.to_string());

        session.insert(SESSION_FLASH_KEY, flash).await?;

        Ok(())
    }

    /// Returns the message stored under `key` and removes it from the session.
    pub async fn take(session: &Session, key: &str) -> Result<Option<String>, Error> {
        let mut flash = Self::load(session).await?;

        let Some(message) = flash.0.remove(key) else {
            return Ok(None);
        };

        if flash.0.is_empty() {
            session.remove::<SessionFlash>(SESSION_FLASH_KEY).await?;
        } else {
            session.insert(SESSION_FLASH_KEY, flash).await?;
        }

        Ok(Some(message))
    }

    async fn load(session: &Session) -> Result<Self, Error> {
        Ok(session
            .get::<SessionFlash>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default())
    }
}
