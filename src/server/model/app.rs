//! Shared handler state.

use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// User store connection pool
    pub db: DatabaseConnection,
    /// Whether login applies the registration length rule before verifying
    pub login_enforce_password_length: bool,
}

impl AppState {
    /// Builds the handler state from an open connection and the loaded configuration.
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            login_enforce_password_length: config.login_enforce_password_length,
        }
    }
}
