//! Test context returned by `TestBuilder`.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment with an in-memory SQLite database and a session.
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_user_tables().build().await?;
///
/// let user = test.user().insert_user("Alp Arslan", "alp@example.com", "correct horse").await?;
/// let app_state = AppState { db: test.db.clone(), login_enforce_password_length: true };
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session over a `MemoryStore`
    pub session: Session,
}

impl TestContext {
    /// Create a new test context with an empty database and a fresh session.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Create database tables from schema statements.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
