//! Declarative test builder.
//!
//! The builder queues tables and fixtures, and creates all of them in the final `build()`
//! call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_user_tables()
///     .with_user("Alp Arslan", "alp@example.com", "correct horse")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    include_user_tables: bool,

    // (name, email, plaintext password)
    users: Vec<(String, String, String)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_user_tables: false,
            users: Vec::new(),
        }
    }

    /// Create the `users` table.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Insert a user whose stored password is the argon2 hash of `password`.
    ///
    /// Requires [`with_user_tables`](Self::with_user_tables).
    pub fn with_user(mut self, name: &str, email: &str, password: &str) -> Self {
        self.users
            .push((name.to_string(), email.to_string(), password.to_string()));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Tables created and fixtures inserted
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::PasswordHashError)` - A fixture password could not be hashed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::User));
        }

        setup.with_tables(all_tables).await?;

        for (name, email, password) in self.users {
            setup.user().insert_user(&name, &email, &password).await?;
        }

        Ok(setup)
    }
}
