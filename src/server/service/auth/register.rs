//! Account registration.

use sea_orm::{ConnectionTrait, SqlErr};

use crate::server::{
    data::user::{NewUser, UserRepository},
    error::{auth::AuthError, Error},
    model::db::UserModel,
    service::auth::AuthService,
    util::{password::hash_password, validate::RegisterInput},
};

impl<'a, C: ConnectionTrait> AuthService<'a, C> {
    /// Registers a new account.
    ///
    /// # Arguments
    /// - `input` - Validated registration with sanitized name and email
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The stored user, its password field holds the hash
    /// - `Err(Error::AuthError(AuthError::EmailTaken))` - The email is already registered
    /// - `Err(Error::DbErr)` - Any other storage failure
    /// - `Err(Error::PasswordHashError)` - Hashing failed
    pub async fn register(&self, input: &RegisterInput) -> Result<UserModel, Error> {
        let password_hash = hash_password(&input.password).await?;

        let user_repository = UserRepository::new(self.db);
        let result = user_repository
            .create(NewUser {
                name: &input.name,
                email: &input.email,
                password_hash: &password_hash,
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Registered new user");

                Ok(user)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AuthError::EmailTaken.into()),
                _ => Err(err.into()),
            },
        }
    }
}
