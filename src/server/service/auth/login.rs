//! Credential checks for login.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::db::UserModel,
    service::auth::AuthService,
    util::{
        password::{verify_dummy_password, verify_password},
        validate::LoginInput,
    },
};

impl<'a, C: ConnectionTrait> AuthService<'a, C> {
    /// Checks a login against the stored account.
    ///
    /// An unknown email and a wrong password both fail with
    /// [`AuthError::InvalidCredentials`], and an unknown email still pays for one
    /// password verification.
    ///
    /// # Arguments
    /// - `input` - Validated login with sanitized email
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Credentials match this user
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error::DbErr)` - The user lookup failed
    pub async fn login(&self, input: &LoginInput) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        let Some(user) = user_repository.find_by_email(&input.email).await? else {
            verify_dummy_password(&input.password).await;

            return Err(AuthError::InvalidCredentials.into());
        };

        match verify_password(&input.password, &user.password).await {
            Ok(true) => Ok(user),
            Ok(false) => Err(AuthError::InvalidCredentials.into()),
            Err(Error::PasswordHashError(err)) => {
                tracing::error!(
                    user_id = %user.id,
                    "Stored password hash for user could not be parsed: {}",
                    err
                );

                Err(AuthError::InvalidCredentials.into())
            }
            Err(err) => Err(err),
        }
    }
}
