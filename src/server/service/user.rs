//! User service layer.

use sea_orm::ConnectionTrait;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error},
};

/// Service for reading user accounts.
pub struct UserService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserService<'a, C> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Retrieves user information for display.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository.get_by_id(user_id).await?;

        Ok(user.map(|user| UserDto {
            id: user.id,
            name: user.name,
            email: user.email,
        }))
    }
}
