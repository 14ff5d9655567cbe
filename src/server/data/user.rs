//! User repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Fields required to insert a new user.
pub struct NewUser<'a> {
    /// Display name, already sanitized
    pub name: &'a str,
    /// Login email, already sanitized
    pub email: &'a str,
    /// Argon2 PHC string, never the plaintext password
    pub password_hash: &'a str,
}

/// Data access for the `users` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// The `users.email` unique constraint rejects duplicates, check the returned
    /// error with [`DbErr::sql_err`] to tell a conflict apart from other failures.
    pub async fn create(&self, new_user: NewUser<'_>) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(new_user.name.to_string()),
            email: ActiveValue::Set(new_user.email.to_string()),
            password: ActiveValue::Set(new_user.password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Finds a user by exact email match
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user by ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }
}
