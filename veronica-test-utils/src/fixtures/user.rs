use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use rand::RngCore;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a user with an argon2id hash of `password`, as registration would.
    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        let password_hash = hash(password)?;

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}

fn hash(password: &str) -> Result<String, TestError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)?;

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}
