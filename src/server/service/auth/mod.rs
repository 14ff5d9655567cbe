//! Authentication service layer.
//!
//! Registration hashes the password and stores the new account; login looks the account
//! up by email and verifies the password. Both work on input that already passed
//! validation, see [`crate::server::util::validate`].

pub mod login;
pub mod register;

use sea_orm::ConnectionTrait;

/// Service for registering accounts and checking credentials.
pub struct AuthService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthService<'a, C> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}
