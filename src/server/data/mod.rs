//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. They are generic
//! over [`sea_orm::ConnectionTrait`] so the same code runs against the production pool,
//! a transaction, or the in-memory SQLite database used by tests.

pub mod user;
