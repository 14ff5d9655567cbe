//! Utilities shared by controllers and services.
//!
//! - `sanitize` - normalising and escaping untrusted text fields
//! - `validate` - form validation collecting one message per failing field
//! - `password` - argon2 hashing and verification on the blocking pool

pub mod password;
pub mod sanitize;
pub mod validate;
