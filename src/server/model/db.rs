//! Database model type aliases.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `name` - Display name
/// - `email` - Unique login identifier
/// - `password` - Argon2 PHC hash of the password
/// - `created_at` - Timestamp when the user registered
pub type UserModel = entity::user::Model;
