//! Veronica: username and password authentication with server-side sessions.

pub mod model;
pub mod server;
