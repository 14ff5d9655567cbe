//! Test utilities for the Veronica workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables and fixtures, and
//! `build()` returns a [`TestContext`] holding an in-memory SQLite database and a session
//! backed by `MemoryStore`.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
