//! SeaORM entities for the Veronica schema.

pub mod prelude;

pub mod user;
