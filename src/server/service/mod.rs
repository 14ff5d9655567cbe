//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the repositories: they hash and verify
//! passwords, translate storage failures into domain errors, and shape data for the
//! response DTOs.

pub mod auth;
pub mod user;
