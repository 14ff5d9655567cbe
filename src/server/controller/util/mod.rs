//! Utility functions for controller request handling.
//!
//! Currently holds the lookup of the signed-in user shared by protected endpoints.

pub mod get_user;
