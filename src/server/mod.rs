//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing, the
//! registration/login/logout controllers, session state, the user repository, and
//! startup wiring for the database and the session store.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
