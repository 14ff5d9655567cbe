//! Tests for signed-in user endpoints.

mod dashboard;

use super::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
