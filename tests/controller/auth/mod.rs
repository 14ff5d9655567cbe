//! Tests for registration, login & logout endpoints.

mod register;

use super::*;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use veronica::model::auth::{FormErrorDto, LoginForm, RegisterForm};

fn login_form(email: &str, password: &str) -> Form<LoginForm> {
    Form(LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn register_form(name: &str, email: &str, password: &str) -> Form<RegisterForm> {
    Form(RegisterForm {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}
