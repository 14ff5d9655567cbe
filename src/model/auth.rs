use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Registration form submission.
///
/// Missing fields deserialize as empty strings so they are reported by validation
/// rather than rejected by the extractor.
#[derive(Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form submission.
#[derive(Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Page state returned when a form submission is rejected.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FormErrorDto {
    /// One message per failing field, plus `auth_error` for failures that are not
    /// tied to a single field
    pub errors: BTreeMap<String, String>,
    /// Previously entered values to redisplay, passwords are never included
    pub old: BTreeMap<String, String>,
}

/// State of the login page.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginPageDto {
    /// One-time success message left by registration
    pub flash: Option<String>,
}
