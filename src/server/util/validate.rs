//! Login and registration form validation.
//!
//! Every field is checked independently and all failures are collected before the
//! form is rejected, so the user sees every problem at once.

use validator::ValidateEmail;

use crate::{
    model::auth::{LoginForm, RegisterForm},
    server::{
        error::form::{FieldErrors, FormError, OldInput},
        util::sanitize::sanitize,
    },
};

/// Minimum number of characters in a password.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Shown when the name is empty after trimming.
pub const NAME_REQUIRED_MESSAGE: &str = "Please provide a name";
/// Shown when the email is empty after trimming.
pub const EMAIL_REQUIRED_MESSAGE: &str = "Please provide an email address";
/// Shown when the email is not a valid address.
pub const EMAIL_INVALID_MESSAGE: &str = "Please provide a valid email address";
/// Shown when the password is empty.
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Please provide a password";
/// Shown when the password is shorter than [`PASSWORD_MIN_LENGTH`].
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 8 characters";

/// A registration that passed validation.
///
/// `name` and `email` are sanitized, `password` is exactly what was submitted.
pub struct RegisterInput {
    /// Sanitized display name
    pub name: String,
    /// Sanitized email
    pub email: String,
    /// Password as submitted
    pub password: String,
}

impl RegisterInput {
    /// Values to redisplay if the registration fails later on.
    pub fn old_input(&self) -> OldInput {
        OldInput::from([
            ("name".to_string(), self.name.clone()),
            ("email".to_string(), self.email.clone()),
        ])
    }
}

/// A login that passed validation.
pub struct LoginInput {
    /// Sanitized email
    pub email: String,
    /// Password as submitted
    pub password: String,
}

impl LoginInput {
    /// Values to redisplay if the login fails later on.
    pub fn old_input(&self) -> OldInput {
        OldInput::from([("email".to_string(), self.email.clone())])
    }
}

/// Validates a registration form.
///
/// # Returns
/// - `Ok(RegisterInput)` - Every field passed
/// - `Err(FormError)` - 422 with one message per failing field and the sanitized
///   name and email to redisplay
pub fn validate_registration(form: &RegisterForm) -> Result<RegisterInput, FormError> {
    let mut errors = FieldErrors::new();

    let name = check_name(&form.name, &mut errors);
    let email = check_email(&form.email, &mut errors);
    check_password(&form.password, true, &mut errors);

    let input = RegisterInput {
        name,
        email,
        password: form.password.clone(),
    };

    if errors.is_empty() {
        Ok(input)
    } else {
        Err(FormError::invalid(errors, input.old_input()))
    }
}

/// Validates a login form.
///
/// `enforce_length` applies the registration length rule to the submitted
/// password before any lookup happens.
///
/// # Returns
/// - `Ok(LoginInput)` - Every field passed
/// - `Err(FormError)` - 422 with one message per failing field and the sanitized
///   email to redisplay
pub fn validate_login(form: &LoginForm, enforce_length: bool) -> Result<LoginInput, FormError> {
    let mut errors = FieldErrors::new();

    let email = check_email(&form.email, &mut errors);
    check_password(&form.password, enforce_length, &mut errors);

    let input = LoginInput {
        email,
        password: form.password.clone(),
    };

    if errors.is_empty() {
        Ok(input)
    } else {
        Err(FormError::invalid(errors, input.old_input()))
    }
}

fn check_name(raw: &str, errors: &mut FieldErrors) -> String {
    let name = sanitize(raw);

    if name.is_empty() {
        errors.insert("name".to_string(), NAME_REQUIRED_MESSAGE.to_string());
    }

    name
}

fn check_email(raw: &str, errors: &mut FieldErrors) -> String {
    let email = sanitize(raw);

    if email.is_empty() {
        errors.insert("email".to_string(), EMAIL_REQUIRED_MESSAGE.to_string());
    } else if !email.validate_email() {
        errors.insert("email".to_string(), EMAIL_INVALID_MESSAGE.to_string());
    }

    email
}

fn check_password(raw: &str, enforce_length: bool, errors: &mut FieldErrors) {
    if raw.is_empty() {
        errors.insert("password".to_string(), PASSWORD_REQUIRED_MESSAGE.to_string());
    } else if enforce_length && raw.chars().count() < PASSWORD_MIN_LENGTH {
        errors.insert(
            "password".to_string(),
            PASSWORD_TOO_SHORT_MESSAGE.to_string(),
        );
    }
}
