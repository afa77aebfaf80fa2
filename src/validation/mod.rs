//! Request Validation
//!
//! Declarative per-request validators that run before any business logic.
//! Each validator checks the raw payload against its schema and either
//! returns the typed, validated data or an `ApiError::Validation` that
//! enumerates **every** violated field, short-circuiting the handler.
//!
//! # Schemas
//!
//! - `signup` - firstName, lastName required; email format; password ≥ 8
//! - `login` - email format; password required (no length floor)
//! - `upsert_user` - firstName, lastName required; email format; role must
//!   be one of the enumerated values (shared by add-user and update-user)
//!
//! The `userId` path parameter required by get/update/delete-user is
//! enforced by the router: a request without it does not match the route.

use crate::auth::handlers::types::{LoginRequest, SignupRequest};
use crate::error::types::{ApiError, FieldError};
use crate::users::handlers::UpsertUserRequest;
use crate::users::model::Role;

/// Validated signup payload
#[derive(Debug, Clone)]
pub struct SignupData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Validated login payload
#[derive(Debug, Clone)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Validated add-user / update-user payload
#[derive(Debug, Clone)]
pub struct UpsertUserData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub profile_photo: Option<String>,
}

/// Validate a signup request
pub fn signup(request: &SignupRequest) -> Result<SignupData, ApiError> {
    let mut errors = Vec::new();

    let first_name = required(&request.first_name, "firstName", &mut errors);
    let last_name = required(&request.last_name, "lastName", &mut errors);
    let email = email(&request.email, &mut errors);
    let password = required(&request.password, "password", &mut errors);
    if let Some(password) = &password {
        if password.chars().count() < 8 {
            errors.push(FieldError::new(
                "password",
                "must have a minimum of 8 characters",
            ));
        }
    }

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    Ok(SignupData {
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
    })
}

/// Validate a login request
///
/// Login has no password length floor; only presence and email format
/// are checked.
pub fn login(request: &LoginRequest) -> Result<LoginData, ApiError> {
    let mut errors = Vec::new();

    let email = email(&request.email, &mut errors);
    let password = required(&request.password, "password", &mut errors);

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    Ok(LoginData {
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
    })
}

/// Validate an add-user or update-user request
pub fn upsert_user(request: &UpsertUserRequest) -> Result<UpsertUserData, ApiError> {
    let mut errors = Vec::new();

    let first_name = required(&request.first_name, "firstName", &mut errors);
    let last_name = required(&request.last_name, "lastName", &mut errors);
    let email = email(&request.email, &mut errors);

    let role = match &request.role {
        None => {
            errors.push(FieldError::new("role", "is required"));
            None
        }
        Some(value) => match Role::parse(value) {
            Some(role) => Some(role),
            None => {
                errors.push(FieldError::new(
                    "role",
                    "must be one of admin, user, guest",
                ));
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    Ok(UpsertUserData {
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        role: role.unwrap_or_default(),
        profile_photo: request.profile_photo.clone(),
    })
}

fn required(
    value: &Option<String>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value.clone()),
        _ => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

fn email(value: &Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match value {
        Some(value) if is_valid_email(value) => Some(value.clone()),
        Some(_) => {
            errors.push(FieldError::new("email", "must be a valid email"));
            None
        }
        None => {
            errors.push(FieldError::new("email", "is required"));
            None
        }
    }
}

/// Check the basic shape of an email address
///
/// One `@` with a non-empty local part and a dotted, non-empty domain;
/// no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
