use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Domain status carried by a successful login.
pub const LOGIN_SUCCESS: &str = "00";
/// Domain status carried by a rejected login.
pub const LOGIN_FAILED: &str = "01";

/// Registration input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_passwords_match"))]
pub struct CreateUserDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[serde(default)]
    pub confirm_password: String,
}

fn validate_passwords_match(dto: &CreateUserDto) -> Result<(), ValidationError> {
    if dto.password != dto.confirm_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("Passwords do not match".into()));
    }
    Ok(())
}

/// A user's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserDto {
    #[serde(default)]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login payload. `status_code` is the domain status: [`LOGIN_SUCCESS`] or
/// [`LOGIN_FAILED`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub status_code: String,
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<GetUserDto>,
}

impl LoginResponseDto {
    pub fn authenticated(token: String, expires_in: i64, user: GetUserDto) -> Self {
        Self {
            status_code: LOGIN_SUCCESS.to_string(),
            token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: Some(user),
        }
    }

    pub fn rejected() -> Self {
        Self {
            status_code: LOGIN_FAILED.to_string(),
            token: String::new(),
            token_type: String::new(),
            expires_in: 0,
            user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status_code == LOGIN_SUCCESS
    }
}
