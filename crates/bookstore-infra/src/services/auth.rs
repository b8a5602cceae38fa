use std::sync::Arc;

use async_trait::async_trait;

use bookstore_core::ports::{
    AuthService, PasswordService, ServiceResult, TokenService, UserRepository,
};
use bookstore_shared::ServiceResponseDto;
use bookstore_shared::dto::{LoginResponseDto, LoginUserDto};

use super::hashing;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Checks credentials and issues bearer tokens.
pub struct AuthServiceImpl {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthServiceImpl {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    fn rejected() -> ServiceResponseDto<LoginResponseDto> {
        ServiceResponseDto::error_with_data(LoginResponseDto::rejected(), INVALID_CREDENTIALS)
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, model: LoginUserDto) -> ServiceResult<LoginResponseDto> {
        let email = model.email.trim().to_lowercase();

        let Some(user) = self.users.find_by_email(&email).await? else {
            return Ok(Self::rejected());
        };

        let passwords = Arc::clone(&self.passwords);
        let hash = user.password_hash.clone();
        let verified = hashing(move || passwords.verify(&model.password, &hash)).await?;
        if !verified {
            return Ok(Self::rejected());
        }

        let token = self.tokens.generate_token(user.id, &user.email)?;
        let login = LoginResponseDto::authenticated(
            token,
            self.tokens.expiration_seconds(),
            user.into(),
        );

        Ok(ServiceResponseDto::success_with_message(
            login,
            "Login successful",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::domain::User;
    use bookstore_core::ports::BaseRepository;
    use bookstore_shared::ResponseCode;
    use bookstore_shared::dto::{LOGIN_FAILED, LOGIN_SUCCESS};

    use crate::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
    use crate::database::InMemoryUserRepository;

    async fn setup() -> (AuthServiceImpl, Arc<JwtTokenService>) {
        let passwords = Arc::new(Argon2PasswordService::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let hash = passwords.hash("open-sesame-42").unwrap();
        users
            .insert(User::new(
                "Emeka".to_string(),
                "Eze".to_string(),
                "emeka@example.com".to_string(),
                hash,
            ))
            .await
            .unwrap();

        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "auth-service-test-secret".to_string(),
            expiration_hours: 2,
            issuer: None,
            audience: None,
        }));

        (
            AuthServiceImpl::new(users, passwords, tokens.clone()),
            tokens,
        )
    }

    #[tokio::test]
    async fn test_login_issues_valid_token() {
        let (service, tokens) = setup().await;

        let response = service
            .login(LoginUserDto {
                email: "Emeka@example.com".to_string(),
                password: "open-sesame-42".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.status_code, ResponseCode::Success);
        let login = response.data.unwrap();
        assert_eq!(login.status_code, LOGIN_SUCCESS);
        assert_eq!(login.expires_in, 7200);
        let claims = tokens.validate_token(&login.token).unwrap();
        assert_eq!(claims.email, "emeka@example.com");
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected_without_error() {
        let (service, _) = setup().await;

        let response = service
            .login(LoginUserDto {
                email: "emeka@example.com".to_string(),
                password: "not-it".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.status_code, ResponseCode::Error);
        assert_eq!(response.data.unwrap().status_code, LOGIN_FAILED);
    }

    #[tokio::test]
    async fn test_unknown_email_is_rejected_without_error() {
        let (service, _) = setup().await;

        let response = service
            .login(LoginUserDto {
                email: "nobody@example.com".to_string(),
                password: "whatever".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.status_message, INVALID_CREDENTIALS);
        assert!(!response.data.unwrap().is_authenticated());
    }
}
