use std::sync::Arc;

use async_trait::async_trait;

use bookstore_core::AppException;
use bookstore_core::domain::User;
use bookstore_core::ports::{
    BaseRepository, PasswordService, ServiceResult, UserRepository, UserService,
};
use bookstore_shared::ServiceResponseDto;
use bookstore_shared::dto::{CreateUserDto, GetUserDto};

use super::{hashing, on_conflict};

const EMAIL_TAKEN: &str = "A user with this email already exists";

pub struct UserServiceImpl {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl UserServiceImpl {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register_user(&self, model: CreateUserDto) -> ServiceResult<GetUserDto> {
        let email = model.email.trim().to_lowercase();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppException::new(EMAIL_TAKEN).into());
        }

        let passwords = Arc::clone(&self.passwords);
        let password = model.password;
        let password_hash = hashing(move || passwords.hash(&password)).await?;

        let user = User::new(model.first_name, model.last_name, email, password_hash);
        let user = self
            .users
            .insert(user)
            .await
            .map_err(on_conflict(EMAIL_TAKEN.to_string()))?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(ServiceResponseDto::success_with_message(
            user.into(),
            "User registered successfully",
        ))
    }
}
