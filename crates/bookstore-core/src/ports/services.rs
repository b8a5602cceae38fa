//! Service ports consumed by the HTTP controllers.
//!
//! Every operation answers with an envelope. A failure the caller should see
//! as a message is returned as [`ServiceError::App`]; anything else is an
//! unexpected fault.

use async_trait::async_trait;

use bookstore_shared::ServiceResponseDto;
use bookstore_shared::dto::{
    BookCategoryDto, BookDto, CreateBookCategoryDto, CreateBookDto, CreateUserDto,
    GetBookCategoryDto, GetBookDto, GetUserDto, LoginResponseDto, LoginUserDto,
};

use crate::error::ServiceError;

pub type ServiceResult<T> = Result<ServiceResponseDto<T>, ServiceError>;

#[async_trait]
pub trait BookService: Send + Sync {
    async fn create(&self, model: CreateBookDto) -> ServiceResult<GetBookDto>;

    async fn update(&self, model: GetBookDto) -> ServiceResult<GetBookDto>;

    async fn get_all(&self) -> ServiceResult<Vec<GetBookDto>>;

    async fn get(&self, model: BookDto) -> ServiceResult<GetBookDto>;

    async fn delete(&self, model: BookDto) -> ServiceResult<()>;
}

#[async_trait]
pub trait BookCategoryService: Send + Sync {
    async fn create(&self, model: CreateBookCategoryDto) -> ServiceResult<GetBookCategoryDto>;

    async fn update(&self, model: GetBookCategoryDto) -> ServiceResult<GetBookCategoryDto>;

    async fn get_all(&self) -> ServiceResult<Vec<GetBookCategoryDto>>;

    async fn get(&self, model: BookCategoryDto) -> ServiceResult<GetBookCategoryDto>;

    async fn delete(&self, model: BookCategoryDto) -> ServiceResult<()>;
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn register_user(&self, model: CreateUserDto) -> ServiceResult<GetUserDto>;
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate credentials. Rejected credentials are not an error: the
    /// envelope carries a [`LoginResponseDto`] whose domain status says so.
    async fn login(&self, model: LoginUserDto) -> ServiceResult<LoginResponseDto>;
}
