//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod logger;
mod repository;
mod services;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use logger::LoggerService;
pub use repository::{BaseRepository, BookCategoryRepository, BookRepository, UserRepository};
pub use services::{AuthService, BookCategoryService, BookService, ServiceResult, UserService};
