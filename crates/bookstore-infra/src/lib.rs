//! # Bookstore Infrastructure
//!
//! Concrete implementations of the ports defined in `bookstore-core`:
//! token and password services, the tracing-backed logger, the domain
//! services, and the repositories they persist through.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM. Without it
//!   (`--no-default-features`) only the in-memory repositories are built.

pub mod auth;
pub mod database;
pub mod logging;
pub mod services;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{
    DatabaseConfig, InMemoryBookCategoryRepository, InMemoryBookRepository,
    InMemoryUserRepository,
};
pub use logging::TracingLoggerService;
pub use services::{AuthServiceImpl, BookCategoryServiceImpl, BookServiceImpl, UserServiceImpl};
