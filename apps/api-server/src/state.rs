//! Application state - shared across all handlers.

use std::sync::Arc;

use bookstore_core::ports::{
    AuthService, BookCategoryRepository, BookCategoryService, BookRepository, BookService,
    LoggerService, PasswordService, TokenService, UserRepository, UserService,
};
use bookstore_infra::{
    Argon2PasswordService, AuthServiceImpl, BookCategoryServiceImpl, BookServiceImpl,
    InMemoryBookCategoryRepository, InMemoryBookRepository, InMemoryUserRepository,
    JwtTokenService, TracingLoggerService, UserServiceImpl,
};

#[cfg(feature = "postgres")]
use bookstore_infra::database::{
    PostgresBookCategoryRepository, PostgresBookRepository, PostgresUserRepository, connect,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookService>,
    pub categories: Arc<dyn BookCategoryService>,
    pub users: Arc<dyn UserService>,
    pub auth: Arc<dyn AuthService>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn LoggerService>,
}

/// Repository set the services are built on.
struct Repositories {
    books: Arc<dyn BookRepository>,
    categories: Arc<dyn BookCategoryRepository>,
    users: Arc<dyn UserRepository>,
}

impl Repositories {
    fn in_memory() -> Self {
        Self {
            books: Arc::new(InMemoryBookRepository::new()),
            categories: Arc::new(InMemoryBookCategoryRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }

    #[cfg(feature = "postgres")]
    async fn from_config(config: &AppConfig) -> Self {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory();
        };

        match connect(db_config).await {
            Ok(conn) => Self {
                books: Arc::new(PostgresBookRepository::new(conn.clone())),
                categories: Arc::new(PostgresBookCategoryRepository::new(conn.clone())),
                users: Arc::new(PostgresUserRepository::new(conn)),
            },
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn from_config(_config: &AppConfig) -> Self {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Self::in_memory()
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let repos = Repositories::from_config(config).await;

        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        tracing::info!("Application state initialized");

        Self {
            books: Arc::new(BookServiceImpl::new(
                repos.books.clone(),
                repos.categories.clone(),
            )),
            categories: Arc::new(BookCategoryServiceImpl::new(repos.categories, repos.books)),
            users: Arc::new(UserServiceImpl::new(repos.users.clone(), passwords.clone())),
            auth: Arc::new(AuthServiceImpl::new(repos.users, passwords, tokens.clone())),
            tokens,
            logger: Arc::new(TracingLoggerService),
        }
    }
}
