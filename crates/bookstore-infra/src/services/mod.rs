//! Domain services over the repository ports.
//!
//! Lookups that miss answer with an error envelope. Business rule
//! violations (unknown category, duplicate ISBN/name/email, deleting a
//! category still in use) are raised as [`bookstore_core::AppException`].
//! Uniqueness is checked up front and again by the store on write, so a
//! request that loses a race gets the same exception.

mod auth;
mod book;
mod category;
mod user;

pub use auth::AuthServiceImpl;
pub use book::BookServiceImpl;
pub use category::BookCategoryServiceImpl;
pub use user::UserServiceImpl;

use bookstore_core::ports::AuthError;
use bookstore_core::{AppException, RepoError, ServiceError};

/// Maps a store-level uniqueness violation onto `AppException(message)`.
fn on_conflict(message: String) -> impl FnOnce(RepoError) -> ServiceError {
    move |err| match err {
        RepoError::Constraint(_) => AppException::new(message).into(),
        other => other.into(),
    }
}

/// Runs password hashing or verification on the blocking pool.
async fn hashing<T, F>(work: F) -> Result<T, AuthError>
where
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AuthError::HashingError(e.to_string()))?
}
