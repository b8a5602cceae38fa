use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Book, BookCategory, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Store a new entity. Fails with [`RepoError::Constraint`] if the ID or
    /// a unique field (ISBN, category name, email) is taken.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Replace an existing entity. Fails with [`RepoError::NotFound`] if absent
    /// and with [`RepoError::Constraint`] if a unique field collides.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

#[async_trait]
pub trait BookRepository: BaseRepository<Book, Uuid> {
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, RepoError>;

    /// Number of books filed under a category.
    async fn count_by_category(&self, category_id: Uuid) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait BookCategoryRepository: BaseRepository<BookCategory, Uuid> {
    /// Case-insensitive lookup.
    async fn find_by_name(&self, name: &str) -> Result<Option<BookCategory>, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}
