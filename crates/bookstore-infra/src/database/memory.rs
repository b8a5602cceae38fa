//! In-memory repositories - used when no database is configured.
//! Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bookstore_core::domain::{Book, BookCategory, User};
use bookstore_core::error::RepoError;
use bookstore_core::ports::{
    BaseRepository, BookCategoryRepository, BookRepository, UserRepository,
};

/// Entities that can be stored by [`InMemoryRepository`].
pub trait Keyed {
    fn key(&self) -> Uuid;

    /// Natural key that no two stored entities may share. Mirrors the
    /// unique indexes of the PostgreSQL schema.
    fn unique_key(&self) -> String;
}

impl Keyed for Book {
    fn key(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> String {
        self.isbn.clone()
    }
}

impl Keyed for BookCategory {
    fn key(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl Keyed for User {
    fn key(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> String {
        self.email.to_lowercase()
    }
}

/// Fails if another entity already holds `entity`'s natural key.
fn ensure_unique<T: Keyed>(store: &HashMap<Uuid, T>, entity: &T) -> Result<(), RepoError> {
    let unique = entity.unique_key();
    let taken = store
        .values()
        .any(|other| other.key() != entity.key() && other.unique_key() == unique);

    if taken {
        return Err(RepoError::Constraint(format!("'{unique}' is already taken")));
    }
    Ok(())
}

/// HashMap-backed repository guarded by an async RwLock.
pub struct InMemoryRepository<T> {
    store: RwLock<HashMap<Uuid, T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> InMemoryRepository<T> {
    async fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let store = self.store.read().await;
        store.values().find(|e| predicate(*e)).cloned()
    }
}

pub type InMemoryBookRepository = InMemoryRepository<Book>;
pub type InMemoryBookCategoryRepository = InMemoryRepository<BookCategory>;
pub type InMemoryUserRepository = InMemoryRepository<User>;

#[async_trait]
impl<T> BaseRepository<T, Uuid> for InMemoryRepository<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        let key = entity.key();
        if store.contains_key(&key) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        ensure_unique(&store, &entity)?;
        store.insert(key, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        ensure_unique(&store, &entity)?;
        match store.get_mut(&entity.key()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, RepoError> {
        Ok(self.find_first(|b| b.isbn == isbn).await)
    }

    async fn count_by_category(&self, category_id: Uuid) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|b| b.category_id == category_id)
            .count() as u64)
    }
}

#[async_trait]
impl BookCategoryRepository for InMemoryBookCategoryRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<BookCategory>, RepoError> {
        let name = name.to_lowercase();
        Ok(self.find_first(|c| c.name.to_lowercase() == name).await)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self.find_first(|u| u.email.eq_ignore_ascii_case(email)).await)
    }
}
