//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use bookstore_core::domain::{Book, BookCategory, User};
use bookstore_core::error::RepoError;
use bookstore_core::ports::{BookCategoryRepository, BookRepository, UserRepository};

use super::entity::book::{self, Entity as BookEntity};
use super::entity::book_category::{self, Entity as BookCategoryEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

pub type PostgresBookRepository = PostgresBaseRepository<BookEntity>;

pub type PostgresBookCategoryRepository = PostgresBaseRepository<BookCategoryEntity>;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, RepoError> {
        let result = BookEntity::find()
            .filter(book::Column::Isbn.eq(isbn))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn count_by_category(&self, category_id: Uuid) -> Result<u64, RepoError> {
        BookEntity::find()
            .filter(book::Column::CategoryId.eq(category_id))
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl BookCategoryRepository for PostgresBookCategoryRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<BookCategory>, RepoError> {
        let result = BookCategoryEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(book_category::Column::Name)))
                    .eq(name.to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

/// Keep only the first character of the local part, to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.len() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}
