use std::sync::Arc;

use async_trait::async_trait;

use uuid::Uuid;

use bookstore_core::domain::Book;
use bookstore_core::ports::{
    BaseRepository, BookCategoryRepository, BookRepository, BookService, ServiceResult,
};
use bookstore_core::{AppException, RepoError, ServiceError};
use bookstore_shared::ServiceResponseDto;
use bookstore_shared::dto::{BookDto, CreateBookDto, GetBookDto, normalize_isbn};

use super::on_conflict;

const NOT_FOUND: &str = "Book not found";

fn isbn_taken(isbn: &str) -> String {
    format!("A book with ISBN {isbn} already exists")
}

pub struct BookServiceImpl {
    books: Arc<dyn BookRepository>,
    categories: Arc<dyn BookCategoryRepository>,
}

impl BookServiceImpl {
    pub fn new(books: Arc<dyn BookRepository>, categories: Arc<dyn BookCategoryRepository>) -> Self {
        Self { books, categories }
    }

    async fn ensure_category(&self, category_id: Uuid) -> Result<(), ServiceError> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(AppException::new(format!(
                "Book category {category_id} does not exist"
            ))
            .into());
        }
        Ok(())
    }

    /// `isbn` must already be in its normalized form.
    async fn ensure_isbn_free(
        &self,
        isbn: &str,
        owner: Option<Uuid>,
    ) -> Result<(), ServiceError> {
        match self.books.find_by_isbn(isbn).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(AppException::new(isbn_taken(isbn)).into())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl BookService for BookServiceImpl {
    async fn create(&self, model: CreateBookDto) -> ServiceResult<GetBookDto> {
        self.ensure_category(model.category_id).await?;
        let isbn = normalize_isbn(&model.isbn);
        self.ensure_isbn_free(&isbn, None).await?;

        let book = self
            .books
            .insert(Book::from(model))
            .await
            .map_err(on_conflict(isbn_taken(&isbn)))?;
        tracing::debug!(book_id = %book.id, "Book created");

        Ok(ServiceResponseDto::success_with_message(
            book.into(),
            "Book created successfully",
        ))
    }

    async fn update(&self, model: GetBookDto) -> ServiceResult<GetBookDto> {
        let Some(mut book) = self.books.find_by_id(model.id).await? else {
            return Ok(ServiceResponseDto::error(NOT_FOUND));
        };

        if book.category_id != model.category_id {
            self.ensure_category(model.category_id).await?;
        }
        let isbn = normalize_isbn(&model.isbn);
        self.ensure_isbn_free(&isbn, Some(book.id)).await?;

        book.apply(model);
        let book = self
            .books
            .update(book)
            .await
            .map_err(on_conflict(isbn_taken(&isbn)))?;

        Ok(ServiceResponseDto::success_with_message(
            book.into(),
            "Book updated successfully",
        ))
    }

    async fn get_all(&self) -> ServiceResult<Vec<GetBookDto>> {
        let books = self.books.find_all().await?;

        Ok(ServiceResponseDto::success(
            books.into_iter().map(Into::into).collect(),
        ))
    }

    async fn get(&self, model: BookDto) -> ServiceResult<GetBookDto> {
        Ok(match self.books.find_by_id(model.id).await? {
            Some(book) => ServiceResponseDto::success(book.into()),
            None => ServiceResponseDto::error(NOT_FOUND),
        })
    }

    async fn delete(&self, model: BookDto) -> ServiceResult<()> {
        match self.books.delete(model.id).await {
            Ok(()) => Ok(ServiceResponseDto::done("Book deleted successfully")),
            Err(RepoError::NotFound) => Ok(ServiceResponseDto::error(NOT_FOUND)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::domain::BookCategory;
    use bookstore_shared::ResponseCode;

    use crate::database::{InMemoryBookCategoryRepository, InMemoryBookRepository};

    async fn setup() -> (BookServiceImpl, Uuid) {
        let categories = Arc::new(InMemoryBookCategoryRepository::new());
        let category = categories
            .insert(BookCategory::new("Fiction".to_string(), None))
            .await
            .unwrap();

        let service = BookServiceImpl::new(Arc::new(InMemoryBookRepository::new()), categories);
        (service, category.id)
    }

    fn new_book(category_id: Uuid) -> CreateBookDto {
        CreateBookDto {
            title: "Purple Hibiscus".to_string(),
            author: "Chimamanda Ngozi Adichie".to_string(),
            isbn: "9781616202415".to_string(),
            description: None,
            price: 11.0,
            quantity: 5,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_get_all_on_empty_store_succeeds() {
        let (service, _) = setup().await;

        let response = service.get_all().await.unwrap();

        assert_eq!(response.status_code, ResponseCode::Success);
        assert_eq!(response.data, Some(vec![]));
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (service, category_id) = setup().await;

        let created = service.create(new_book(category_id)).await.unwrap();
        let id = created.data.unwrap().id;

        let fetched = service.get(BookDto { id }).await.unwrap();
        assert!(fetched.is_success());
        assert_eq!(fetched.data.unwrap().title, "Purple Hibiscus");
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_is_app_exception() {
        let (service, _) = setup().await;

        let result = service.create(new_book(Uuid::new_v4())).await;

        assert!(matches!(result, Err(ServiceError::App(_))));
    }

    #[tokio::test]
    async fn test_duplicate_isbn_is_app_exception() {
        let (service, category_id) = setup().await;
        service.create(new_book(category_id)).await.unwrap();

        let err = service.create(new_book(category_id)).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "A book with ISBN 9781616202415 already exists"
        );
    }

    #[tokio::test]
    async fn test_hyphenated_isbn_collides_with_compact_form() {
        let (service, category_id) = setup().await;
        service
            .create(CreateBookDto {
                isbn: "9780306406157".to_string(),
                ..new_book(category_id)
            })
            .await
            .unwrap();

        let err = service
            .create(CreateBookDto {
                isbn: "978-0-306-40615-7".to_string(),
                ..new_book(category_id)
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "A book with ISBN 9780306406157 already exists"
        );
    }

    #[tokio::test]
    async fn test_isbn_is_stored_normalized() {
        let (service, category_id) = setup().await;

        let created = service
            .create(CreateBookDto {
                isbn: "0-8044-2957-x".to_string(),
                ..new_book(category_id)
            })
            .await
            .unwrap();

        assert_eq!(created.data.unwrap().isbn, "080442957X");
    }

    #[tokio::test]
    async fn test_update_keeps_own_isbn() {
        let (service, category_id) = setup().await;
        let created = service.create(new_book(category_id)).await.unwrap();
        let mut dto = created.data.unwrap();
        dto.quantity = 42;

        let updated = service.update(dto).await.unwrap();

        assert_eq!(updated.data.unwrap().quantity, 42);
    }

    #[tokio::test]
    async fn test_missing_book_yields_error_envelope() {
        let (service, _) = setup().await;
        let id = Uuid::new_v4();

        let fetched = service.get(BookDto { id }).await.unwrap();
        let deleted = service.delete(BookDto { id }).await.unwrap();

        assert_eq!(fetched.status_code, ResponseCode::Error);
        assert_eq!(fetched.status_message, NOT_FOUND);
        assert_eq!(deleted.status_code, ResponseCode::Error);
    }
}
