use std::sync::Arc;

use async_trait::async_trait;

use bookstore_core::domain::BookCategory;
use bookstore_core::ports::{
    BaseRepository, BookCategoryRepository, BookCategoryService, BookRepository, ServiceResult,
};
use bookstore_core::{AppException, RepoError};
use bookstore_shared::ServiceResponseDto;
use bookstore_shared::dto::{BookCategoryDto, CreateBookCategoryDto, GetBookCategoryDto};

use super::on_conflict;

const NOT_FOUND: &str = "Book category not found";

fn name_taken(name: &str) -> String {
    format!("Book category '{name}' already exists")
}

pub struct BookCategoryServiceImpl {
    categories: Arc<dyn BookCategoryRepository>,
    books: Arc<dyn BookRepository>,
}

impl BookCategoryServiceImpl {
    pub fn new(categories: Arc<dyn BookCategoryRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self { categories, books }
    }
}

#[async_trait]
impl BookCategoryService for BookCategoryServiceImpl {
    async fn create(&self, model: CreateBookCategoryDto) -> ServiceResult<GetBookCategoryDto> {
        if self.categories.find_by_name(&model.name).await?.is_some() {
            return Err(AppException::new(name_taken(&model.name)).into());
        }

        let conflict = on_conflict(name_taken(&model.name));
        let category = self
            .categories
            .insert(BookCategory::from(model))
            .await
            .map_err(conflict)?;
        tracing::debug!(category_id = %category.id, "Book category created");

        Ok(ServiceResponseDto::success_with_message(
            category.into(),
            "Book category created successfully",
        ))
    }

    async fn update(&self, model: GetBookCategoryDto) -> ServiceResult<GetBookCategoryDto> {
        let Some(mut category) = self.categories.find_by_id(model.id).await? else {
            return Ok(ServiceResponseDto::error(NOT_FOUND));
        };

        let taken = self
            .categories
            .find_by_name(&model.name)
            .await?
            .is_some_and(|other| other.id != category.id);
        if taken {
            return Err(AppException::new(name_taken(&model.name)).into());
        }

        let conflict = on_conflict(name_taken(&model.name));
        category.apply(model);
        let category = self.categories.update(category).await.map_err(conflict)?;

        Ok(ServiceResponseDto::success_with_message(
            category.into(),
            "Book category updated successfully",
        ))
    }

    async fn get_all(&self) -> ServiceResult<Vec<GetBookCategoryDto>> {
        let categories = self.categories.find_all().await?;

        Ok(ServiceResponseDto::success(
            categories.into_iter().map(Into::into).collect(),
        ))
    }

    async fn get(&self, model: BookCategoryDto) -> ServiceResult<GetBookCategoryDto> {
        Ok(match self.categories.find_by_id(model.id).await? {
            Some(category) => ServiceResponseDto::success(category.into()),
            None => ServiceResponseDto::error(NOT_FOUND),
        })
    }

    async fn delete(&self, model: BookCategoryDto) -> ServiceResult<()> {
        let in_use = self.books.count_by_category(model.id).await?;
        if in_use > 0 {
            return Err(AppException::new(format!(
                "Cannot delete a book category that still has {in_use} book(s)"
            ))
            .into());
        }

        match self.categories.delete(model.id).await {
            Ok(()) => Ok(ServiceResponseDto::done("Book category deleted successfully")),
            Err(RepoError::NotFound) => Ok(ServiceResponseDto::error(NOT_FOUND)),
            Err(e) => Err(e.into()),
        }
    }
}
