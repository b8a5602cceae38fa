use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstore_shared::dto::{CreateBookCategoryDto, GetBookCategoryDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookCategory {
    pub fn new(name: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields and bump `updated_at`.
    pub fn apply(&mut self, dto: GetBookCategoryDto) {
        self.name = dto.name;
        self.description = dto.description;
        self.updated_at = Utc::now();
    }
}

impl From<CreateBookCategoryDto> for BookCategory {
    fn from(dto: CreateBookCategoryDto) -> Self {
        Self::new(dto.name, dto.description)
    }
}

impl From<BookCategory> for GetBookCategoryDto {
    fn from(category: BookCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}
