use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstore_shared::dto::{CreateBookDto, GetBookDto, normalize_isbn};

/// Book entity - a title held in stock under one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Overwrite the editable fields and bump `updated_at`.
    pub fn apply(&mut self, dto: GetBookDto) {
        self.title = dto.title;
        self.author = dto.author;
        self.isbn = normalize_isbn(&dto.isbn);
        self.description = dto.description;
        self.price = dto.price;
        self.quantity = dto.quantity;
        self.category_id = dto.category_id;
        self.updated_at = Utc::now();
    }
}

impl From<CreateBookDto> for Book {
    fn from(dto: CreateBookDto) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: dto.title,
            author: dto.author,
            isbn: normalize_isbn(&dto.isbn),
            description: dto.description,
            price: dto.price,
            quantity: dto.quantity,
            category_id: dto.category_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<Book> for GetBookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            description: book.description,
            price: book.price,
            quantity: book.quantity,
            category_id: book.category_id,
        }
    }
}
