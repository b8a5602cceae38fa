//! Book entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use bookstore_core::domain::Book;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    #[sea_orm(unique)]
    pub isbn: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub category_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book_category::Entity",
        from = "Column::CategoryId",
        to = "super::book_category::Column::Id"
    )]
    BookCategory,
}

impl Related<super::book_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            isbn: model.isbn,
            description: model.description,
            price: model.price,
            quantity: model.quantity,
            category_id: model.category_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Book> for ActiveModel {
    fn from(book: Book) -> Self {
        Self {
            id: Set(book.id),
            title: Set(book.title),
            author: Set(book.author),
            isbn: Set(book.isbn),
            description: Set(book.description),
            price: Set(book.price),
            quantity: Set(book.quantity),
            category_id: Set(book.category_id),
            created_at: Set(book.created_at.into()),
            updated_at: Set(book.updated_at.into()),
        }
    }
}
