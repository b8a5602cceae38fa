//! Schema migrations for the bookstore database.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_book_categories;
mod m20240101_000002_create_books;
mod m20240101_000003_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_book_categories::Migration),
            Box::new(m20240101_000002_create_books::Migration),
            Box::new(m20240101_000003_create_users::Migration),
        ]
    }
}
