//! SeaORM entities.

pub mod book;
pub mod book_category;
pub mod user;
