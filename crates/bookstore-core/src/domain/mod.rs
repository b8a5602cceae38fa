//! Domain entities - the core business objects.

mod book;
mod book_category;
mod user;

pub use book::Book;
pub use book_category::BookCategory;
pub use user::User;
