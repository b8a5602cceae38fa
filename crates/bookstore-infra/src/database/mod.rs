//! Persistence: connection setup, in-memory repositories, and the
//! SeaORM-backed PostgreSQL repositories.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::{
    InMemoryBookCategoryRepository, InMemoryBookRepository, InMemoryRepository,
    InMemoryUserRepository, Keyed,
};

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresBookCategoryRepository, PostgresBookRepository, PostgresUserRepository,
};
