//! # Bookstore Core
//!
//! The domain layer of the bookstore API: entities, error types, and the
//! ports (service, repository, auth and logging traits) that the
//! infrastructure crate implements and the HTTP layer consumes.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{AppException, RepoError, ServiceError};
