//! Data Transfer Objects - request/response types for the API.
//!
//! String and identifier fields default when absent so that a missing field
//! is reported by validation against that field, not as a parse failure.

mod book;
mod category;
mod user;

pub use book::{BookDto, CreateBookDto, GetBookDto, normalize_isbn};
pub use category::{BookCategoryDto, CreateBookCategoryDto, GetBookCategoryDto};
pub use user::{
    CreateUserDto, GetUserDto, LOGIN_FAILED, LOGIN_SUCCESS, LoginResponseDto, LoginUserDto,
};

use uuid::Uuid;
use validator::ValidationError;

/// Rejects the nil UUID, which is what an absent identifier deserializes to.
fn validate_id(id: &Uuid) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::new("required").with_message("Id is required".into()));
    }
    Ok(())
}
