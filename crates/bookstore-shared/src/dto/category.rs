use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validate_id;

/// Fields required to create a book category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookCategoryDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

/// A category as returned to clients; also the update input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetBookCategoryDto {
    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub id: Uuid,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

/// Identifier-only input for lookup and delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookCategoryDto {
    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub id: Uuid,
}
