use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::validate_id;

/// Fields required to create a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 150, message = "Author is required (max 150 characters)"))]
    pub author: String,

    #[serde(default)]
    #[validate(custom(function = "validate_isbn"))]
    pub isbn: String,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,

    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub category_id: Uuid,
}

/// A book as returned to clients; also the update input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetBookDto {
    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub id: Uuid,

    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 150, message = "Author is required (max 150 characters)"))]
    pub author: String,

    #[serde(default)]
    #[validate(custom(function = "validate_isbn"))]
    pub isbn: String,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,

    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub category_id: Uuid,
}

/// Identifier-only input for lookup and delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub id: Uuid,
}

/// Canonical stored form of an ISBN: hyphens dropped, check digit `X` upper-cased.
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// ISBN-10 or ISBN-13, hyphens allowed, trailing `X` check digit allowed.
fn validate_isbn(isbn: &str) -> Result<(), ValidationError> {
    let invalid =
        || ValidationError::new("isbn").with_message("ISBN must contain 10 or 13 digits".into());

    if isbn.len() < 10 || isbn.len() > 17 {
        return Err(invalid());
    }

    let compact: Vec<char> = isbn.chars().filter(|c| *c != '-').collect();
    let (last, body) = compact.split_last().ok_or_else(invalid)?;

    let body_ok = body.iter().all(|c| c.is_ascii_digit());
    let last_ok = last.is_ascii_digit() || (*last == 'X' && compact.len() == 10);

    if !body_ok || !last_ok || !matches!(compact.len(), 10 | 13) {
        return Err(invalid());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateBookDto {
        CreateBookDto {
            title: "Things Fall Apart".to_string(),
            author: "Chinua Achebe".to_string(),
            isbn: "978-0-385-47454-2".to_string(),
            description: None,
            price: 12.5,
            quantity: 4,
            category_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_valid_book_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_missing_title_and_category_are_reported() {
        let dto: CreateBookDto = serde_json::from_str(
            r#"{"author":"Wole Soyinka","isbn":"0413456701","price":10.0,"quantity":1}"#,
        )
        .unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("category_id"));
        assert!(!fields.contains_key("isbn"));
    }

    #[test]
    fn test_isbn_rules() {
        assert!(validate_isbn("0-306-40615-2").is_ok());
        assert!(validate_isbn("080442957X").is_ok());
        assert!(validate_isbn("9780306406157").is_ok());
        assert!(validate_isbn("97803064061X7").is_err());
        assert!(validate_isbn("12345").is_err());
        assert!(validate_isbn("978030640615X").is_err());
    }

    #[test]
    fn test_normalize_isbn_drops_hyphens() {
        assert_eq!(normalize_isbn("978-0-306-40615-7"), "9780306406157");
        assert_eq!(normalize_isbn("0-8044-2957-x"), "080442957X");
        assert_eq!(normalize_isbn("9780306406157"), "9780306406157");
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let dto = CreateBookDto {
            price: -1.0,
            ..valid_create()
        };

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }
}
