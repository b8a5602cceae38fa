//! # Bookstore Shared
//!
//! Wire types shared by the services and the HTTP layer: the response
//! envelope, RFC 7807 problem details, and the request/response DTOs with
//! their declared validation rules.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, ResponseCode, ServiceResponseDto};
