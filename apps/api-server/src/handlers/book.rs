//! Book handlers. All routes sit behind [`RequireAuth`](crate::middleware::auth::RequireAuth).

use actix_web::{HttpResponse, web};

use bookstore_shared::dto::{BookDto, CreateBookDto, GetBookDto};

use super::respond;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppResult, validated};
use crate::state::AppState;

/// POST /api/book
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateBookDto>,
) -> AppResult<HttpResponse> {
    let model = validated(body.into_inner())?;
    tracing::debug!(user_id = %identity.user_id, isbn = %model.isbn, "Creating book");

    respond(&state, state.books.create(model).await)
}

/// POST /api/book/update
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<GetBookDto>,
) -> AppResult<HttpResponse> {
    let model = validated(body.into_inner())?;
    tracing::debug!(user_id = %identity.user_id, book_id = %model.id, "Updating book");

    respond(&state, state.books.update(model).await)
}

/// GET /api/book
pub async fn get_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    respond(&state, state.books.get_all().await)
}

/// GET /api/book/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<BookDto>,
) -> AppResult<HttpResponse> {
    let model = validated(path.into_inner())?;

    respond(&state, state.books.get(model).await)
}

/// POST /api/book/delete
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<BookDto>,
) -> AppResult<HttpResponse> {
    let model = validated(body.into_inner())?;
    tracing::debug!(user_id = %identity.user_id, book_id = %model.id, "Deleting book");

    respond(&state, state.books.delete(model).await)
}
