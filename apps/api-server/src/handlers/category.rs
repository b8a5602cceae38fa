//! Book category handlers.

use actix_web::{HttpResponse, web};

use bookstore_shared::dto::{BookCategoryDto, CreateBookCategoryDto, GetBookCategoryDto};

use super::respond;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppResult, validated};
use crate::state::AppState;

/// POST /api/bookcategory
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateBookCategoryDto>,
) -> AppResult<HttpResponse> {
    let model = validated(body.into_inner())?;
    tracing::debug!(user_id = %identity.user_id, name = %model.name, "Creating book category");

    respond(&state, state.categories.create(model).await)
}

/// POST /api/bookcategory/update
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<GetBookCategoryDto>,
) -> AppResult<HttpResponse> {
    let model = validated(body.into_inner())?;
    tracing::debug!(user_id = %identity.user_id, category_id = %model.id, "Updating book category");

    respond(&state, state.categories.update(model).await)
}

/// GET /api/bookcategory
pub async fn get_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    respond(&state, state.categories.get_all().await)
}

/// GET /api/bookcategory/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<BookCategoryDto>,
) -> AppResult<HttpResponse> {
    let model = validated(path.into_inner())?;

    respond(&state, state.categories.get(model).await)
}

/// POST /api/bookcategory/delete
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<BookCategoryDto>,
) -> AppResult<HttpResponse> {
    let model = validated(body.into_inner())?;
    tracing::debug!(user_id = %identity.user_id, category_id = %model.id, "Deleting book category");

    respond(&state, state.categories.delete(model).await)
}
