//! HTTP handlers and route configuration.

mod book;
mod category;
mod health;
mod user;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, web};
use serde::Serialize;

use bookstore_core::ServiceError;
use bookstore_core::ports::ServiceResult;
use bookstore_shared::ServiceResponseDto;

use crate::middleware::auth::RequireAuth;
use crate::middleware::error::{AppResult, json_config, path_config};
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(path_config())
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/user")
                    .route("", web::post().to(user::register))
                    .route("/login", web::post().to(user::login)),
            )
            // Protected routes
            .service(
                web::scope("/bookcategory")
                    .wrap(RequireAuth)
                    .route("", web::post().to(category::create))
                    .route("/update", web::post().to(category::update))
                    .route("", web::get().to(category::get_all))
                    .route("/delete", web::post().to(category::delete))
                    .route("/{id}", web::get().to(category::get_by_id)),
            )
            .service(
                web::scope("/book")
                    .wrap(RequireAuth)
                    .route("", web::post().to(book::create))
                    .route("/update", web::post().to(book::update))
                    .route("", web::get().to(book::get_all))
                    .route("/delete", web::post().to(book::delete))
                    .route("/{id}", web::get().to(book::get_by_id)),
            ),
    );
}

/// Translate a service outcome into an HTTP response.
///
/// The envelope of a successful call is returned unchanged with 200. An
/// application exception is logged and answered with a 500 error envelope.
/// Anything else propagates as an unhandled failure.
fn respond<T: Serialize>(state: &AppState, outcome: ServiceResult<T>) -> AppResult<HttpResponse> {
    match outcome {
        Ok(envelope) => Ok(HttpResponse::Ok().json(envelope)),
        Err(ServiceError::App(exception)) => {
            state.logger.log_error(&exception, exception.message());
            Ok(HttpResponse::InternalServerError()
                .json(ServiceResponseDto::<()>::error(exception.message())))
        }
        Err(other) => Err(other.into()),
    }
}
