//! Account handlers. Both routes are open.

use actix_web::{HttpResponse, web};

use bookstore_shared::dto::{CreateUserDto, LoginResponseDto, LoginUserDto};

use super::respond;
use crate::middleware::error::{AppResult, validated};
use crate::state::AppState;

/// POST /api/user
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<CreateUserDto>,
) -> AppResult<HttpResponse> {
    let model = validated(body.into_inner())?;

    respond(&state, state.users.register_user(model).await)
}

/// POST /api/user/login
///
/// Besides the usual validation and exception handling, a completed call
/// whose login payload does not carry the success status is answered with
/// 400 and the same envelope.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginUserDto>,
) -> AppResult<HttpResponse> {
    state.logger.log_info("User login attempt");
    let model = validated(body.into_inner())?;

    match state.auth.login(model).await {
        Ok(envelope) => {
            let authenticated = envelope
                .data
                .as_ref()
                .is_some_and(LoginResponseDto::is_authenticated);
            if !authenticated {
                return Ok(HttpResponse::BadRequest().json(envelope));
            }

            state.logger.log_info("User login successful");
            Ok(HttpResponse::Ok().json(envelope))
        }
        Err(err) => respond::<LoginResponseDto>(&state, Err(err)),
    }
}
