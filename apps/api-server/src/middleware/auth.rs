//! Authentication gate and identity extractor.
//!
//! [`RequireAuth`] wraps a scope and rejects any request without a valid
//! bearer token before the handler runs. On success the decoded
//! [`Identity`] is stored in the request extensions.

use std::future::{Future, Ready, ready};
use std::pin::Pin;

use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header,
    web,
};

use bookstore_core::ports::{AuthError, TokenClaims, TokenService};
use bookstore_shared::ErrorResponse;

use crate::state::AppState;

/// Authenticated caller, decoded from the bearer token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
    pub email: String,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
        }
    }
}

fn unauthorized(err: &AuthError) -> HttpResponse {
    let detail = match err {
        AuthError::TokenExpired => {
            "Your authentication token has expired. Please login again.".to_string()
        }
        AuthError::MissingAuth => {
            "Please provide a valid Bearer token in the Authorization header.".to_string()
        }
        other => other.to_string(),
    };

    HttpResponse::Unauthorized().json(ErrorResponse::unauthorized(detail))
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(req: &HttpRequest) -> Result<&str, AuthError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let value = value
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))
}

fn authenticate(req: &HttpRequest, tokens: &dyn TokenService) -> Result<Identity, AuthError> {
    let token = bearer_token(req)?;
    tokens.validate_token(token).map(Identity::from)
}

/// Middleware factory guarding a scope with JWT authentication.
pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthService { service }))
    }
}

pub struct RequireAuthService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let outcome = match req.app_data::<web::Data<AppState>>() {
            Some(state) => authenticate(req.request(), state.tokens.as_ref()).map_err(|e| {
                tracing::debug!(error = %e, path = %req.path(), "Rejected unauthenticated request");
                unauthorized(&e)
            }),
            None => {
                tracing::error!("AppState not found in app data");
                Err(HttpResponse::InternalServerError().json(ErrorResponse::internal_error()))
            }
        };

        match outcome {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res.map_into_left_body())
                })
            }
            Err(response) => {
                let (http_req, _payload) = req.into_parts();
                let srv_response = ServiceResponse::new(http_req, response);
                Box::pin(async move { Ok(srv_response.map_into_right_body()) })
            }
        }
    }
}

/// Reads the identity stored by [`RequireAuth`]. Using it outside a guarded
/// scope yields a 401.
impl FromRequest for Identity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req.extensions().get::<Identity>().cloned();
        ready(identity.ok_or_else(|| {
            actix_web::error::InternalError::from_response(
                AuthError::MissingAuth,
                unauthorized(&AuthError::MissingAuth),
            )
            .into()
        }))
    }
}
