use std::sync::{Arc, Mutex};

use actix_web::{App, http::StatusCode, test, web};
use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use bookstore_core::ports::{
    AuthService, BookCategoryService, BookService, LoggerService, ServiceResult, TokenService,
    UserService,
};
use bookstore_core::{AppException, RepoError};
use bookstore_infra::{JwtConfig, JwtTokenService};
use bookstore_shared::ServiceResponseDto;
use bookstore_shared::dto::{
    BookCategoryDto, BookDto, CreateBookCategoryDto, CreateBookDto, CreateUserDto,
    GetBookCategoryDto, GetBookDto, GetUserDto, LOGIN_FAILED, LoginResponseDto, LoginUserDto,
};

use super::configure_routes;
use crate::state::AppState;

const SECRET: &str = "handler-tests-signing-key";

/// How the spy answers every service call.
#[derive(Clone)]
enum Script {
    Succeed,
    Throw(&'static str),
    RepoFault,
    LoginStatus(&'static str),
}

/// Records every service call and answers according to its script.
struct SpyServices {
    calls: Mutex<Vec<&'static str>>,
    script: Script,
}

impl SpyServices {
    fn new(script: Script) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            script,
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T>(&self, call: &'static str, data: T) -> ServiceResult<T> {
        self.calls.lock().unwrap().push(call);
        match &self.script {
            Script::Throw(message) => Err(AppException::new(*message).into()),
            Script::RepoFault => Err(RepoError::Connection("pool exhausted".to_string()).into()),
            _ => Ok(ServiceResponseDto::success_with_message(data, "Done")),
        }
    }
}

fn sample_book() -> GetBookDto {
    GetBookDto {
        id: Uuid::nil(),
        title: "Efuru".to_string(),
        author: "Flora Nwapa".to_string(),
        isbn: "0435900269".to_string(),
        description: None,
        price: 8.5,
        quantity: 3,
        category_id: Uuid::nil(),
    }
}

fn sample_category() -> GetBookCategoryDto {
    GetBookCategoryDto {
        id: Uuid::nil(),
        name: "Fiction".to_string(),
        description: None,
    }
}

#[async_trait]
impl BookService for SpyServices {
    async fn create(&self, _model: CreateBookDto) -> ServiceResult<GetBookDto> {
        self.answer("book.create", sample_book())
    }

    async fn update(&self, model: GetBookDto) -> ServiceResult<GetBookDto> {
        self.answer("book.update", model)
    }

    async fn get_all(&self) -> ServiceResult<Vec<GetBookDto>> {
        self.answer("book.get_all", Vec::new())
    }

    async fn get(&self, model: BookDto) -> ServiceResult<GetBookDto> {
        self.answer(
            "book.get",
            GetBookDto {
                id: model.id,
                ..sample_book()
            },
        )
    }

    async fn delete(&self, _model: BookDto) -> ServiceResult<()> {
        self.answer("book.delete", ())
    }
}

#[async_trait]
impl BookCategoryService for SpyServices {
    async fn create(&self, _model: CreateBookCategoryDto) -> ServiceResult<GetBookCategoryDto> {
        self.answer("category.create", sample_category())
    }

    async fn update(&self, model: GetBookCategoryDto) -> ServiceResult<GetBookCategoryDto> {
        self.answer("category.update", model)
    }

    async fn get_all(&self) -> ServiceResult<Vec<GetBookCategoryDto>> {
        self.answer("category.get_all", Vec::new())
    }

    async fn get(&self, model: BookCategoryDto) -> ServiceResult<GetBookCategoryDto> {
        self.answer(
            "category.get",
            GetBookCategoryDto {
                id: model.id,
                ..sample_category()
            },
        )
    }

    async fn delete(&self, _model: BookCategoryDto) -> ServiceResult<()> {
        self.answer("category.delete", ())
    }
}

#[async_trait]
impl UserService for SpyServices {
    async fn register_user(&self, model: CreateUserDto) -> ServiceResult<GetUserDto> {
        self.answer(
            "user.register",
            GetUserDto {
                id: Uuid::new_v4(),
                first_name: model.first_name,
                last_name: model.last_name,
                email: model.email,
            },
        )
    }
}

#[async_trait]
impl AuthService for SpyServices {
    async fn login(&self, _model: LoginUserDto) -> ServiceResult<LoginResponseDto> {
        let Script::LoginStatus(status) = &self.script else {
            return self.answer("auth.login", LoginResponseDto::rejected());
        };
        self.calls.lock().unwrap().push("auth.login");

        let login = LoginResponseDto {
            status_code: status.to_string(),
            token: "issued-token".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
            user: None,
        };
        Ok(if login.is_authenticated() {
            ServiceResponseDto::success_with_message(login, "Login successful")
        } else {
            ServiceResponseDto::error_with_data(login, "Invalid email or password")
        })
    }
}

#[derive(Default)]
struct SpyLogger {
    errors: Mutex<Vec<String>>,
    infos: Mutex<Vec<String>>,
}

impl LoggerService for SpyLogger {
    fn log_error(&self, _error: &(dyn std::error::Error + Send + Sync), message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn log_info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }
}

struct Harness {
    state: AppState,
    spy: Arc<SpyServices>,
    logger: Arc<SpyLogger>,
    tokens: Arc<JwtTokenService>,
}

fn harness(script: Script) -> Harness {
    let spy = Arc::new(SpyServices::new(script));
    let logger = Arc::new(SpyLogger::default());
    let tokens = Arc::new(JwtTokenService::new(JwtConfig {
        secret: SECRET.to_string(),
        expiration_hours: 1,
        issuer: Some("bookstore-api".to_string()),
        audience: None,
    }));

    let state = AppState {
        books: spy.clone(),
        categories: spy.clone(),
        users: spy.clone(),
        auth: spy.clone(),
        tokens: tokens.clone(),
        logger: logger.clone(),
    };

    Harness {
        state,
        spy,
        logger,
        tokens,
    }
}

impl Harness {
    fn bearer(&self) -> String {
        let token = self
            .tokens
            .generate_token(Uuid::new_v4(), "clerk@example.com")
            .unwrap();
        format!("Bearer {token}")
    }
}

fn signed_token(secret: &str, exp: i64, iss: &str, aud: &str) -> String {
    let claims = json!({
        "sub": Uuid::new_v4().to_string(),
        "email": "clerk@example.com",
        "iat": Utc::now().timestamp(),
        "exp": exp,
        "iss": iss,
        "aud": aud,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

fn valid_book() -> Value {
    json!({
        "title": "Efuru",
        "author": "Flora Nwapa",
        "isbn": "0435900269",
        "price": 8.5,
        "quantity": 3,
        "categoryId": Uuid::new_v4(),
    })
}

#[actix_web::test]
async fn test_missing_required_field_is_400_without_service_call() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);

    let mut body = valid_book();
    body.as_object_mut().unwrap().remove("title");

    let req = test::TestRequest::post()
        .uri("/api/book")
        .insert_header(("Authorization", h.bearer()))
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert!(json["errors"]["title"].is_array());
    assert!(json.get("statusCode").is_none());
    assert!(h.spy.calls().is_empty());
}

#[actix_web::test]
async fn test_update_and_delete_validate_before_dispatch() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);

    let update = test::TestRequest::post()
        .uri("/api/bookcategory/update")
        .insert_header(("Authorization", h.bearer()))
        .set_json(json!({ "id": Uuid::new_v4() }))
        .to_request();
    let delete = test::TestRequest::post()
        .uri("/api/book/delete")
        .insert_header(("Authorization", h.bearer()))
        .set_json(json!({}))
        .to_request();

    assert_eq!(
        test::call_service(&app, update).await.status(),
        StatusCode::BAD_REQUEST
    );
    let resp = test::call_service(&app, delete).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert!(json["errors"]["id"].is_array());
    assert!(h.spy.calls().is_empty());
}

#[actix_web::test]
async fn test_protected_routes_reject_missing_token() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);

    for uri in ["/api/book", "/api/bookcategory"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    let req = test::TestRequest::post()
        .uri("/api/book")
        .set_json(valid_book())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert!(h.spy.calls().is_empty());
}

#[actix_web::test]
async fn test_expired_or_foreign_key_token_is_rejected() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);
    let past = (Utc::now() - TimeDelta::hours(1)).timestamp();
    let future = (Utc::now() + TimeDelta::hours(1)).timestamp();

    for token in [
        signed_token(SECRET, past, "bookstore-api", "anyone"),
        signed_token("some-other-signing-key", future, "bookstore-api", "anyone"),
    ] {
        let req = test::TestRequest::get()
            .uri("/api/bookcategory")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    let req = test::TestRequest::get()
        .uri("/api/bookcategory")
        .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert!(h.spy.calls().is_empty());
}

#[actix_web::test]
async fn test_token_with_foreign_issuer_and_audience_is_accepted() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);
    let future = (Utc::now() + TimeDelta::hours(1)).timestamp();
    let token = signed_token(SECRET, future, "elsewhere", "someone-else");

    let req = test::TestRequest::get()
        .uri("/api/book")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(h.spy.calls(), vec!["book.get_all"]);
}

#[actix_web::test]
async fn test_valid_request_reaches_service_once_and_returns_envelope() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/book")
        .insert_header(("Authorization", h.bearer()))
        .set_json(valid_book())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = test::read_body_json(resp).await;
    let expected =
        serde_json::to_value(ServiceResponseDto::success_with_message(sample_book(), "Done"))
            .unwrap();
    assert_eq!(json, expected);
    assert_eq!(h.spy.calls(), vec!["book.create"]);
}

/// The body a `Script::Succeed` spy answers with.
fn envelope<T: Serialize>(data: T) -> Value {
    serde_json::to_value(ServiceResponseDto::success_with_message(data, "Done")).unwrap()
}

#[actix_web::test]
async fn test_every_protected_route_reaches_its_service_once() {
    let book_id = Uuid::new_v4();
    let category_id = Uuid::new_v4();
    let book = GetBookDto {
        id: book_id,
        category_id,
        ..sample_book()
    };
    let category = GetBookCategoryDto {
        id: category_id,
        name: "Biography".to_string(),
        description: Some("Lives".to_string()),
    };

    // (uri, POST body or None for GET, expected call, expected body)
    let routes: Vec<(String, Option<Value>, &str, Value)> = vec![
        (
            "/api/book".to_string(),
            Some(valid_book()),
            "book.create",
            envelope(sample_book()),
        ),
        (
            "/api/book/update".to_string(),
            Some(serde_json::to_value(&book).unwrap()),
            "book.update",
            envelope(&book),
        ),
        (
            "/api/book".to_string(),
            None,
            "book.get_all",
            envelope(Vec::<GetBookDto>::new()),
        ),
        (
            format!("/api/book/{book_id}"),
            None,
            "book.get",
            envelope(GetBookDto {
                id: book_id,
                ..sample_book()
            }),
        ),
        (
            "/api/book/delete".to_string(),
            Some(json!({ "id": book_id })),
            "book.delete",
            envelope(()),
        ),
        (
            "/api/bookcategory".to_string(),
            Some(json!({ "name": "Biography" })),
            "category.create",
            envelope(sample_category()),
        ),
        (
            "/api/bookcategory/update".to_string(),
            Some(serde_json::to_value(&category).unwrap()),
            "category.update",
            envelope(&category),
        ),
        (
            "/api/bookcategory".to_string(),
            None,
            "category.get_all",
            envelope(Vec::<GetBookCategoryDto>::new()),
        ),
        (
            format!("/api/bookcategory/{category_id}"),
            None,
            "category.get",
            envelope(GetBookCategoryDto {
                id: category_id,
                ..sample_category()
            }),
        ),
        (
            "/api/bookcategory/delete".to_string(),
            Some(json!({ "id": category_id })),
            "category.delete",
            envelope(()),
        ),
    ];

    for (uri, body, call, expected) in routes {
        let h = harness(Script::Succeed);
        let app = app!(h.state);

        let req = match body {
            Some(body) => test::TestRequest::post().uri(&uri).set_json(body),
            None => test::TestRequest::get().uri(&uri),
        }
        .insert_header(("Authorization", h.bearer()))
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK, "{call}");
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json, expected, "{call}");
        assert_eq!(h.spy.calls(), vec![call]);
    }
}

#[actix_web::test]
async fn test_get_by_id_binds_identifier_from_route() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);
    let id = Uuid::new_v4();

    let req = test::TestRequest::get()
        .uri(&format!("/api/bookcategory/{id}"))
        .insert_header(("Authorization", h.bearer()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["data"]["id"], id.to_string());
    assert_eq!(h.spy.calls(), vec!["category.get"]);
}

#[actix_web::test]
async fn test_malformed_route_identifier_is_400() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);

    let req = test::TestRequest::get()
        .uri("/api/book/not-a-uuid")
        .insert_header(("Authorization", h.bearer()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(h.spy.calls().is_empty());
}

#[actix_web::test]
async fn test_get_all_on_empty_store_is_200_with_empty_list() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);

    let req = test::TestRequest::get()
        .uri("/api/bookcategory")
        .insert_header(("Authorization", h.bearer()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["statusCode"], "SUCCESS");
    assert_eq!(json["data"], json!([]));
}

#[actix_web::test]
async fn test_app_exception_is_500_envelope_and_logged_once() {
    let h = harness(Script::Throw("X"));
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/bookcategory")
        .insert_header(("Authorization", h.bearer()))
        .set_json(json!({ "name": "Biography" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json, json!({ "statusCode": "ERROR", "statusMessage": "X" }));
    assert_eq!(*h.logger.errors.lock().unwrap(), vec!["X".to_string()]);
}

#[actix_web::test]
async fn test_unexpected_failure_is_500_without_envelope() {
    let h = harness(Script::RepoFault);
    let app = app!(h.state);

    let req = test::TestRequest::get()
        .uri("/api/book")
        .insert_header(("Authorization", h.bearer()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = test::read_body_json(resp).await;
    assert!(json.get("statusCode").is_none());
    assert_eq!(json["status"], 500);
    assert!(h.logger.errors.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_register_is_open() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/user")
        .set_json(json!({
            "firstName": "Amaka",
            "lastName": "Nwosu",
            "email": "amaka@example.com",
            "password": "reading-is-fun",
            "confirmPassword": "reading-is-fun",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(h.spy.calls(), vec!["user.register"]);
}

#[actix_web::test]
async fn test_register_with_mismatched_passwords_is_400() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/user")
        .set_json(json!({
            "firstName": "Amaka",
            "lastName": "Nwosu",
            "email": "amaka@example.com",
            "password": "reading-is-fun",
            "confirmPassword": "reading-is-fun!",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(h.spy.calls().is_empty());
}

async fn login_with(script: Script) -> (StatusCode, Value, Harness) {
    let h = harness(script);
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .set_json(json!({ "email": "clerk@example.com", "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let json: Value = test::read_body_json(resp).await;
    (status, json, h)
}

#[actix_web::test]
async fn test_login_success_status_is_200() {
    let (status, json, h) = login_with(Script::LoginStatus("00")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["statusCode"], "00");
    assert_eq!(json["data"]["token"], "issued-token");
    assert_eq!(h.logger.infos.lock().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_login_failure_status_is_400_with_same_body() {
    let (status, json, h) = login_with(Script::LoginStatus(LOGIN_FAILED)).await;

    let expected = serde_json::to_value(ServiceResponseDto::error_with_data(
        LoginResponseDto {
            status_code: LOGIN_FAILED.to_string(),
            token: "issued-token".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
            user: None,
        },
        "Invalid email or password",
    ))
    .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, expected);
    assert_eq!(h.spy.calls(), vec!["auth.login"]);
    assert!(h.logger.errors.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_login_app_exception_is_500() {
    let (status, json, h) = login_with(Script::Throw("Login is temporarily disabled")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["statusMessage"], "Login is temporarily disabled");
    assert_eq!(h.logger.errors.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_login_with_invalid_model_is_400_without_service_call() {
    let h = harness(Script::LoginStatus("00"));
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .set_json(json!({ "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(h.spy.calls().is_empty());
}

#[actix_web::test]
async fn test_malformed_json_body_is_400() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert!(json["errors"]["body"].is_array());
}

#[actix_web::test]
async fn test_health_is_open() {
    let h = harness(Script::Succeed);
    let app = app!(h.state);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
