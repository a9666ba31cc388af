// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, header};
use axum::response::Response;
use ax_portal::application::ports::security::{PasswordHasher, TokenManager};
use ax_portal::application::services::ApplicationServices;
use ax_portal::config::{AppEnvironment, DataSourceKind, SiteSettings};
use ax_portal::domain::content::ContentRepository;
use ax_portal::domain::user::UserRepository;
use ax_portal::infrastructure::fixtures::{FixtureContentRepository, FixtureDataset};
use ax_portal::presentation::http::routes::build_router_with_rate_limiter;
use ax_portal::presentation::http::state::HttpState;

pub fn sample_content() -> Arc<dyn ContentRepository> {
    Arc::new(FixtureContentRepository::new(
        FixtureDataset::sample().expect("sample dataset"),
    ))
}

pub fn build_services(content: Arc<dyn ContentRepository>) -> Arc<ApplicationServices> {
    build_services_with_tokens(content, Arc::new(mocks::DummyTokenManager))
}

pub fn build_services_with_tokens(
    content: Arc<dyn ContentRepository>,
    token_manager: Arc<dyn TokenManager>,
) -> Arc<ApplicationServices> {
    let user_repo: Arc<dyn UserRepository> = Arc::new(mocks::DummyUserRepo);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(mocks::StrictPasswordHasher);
    Arc::new(ApplicationServices::new(
        content,
        user_repo,
        password_hasher,
        token_manager,
    ))
}

pub fn build_test_state(content: Arc<dyn ContentRepository>) -> HttpState {
    HttpState {
        services: build_services(content),
        site: Arc::new(SiteSettings {
            url: "https://ax.example.com".into(),
            ..SiteSettings::default()
        }),
        data_source: DataSourceKind::Fixture,
        environment: AppEnvironment::Development,
        allowed_origins: Arc::from(Vec::<String>::new()),
    }
}

/// Router over the built-in sample content.
pub fn make_test_router() -> axum::Router {
    make_test_router_with_content(sample_content())
}

pub fn make_test_router_with_content(content: Arc<dyn ContentRepository>) -> axum::Router {
    build_router_with_rate_limiter(build_test_state(content), false)
}

/// Router whose sessions are issued and checked by `token_manager`.
pub fn make_test_router_with_tokens(token_manager: Arc<dyn TokenManager>) -> axum::Router {
    let state = HttpState {
        services: build_services_with_tokens(sample_content(), token_manager),
        ..build_test_state(sample_content())
    };
    build_router_with_rate_limiter(state, false)
}

/// Value of the `ax_session` cookie set by a response.
pub fn session_cookie_value(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| cookie.strip_prefix("ax_session="))
        .and_then(|rest| rest.split(';').next())
        .map(str::to_owned)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_session(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, format!("ax_session={token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = body::to_bytes(response.into_body(), 4 * 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
