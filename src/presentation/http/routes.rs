// src/presentation/http/routes.rs
use crate::domain::user::Role;
use crate::presentation::http::controllers::{admin, auth, pages};
use crate::presentation::http::middleware::{
    access_gate::require_role, error_pages::render_error_pages,
    rate_limit::sign_in_rate_limit_layer,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    body::Body,
    http::{HeaderValue, Method, Request},
    middleware::{self, Next},
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::{Any, CorsLayer}, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

fn public_routes() -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/articles", get(pages::article_list))
        .route("/articles/{slug}", get(pages::article_detail))
        .route("/categories", get(pages::category_index))
        .route("/categories/{slug}", get(pages::category_detail))
        .route("/tags", get(pages::tag_index))
        .route("/tags/{slug}", get(pages::tag_detail))
        .route("/search", get(pages::search))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/health", get(health))
}

fn admin_routes() -> Router {
    let user_management = Router::new()
        .route("/admin/users", get(admin::users))
        .route_layer(middleware::from_fn(|req: Request<Body>, next: Next| {
            require_role(req, next, Role::Admin)
        }));

    Router::new()
        .route("/admin", get(admin::dashboard))
        .route("/admin/articles", get(admin::articles))
        .route("/admin/categories", get(admin::categories))
        .route("/admin/tags", get(admin::tags))
        .route("/admin/settings", get(admin::settings))
        .route("/admin/contacts", get(admin::contacts))
        .merge(user_management)
        .route_layer(middleware::from_fn(|req: Request<Body>, next: Next| {
            require_role(req, next, Role::Editor)
        }))
}

fn session_routes(rate_limited: bool) -> Router {
    let mut submit = post(auth::sign_in);
    if rate_limited {
        submit = submit.layer(sign_in_rate_limit_layer());
    }

    Router::new()
        .route("/signin", get(auth::sign_in_form).merge(submit))
        .route("/signout", post(auth::sign_out))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));
    if origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(origins)
}

/// Router with the sign-in limiter toggled. Tests disable it because
/// `oneshot` requests carry no peer address to key on.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limited: bool) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        .merge(public_routes())
        .merge(admin_routes())
        .merge(session_routes(rate_limited))
        .fallback(pages::not_found)
        .layer(middleware::from_fn(render_error_pages))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub data_source: &'static str,
}

pub async fn health(Extension(state): Extension<HttpState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        data_source: state.data_source.as_str(),
    })
}
