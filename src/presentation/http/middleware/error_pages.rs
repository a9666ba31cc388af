// src/presentation/http/middleware/error_pages.rs
use crate::config::SiteSettings;
use crate::presentation::html::error_page::error_page;
use crate::presentation::http::error::{ErrorPage, public_copy};
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

/// Replaces the body of responses produced by `HttpError` with the full
/// error page for the configured site.
pub async fn render_error_pages(req: Request<Body>, next: Next) -> Response {
    let site = req
        .extensions()
        .get::<HttpState>()
        .map(|state| Arc::clone(&state.site));

    let mut response = next.run(req).await;
    let Some(ErrorPage { status }) = response.extensions_mut().remove::<ErrorPage>() else {
        return response;
    };

    let site = site.unwrap_or_else(|| Arc::new(SiteSettings::default()));
    let (title, message) = public_copy(status);
    (
        status,
        Html(error_page(&site, status.as_u16(), title, message)),
    )
        .into_response()
}
