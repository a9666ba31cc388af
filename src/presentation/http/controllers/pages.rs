// src/presentation/http/controllers/pages.rs
use crate::presentation::html::public;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::params::QueryParams;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::{Path, RawQuery},
    http::{HeaderValue, header},
    response::{Html, IntoResponse, Response},
};
use std::time::SystemTime;

pub async fn home(Extension(state): Extension<HttpState>) -> Html<String> {
    let view = state.services.pages.home().await;
    Html(public::home(&state.site, &view))
}

pub async fn article_list(
    Extension(state): Extension<HttpState>,
    RawQuery(query): RawQuery,
) -> Html<String> {
    let page = QueryParams::parse(query.as_deref()).page();
    let view = state.services.pages.article_list(page).await;
    Html(public::article_list(&state.site, &view))
}

/// Article page. Each successful render counts one view.
pub async fn article_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let view = state
        .services
        .pages
        .article_detail(&slug)
        .await
        .into_http()?;

    let last_modified = view
        .article
        .updated_at
        .or(view.article.published_at)
        .map(|modified| httpdate::fmt_http_date(SystemTime::from(modified)));

    let mut response = Html(public::article_detail(&state.site, &view)).into_response();
    if let Some(value) = last_modified.and_then(|value| HeaderValue::from_str(&value).ok()) {
        response.headers_mut().insert(header::LAST_MODIFIED, value);
    }
    Ok(response)
}

pub async fn category_index(Extension(state): Extension<HttpState>) -> Html<String> {
    let view = state.services.pages.category_index().await;
    Html(public::category_index(&state.site, &view))
}

pub async fn category_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    RawQuery(query): RawQuery,
) -> HttpResult<Html<String>> {
    let page = QueryParams::parse(query.as_deref()).page();
    let view = state
        .services
        .pages
        .category_detail(&slug, page)
        .await
        .into_http()?;
    Ok(Html(public::category_detail(&state.site, &view)))
}

pub async fn tag_index(Extension(state): Extension<HttpState>) -> Html<String> {
    let view = state.services.pages.tag_index().await;
    Html(public::tag_index(&state.site, &view))
}

pub async fn tag_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    RawQuery(query): RawQuery,
) -> HttpResult<Html<String>> {
    let page = QueryParams::parse(query.as_deref()).page();
    let view = state
        .services
        .pages
        .tag_detail(&slug, page)
        .await
        .into_http()?;
    Ok(Html(public::tag_detail(&state.site, &view)))
}

pub async fn search(
    Extension(state): Extension<HttpState>,
    RawQuery(query): RawQuery,
) -> Html<String> {
    let criteria = QueryParams::parse(query.as_deref()).search_criteria();
    let view = state.services.pages.search(criteria).await;
    Html(public::search(&state.site, &view))
}

pub async fn about(Extension(state): Extension<HttpState>) -> Html<String> {
    Html(public::about(&state.site))
}

pub async fn contact(Extension(state): Extension<HttpState>) -> Html<String> {
    Html(public::contact(&state.site))
}

pub async fn not_found() -> HttpError {
    HttpError::not_found("no route")
}
