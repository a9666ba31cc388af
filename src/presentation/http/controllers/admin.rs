// src/presentation/http/controllers/admin.rs
//! Admin area handlers. All of them sit behind the Editor gate; user
//! management is additionally gated on Admin.
use crate::application::dto::AdminSettingsView;
use crate::presentation::html::admin;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Gated;
use crate::presentation::http::params::QueryParams;
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::RawQuery, response::Html};

pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Gated(principal): Gated,
) -> Html<String> {
    let view = state.services.admin.dashboard().await;
    Html(admin::dashboard(&state.site, principal.role, &view))
}

pub async fn articles(
    Extension(state): Extension<HttpState>,
    Gated(principal): Gated,
    RawQuery(query): RawQuery,
) -> Html<String> {
    let page = QueryParams::parse(query.as_deref()).page();
    let listing = state.services.admin.articles(page).await;
    Html(admin::articles(&state.site, principal.role, &listing))
}

pub async fn categories(
    Extension(state): Extension<HttpState>,
    Gated(principal): Gated,
) -> Html<String> {
    let rows = state.services.admin.categories().await;
    Html(admin::categories(&state.site, principal.role, &rows))
}

pub async fn tags(
    Extension(state): Extension<HttpState>,
    Gated(principal): Gated,
) -> Html<String> {
    let rows = state.services.admin.tags().await;
    Html(admin::tags(&state.site, principal.role, &rows))
}

pub async fn users(
    Extension(state): Extension<HttpState>,
    Gated(principal): Gated,
) -> HttpResult<Html<String>> {
    let users = state
        .services
        .admin
        .users(principal.role)
        .await
        .into_http()?;
    Ok(Html(admin::users(&state.site, principal.role, &users)))
}

pub async fn settings(
    Extension(state): Extension<HttpState>,
    Gated(principal): Gated,
) -> Html<String> {
    let view = AdminSettingsView {
        site_name: state.site.name.clone(),
        site_url: state.site.url.clone(),
        locale: state.site.locale.as_str().to_string(),
        data_source: state.data_source.as_str().to_string(),
        environment: state.environment.as_str().to_string(),
    };
    Html(admin::settings(&state.site, principal.role, &view))
}

pub async fn contacts(
    Extension(state): Extension<HttpState>,
    Gated(principal): Gated,
) -> Html<String> {
    Html(admin::contacts(&state.site, principal.role))
}
