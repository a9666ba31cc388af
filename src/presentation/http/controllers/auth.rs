// src/presentation/http/controllers/auth.rs
use crate::application::{commands::session::SignInCommand, error::ApplicationError};
use crate::presentation::html::auth;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::params::QueryParams;
use crate::presentation::http::session::{clear_session_cookie, session_cookie, session_token};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form,
    extract::RawQuery,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

const DEFAULT_CALLBACK: &str = "/admin";
const INVALID_CREDENTIALS: &str = "メールアドレスまたはパスワードが正しくありません。";

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Only same-site relative paths are honoured as post sign-in targets.
/// Browsers drop tabs and newlines from URLs, so any whitespace or control
/// character rejects the candidate outright.
pub fn safe_callback(candidate: Option<&str>) -> String {
    match candidate {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(|c| c.is_whitespace() || c.is_control()) =>
        {
            path.to_string()
        }
        _ => DEFAULT_CALLBACK.to_string(),
    }
}

/// Callers that already hold an admin-capable session skip the form.
pub async fn sign_in_form(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let params = QueryParams::parse(query.as_deref());
    let callback = safe_callback(params.get("callbackUrl"));

    let token = session_token(&headers);
    if state.services.role_of(token.as_deref()).await.can_access_admin() {
        return Redirect::to(&callback).into_response();
    }
    Html(auth::sign_in(&state.site, &callback, "", None)).into_response()
}

pub async fn sign_in(
    Extension(state): Extension<HttpState>,
    Form(form): Form<SignInForm>,
) -> Response {
    let callback = safe_callback(form.callback_url.as_deref());
    let command = SignInCommand {
        email: form.email.clone(),
        password: form.password,
    };

    match state.services.sessions.sign_in(command).await {
        Ok(result) => {
            let cookie = session_cookie(&result.token, state.site.secure_cookies);
            ([(header::SET_COOKIE, cookie)], Redirect::to(&callback)).into_response()
        }
        Err(ApplicationError::Unauthorized(reason)) => {
            tracing::info!(%reason, "sign-in rejected");
            (
                StatusCode::UNAUTHORIZED,
                Html(auth::sign_in(
                    &state.site,
                    &callback,
                    &form.email,
                    Some(INVALID_CREDENTIALS),
                )),
            )
                .into_response()
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

pub async fn sign_out(Extension(state): Extension<HttpState>) -> Response {
    (
        [(
            header::SET_COOKIE,
            clear_session_cookie(state.site.secure_cookies),
        )],
        Redirect::to("/"),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_must_stay_on_site() {
        assert_eq!(safe_callback(Some("/admin/users")), "/admin/users");
        assert_eq!(safe_callback(Some("//evil.example.com")), "/admin");
        assert_eq!(safe_callback(Some("https://evil.example.com")), "/admin");
        assert_eq!(safe_callback(Some("/\\evil.example.com")), "/admin");
        assert_eq!(safe_callback(None), "/admin");
    }

    #[test]
    fn callbacks_with_whitespace_or_control_characters_are_rejected() {
        for candidate in [
            "/\t/evil.example.com",
            "/\n/evil.example.com",
            "/\r\n/evil.example.com",
            "/admin\r\n",
            " //evil.example.com",
            "/ /evil.example.com",
            "/\u{0}/evil.example.com",
            "/\u{7f}/evil.example.com",
            "/\u{3000}/evil.example.com",
        ] {
            assert_eq!(safe_callback(Some(candidate)), "/admin", "{candidate:?}");
        }
    }

    #[test]
    fn percent_encoded_callbacks_stay_literal_paths() {
        // a still-encoded tab or slash is not decoded again by the browser
        assert_eq!(
            safe_callback(Some("/%09/evil.example.com")),
            "/%09/evil.example.com"
        );
        assert_eq!(safe_callback(Some("/%2F/evil.example.com")), "/%2F/evil.example.com");
        assert_eq!(safe_callback(Some("/search?q=a%20b")), "/search?q=a%20b");
    }
}
