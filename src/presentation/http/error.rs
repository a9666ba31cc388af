// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

/// Marker left on error responses; `render_error_pages` swaps the body for
/// the full site-branded page.
#[derive(Debug, Clone, Copy)]
pub struct ErrorPage {
    pub status: StatusCode,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(domain_err) => {
                let status = match &domain_err {
                    DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                    DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                    DomainError::Conflict(_) => StatusCode::CONFLICT,
                    DomainError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                Self::new(status, domain_err.to_string())
            }
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg.into())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

/// Title and explanation shown to visitors for a status code.
pub fn public_copy(status: StatusCode) -> (&'static str, &'static str) {
    match status {
        StatusCode::NOT_FOUND => (
            "ページが見つかりません",
            "お探しのページは移動または削除された可能性があります。",
        ),
        StatusCode::FORBIDDEN => (
            "アクセス権限がありません",
            "このページを表示する権限がありません。",
        ),
        StatusCode::UNAUTHORIZED => (
            "ログインが必要です",
            "このページを表示するにはログインしてください。",
        ),
        StatusCode::BAD_REQUEST => (
            "リクエストが正しくありません",
            "入力内容を確認してもう一度お試しください。",
        ),
        StatusCode::TOO_MANY_REQUESTS => (
            "リクエストが多すぎます",
            "しばらく時間をおいてから再度お試しください。",
        ),
        _ => (
            "エラーが発生しました",
            "時間をおいて再度お試しください。",
        ),
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        } else {
            tracing::debug!(status = %self.status, error = %self.message, "request rejected");
        }

        let (title, _) = public_copy(self.status);
        let mut response = (self.status, Html(format!("<h1>{title}</h1>"))).into_response();
        response
            .extensions_mut()
            .insert(ErrorPage { status: self.status });
        response
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_errors_map_to_statuses() {
        let cases = [
            (ApplicationError::not_found("x"), StatusCode::NOT_FOUND),
            (ApplicationError::forbidden("x"), StatusCode::FORBIDDEN),
            (ApplicationError::unauthorized("x"), StatusCode::UNAUTHORIZED),
            (ApplicationError::validation("x"), StatusCode::BAD_REQUEST),
            (
                ApplicationError::infrastructure("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApplicationError::Domain(DomainError::NotFound("x".into())),
                StatusCode::NOT_FOUND,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from_error(err).status(), status);
        }
    }

    #[test]
    fn responses_are_marked_for_the_error_page() {
        let response = HttpError::not_found("missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.extensions().get::<ErrorPage>().is_some());
    }
}
