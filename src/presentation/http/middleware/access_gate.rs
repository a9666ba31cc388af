// src/presentation/http/middleware/access_gate.rs
use crate::application::error::ApplicationError;
use crate::domain::user::Role;
use crate::presentation::html::escape::encode_query_value;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::session::session_token;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Sign-in location that returns the caller to `path_and_query` afterwards.
pub fn sign_in_redirect(path_and_query: &str) -> String {
    format!("/signin?callbackUrl={}", encode_query_value(path_and_query))
}

/// Middleware function that admits callers whose session role is at least
/// `required`. Anonymous callers are sent to sign-in; signed-in callers
/// below the bar get 403. The verified principal is stored in the request
/// extensions for handlers.
///
/// Usage: `axum::middleware::from_fn(|req, next| require_role(req, next, Role::Editor))`
pub async fn require_role(mut req: Request<Body>, next: Next, required: Role) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let token = session_token(req.headers());
    let principal = state.services.principal_of(token.as_deref()).await;
    let role = principal
        .as_ref()
        .map_or(Role::Anonymous, |principal| principal.role);

    if role >= required {
        if let Some(principal) = principal {
            req.extensions_mut().insert(principal);
        }
        return next.run(req).await;
    }

    if role == Role::Anonymous {
        let target = req
            .uri()
            .path_and_query()
            .map_or_else(|| req.uri().path().to_string(), ToString::to_string);
        return Redirect::to(&sign_in_redirect(&target)).into_response();
    }

    tracing::info!(%role, required = %required, path = %req.uri().path(), "access denied");
    HttpError::from_error(ApplicationError::forbidden(format!(
        "role {role} does not satisfy {required}"
    )))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_encodes_the_callback() {
        assert_eq!(
            sign_in_redirect("/admin/articles?page=2"),
            "/signin?callbackUrl=%2Fadmin%2Farticles%3Fpage%3D2"
        );
    }
}
