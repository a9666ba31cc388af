// src/presentation/http/session.rs
//! Session cookie encoding. The cookie carries the biscuit token verbatim.
use crate::application::dto::SessionToken;
use axum::http::HeaderMap;
use headers::{Cookie, HeaderMapExt};

pub const SESSION_COOKIE: &str = "ax_session";

/// Raw token from the request's `Cookie` header, if present and non-empty.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_owned))
        .filter(|token| !token.is_empty())
}

fn cookie_attributes(max_age: i64, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!("Path=/; Max-Age={max_age}; HttpOnly; SameSite=Lax{secure}")
}

pub fn session_cookie(token: &SessionToken, secure: bool) -> String {
    format!(
        "{SESSION_COOKIE}={}; {}",
        token.token,
        cookie_attributes(token.max_age_secs.max(0), secure)
    )
}

pub fn clear_session_cookie(secure: bool) -> String {
    format!("{SESSION_COOKIE}=; {}", cookie_attributes(0, secure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};
    use chrono::Utc;

    #[test]
    fn reads_the_session_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; ax_session=abc123; other=1"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));

        headers.insert(header::COOKIE, HeaderValue::from_static("ax_session="));
        assert_eq!(session_token(&headers), None);
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn cookies_are_http_only_and_lax() {
        let now = Utc::now();
        let token = SessionToken {
            token: "tok".into(),
            issued_at: now,
            expires_at: now,
            max_age_secs: 3600,
        };
        assert_eq!(
            session_cookie(&token, true),
            "ax_session=tok; Path=/; Max-Age=3600; HttpOnly; SameSite=Lax; Secure"
        );
        assert_eq!(
            clear_session_cookie(false),
            "ax_session=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"
        );
    }
}
