// tests/e2e_access_gate.rs
use std::{sync::Arc, time::Duration};

use axum::http::{StatusCode, header};
use ax_portal::infrastructure::security::token::BiscuitTokenManager;
use tower::util::ServiceExt as _;

mod support;

use support::{ADMIN_TOKEN, EDITOR_TOKEN, EXPIRED_TOKEN, body_text, get, get_with_session, location, post_form};

const ADMIN_PAGES: [&str; 7] = [
    "/admin",
    "/admin/articles",
    "/admin/categories",
    "/admin/tags",
    "/admin/users",
    "/admin/settings",
    "/admin/contacts",
];

#[tokio::test]
async fn anonymous_callers_are_redirected_to_sign_in_with_callback() {
    for uri in ADMIN_PAGES {
        let app = support::make_test_router();
        let resp = app.oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        let expected = format!(
            "/signin?callbackUrl={}",
            uri.replace('/', "%2F")
        );
        assert_eq!(location(&resp), Some(expected.as_str()));
    }
}

#[tokio::test]
async fn callback_keeps_the_query_string() {
    let app = support::make_test_router();
    let resp = app.oneshot(get("/admin/articles?page=2")).await.unwrap();
    assert_eq!(
        location(&resp),
        Some("/signin?callbackUrl=%2Fadmin%2Farticles%3Fpage%3D2")
    );
}

#[tokio::test]
async fn invalid_and_expired_sessions_count_as_anonymous() {
    for token in [EXPIRED_TOKEN, "garbage"] {
        let app = support::make_test_router();
        let resp = app
            .oneshot(get_with_session("/admin", token))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{token}");
    }
}

#[tokio::test]
async fn editors_reach_the_admin_area_but_not_user_management() {
    for uri in ADMIN_PAGES {
        let app = support::make_test_router();
        let resp = app
            .oneshot(get_with_session(uri, EDITOR_TOKEN))
            .await
            .unwrap();
        let expected = if uri == "/admin/users" {
            StatusCode::FORBIDDEN
        } else {
            StatusCode::OK
        };
        assert_eq!(resp.status(), expected, "{uri}");
    }
}

#[tokio::test]
async fn forbidden_response_is_the_error_page() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(get_with_session("/admin/users", EDITOR_TOKEN))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(body_text(resp).await.contains("アクセス権限がありません"));
}

#[tokio::test]
async fn admins_see_user_management() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(get_with_session("/admin/users", ADMIN_TOKEN))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("admin@example.com"));
    assert!(html.contains("editor@example.com"));
    assert!(html.contains("noindex"));
}

#[tokio::test]
async fn editor_navigation_omits_user_management() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(get_with_session("/admin", EDITOR_TOKEN))
        .await
        .unwrap();
    let html = body_text(resp).await;
    assert!(html.contains("ダッシュボード"));
    assert!(!html.contains("href=\"/admin/users\""));
}

#[tokio::test]
async fn settings_page_reports_the_data_source() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(get_with_session("/admin/settings", ADMIN_TOKEN))
        .await
        .unwrap();
    let html = body_text(resp).await;
    assert!(html.contains("<dd>fixture</dd>"));
    assert!(html.contains("<dd>development</dd>"));
}

#[tokio::test]
async fn sign_in_sets_the_session_cookie_and_follows_the_callback() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(post_form(
            "/signin",
            "email=editor%40example.com&password=editor-pass&callbackUrl=%2Fadmin%2Ftags",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/tags"));

    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.starts_with("ax_session=issued-2;"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn off_site_callbacks_fall_back_to_the_dashboard() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(post_form(
            "/signin",
            "email=admin%40example.com&password=admin-pass&callbackUrl=https%3A%2F%2Fevil.example.com",
        ))
        .await
        .unwrap();
    assert_eq!(location(&resp), Some("/admin"));
}

#[tokio::test]
async fn callbacks_hiding_a_protocol_relative_url_fall_back_to_the_dashboard() {
    for callback in ["%2F%09%2Fevil.example.com", "%2F%0A%2Fevil.example.com", "%2Fadmin%0D%0A"] {
        let app = support::make_test_router();
        let resp = app
            .oneshot(post_form(
                "/signin",
                &format!("email=admin%40example.com&password=admin-pass&callbackUrl={callback}"),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{callback}");
        assert_eq!(location(&resp), Some("/admin"), "{callback}");
    }
}

#[tokio::test]
async fn wrong_password_re_renders_the_form() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(post_form(
            "/signin",
            "email=admin%40example.com&password=wrong",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());
    let html = body_text(resp).await;
    assert!(html.contains("メールアドレスまたはパスワードが正しくありません。"));
    assert!(html.contains("value=\"admin@example.com\""));
}

#[tokio::test]
async fn sign_in_form_echoes_a_safe_callback() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(get("/signin?callbackUrl=%2Fadmin%2Fusers"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("name=\"callbackUrl\" value=\"/admin/users\""));
}

#[tokio::test]
async fn sign_out_clears_the_cookie() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(post_form("/signout", ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn signed_in_editors_skip_the_sign_in_form() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(get_with_session("/signin?callbackUrl=%2Fadmin%2Ftags", EDITOR_TOKEN))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/tags"));
}

const SIGNING_KEY: &str = "8a7b6c5d4e3f20118a7b6c5d4e3f20118a7b6c5d4e3f20118a7b6c5d4e3f2011";

fn biscuit_router() -> axum::Router {
    let manager = BiscuitTokenManager::new(SIGNING_KEY, Duration::from_secs(3600)).unwrap();
    support::make_test_router_with_tokens(Arc::new(manager))
}

async fn sign_in_for_cookie(app: axum::Router, email: &str, password: &str) -> String {
    let resp = app
        .oneshot(post_form(
            "/signin",
            &format!("email={}&password={password}", email.replace('@', "%40")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    support::session_cookie_value(&resp).expect("session cookie")
}

#[tokio::test]
async fn biscuit_sessions_from_sign_in_pass_the_admin_gate() {
    let token = sign_in_for_cookie(biscuit_router(), "admin@example.com", "admin-pass").await;

    for uri in ADMIN_PAGES {
        let resp = biscuit_router()
            .oneshot(get_with_session(uri, &token))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn biscuit_editor_sessions_are_kept_out_of_user_management() {
    let token = sign_in_for_cookie(biscuit_router(), "editor@example.com", "editor-pass").await;

    let resp = biscuit_router()
        .oneshot(get_with_session("/admin", &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = biscuit_router()
        .oneshot(get_with_session("/admin/users", &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
