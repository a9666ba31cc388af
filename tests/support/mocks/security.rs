// tests/support/mocks/security.rs
use async_trait::async_trait;
use ax_portal::application::{
    ApplicationResult,
    dto::{SessionPrincipal, SessionSubject, SessionToken},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use ax_portal::domain::user::{Role, UserId};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap()
}

/* -------------------------------- TokenManager -------------------------------- */

/// Issues `issued-<user id>` tokens and recognises a fixed set of tokens.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

fn principal(id: i64, name: &str, role: Role) -> SessionPrincipal {
    let now = fixed_now();
    SessionPrincipal {
        user_id: UserId::new(id).unwrap(),
        name: name.into(),
        role,
        issued_at: now,
        expires_at: now + Duration::days(30),
        session_id: Some(format!("session-{id}")),
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: SessionSubject) -> ApplicationResult<SessionToken> {
        let now = fixed_now();
        Ok(SessionToken {
            token: format!("issued-{}", subject.user_id.0),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            max_age_secs: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<SessionPrincipal> {
        match token {
            ADMIN_TOKEN => Ok(principal(1, "管理者", Role::Admin)),
            EDITOR_TOKEN => Ok(principal(2, "編集者", Role::Editor)),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Accepts every password.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<()> {
        Ok(())
    }
}

/// Accepts `password` only when the stored hash is `hash::<password>`.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("bad password"))
        }
    }
}
