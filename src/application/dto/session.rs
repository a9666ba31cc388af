use crate::domain::user::{Role, UserId};
use chrono::{DateTime, Utc};

/// Claims baked into a freshly issued session token.
#[derive(Debug, Clone)]
pub struct SessionSubject {
    pub user_id: UserId,
    pub name: String,
    pub role: Role,
    pub session_id: String,
}

#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub max_age_secs: i64,
}

/// Caller recovered from a verified session token.
#[derive(Debug, Clone)]
pub struct SessionPrincipal {
    pub user_id: UserId,
    pub name: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub session_id: Option<String>,
}
